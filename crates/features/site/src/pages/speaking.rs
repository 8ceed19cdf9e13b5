use super::heading_style;
use crate::use_brand;
use dioxus::prelude::*;
use olaat_domain::constants::headings;
use olaat_domain::constants::{SPEAKER_KIT_PATH, SPEAKING_VIDEO_URL};

#[component]
pub fn Speaking() -> Element {
    let brand = use_brand();
    let h1_style = heading_style(&brand);

    rsx! {
        section { class: "page",
            h1 { style: "{h1_style}", {headings::SPEAKING} }
            p {
                "Keynotes and workshops that leave audiences with one actionable shift, "
                "not a page of platitudes. Watch a recent talk:"
            }
            iframe {
                class: "video-frame",
                src: "{SPEAKING_VIDEO_URL}",
                title: "Speaking reel",
                allowfullscreen: true,
            }
            h2 { "Popular topics" }
            ul {
                li { "Transforming Ordinary into Legendary" }
                li { "Leading When Nobody Is Watching" }
                li { "The E.L.I.T.E.™ Framework in 45 Minutes" }
            }
            p {
                "Booking a venue? Download the "
                a { href: "{SPEAKER_KIT_PATH}", download: "speaker-kit.pdf", "speaker kit" }
                " for bio, headshots and A/V requirements."
            }
        }
    }
}
