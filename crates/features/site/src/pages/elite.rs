use super::heading_style;
use crate::routes::Route;
use crate::use_brand;
use crate::widgets::GoldButton;
use dioxus::prelude::*;
use olaat_domain::constants::headings;

/// The five pillars, in order.
const PILLARS: [(&str, &str); 5] = [
    ("Empower", "Build agency in yourself and the people you lead."),
    ("Lead", "Set direction with clarity and hold it under pressure."),
    ("Inspire", "Connect daily work to a purpose worth the effort."),
    ("Transform", "Replace limiting habits with deliberate practice."),
    ("Elevate", "Lift the standard for everyone around you."),
];

#[component]
pub fn Elite() -> Element {
    let brand = use_brand();
    let h1_style = heading_style(&brand);

    rsx! {
        section { class: "page",
            h1 { style: "{h1_style}", {headings::ELITE} }
            p {
                "E.L.I.T.E.™ is our five-pillar development path. Each pillar is a "
                "trainable discipline, not a personality trait."
            }
            dl {
                for (name, blurb) in PILLARS {
                    dt { key: "{name}", strong { "{name}" } }
                    dd { "{blurb}" }
                }
            }
            div { class: "hero-actions",
                GoldButton { to: Route::Contact {}, text: "Bring E.L.I.T.E.™ to your team" }
            }
        }
    }
}
