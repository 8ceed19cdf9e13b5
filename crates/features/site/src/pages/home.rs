use super::heading_style;
use crate::routes::Route;
use crate::use_brand;
use crate::widgets::GoldButton;
use dioxus::prelude::*;
use olaat_domain::constants::headings;
use olaat_domain::constants::{SKY, WHITE};

#[component]
pub fn Home() -> Element {
    let brand = use_brand();
    let sky = brand.color(SKY).to_owned();
    let white = brand.color(WHITE).to_owned();
    let h1_style = heading_style(&brand);

    rsx! {
        section {
            class: "hero",
            style: "background: linear-gradient(180deg, {sky} 0%, {white} 100%);",
            h1 { style: "{h1_style}", {headings::HOME} }
            p {
                "Empowering leaders and organizations through the E.L.I.T.E.™ Framework — "
                "Empower, Lead, Inspire, Transform, Elevate."
            }
            div { class: "hero-actions",
                GoldButton { to: Route::Contact {}, text: "Book a discovery call" }
                GoldButton { to: Route::Elite {}, text: "Explore the E.L.I.T.E.™ Framework" }
            }
        }
        section { class: "page",
            p {
                "{brand.tagline}. We partner with executives, emerging leaders and "
                "mission-driven teams to turn everyday management into legendary leadership."
            }
        }
    }
}
