use super::heading_style;
use crate::routes::Route;
use crate::use_brand;
use crate::widgets::GoldButton;
use dioxus::prelude::*;
use olaat_domain::constants::headings;

#[component]
pub fn Services() -> Element {
    let brand = use_brand();
    let h1_style = heading_style(&brand);

    rsx! {
        section { class: "page",
            h1 { style: "{h1_style}", {headings::SERVICES} }
            h2 { "Executive Coaching" }
            p {
                "One-on-one engagements for senior leaders: candid assessment, a "
                "personal leadership operating system, and accountability that sticks."
            }
            h2 { "Team Development" }
            p {
                "Workshops and offsites that move intact teams from polite coordination "
                "to genuine trust, built around the E.L.I.T.E.™ pillars."
            }
            h2 { "Organizational Programs" }
            p {
                "Multi-month leadership cohorts for organizations growing their next "
                "generation of leaders from within."
            }
            div { class: "hero-actions",
                GoldButton { to: Route::Contact {}, text: "Discuss an engagement" }
            }
        }
    }
}
