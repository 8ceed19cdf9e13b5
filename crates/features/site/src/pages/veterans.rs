use super::heading_style;
use crate::routes::Route;
use crate::use_brand;
use crate::widgets::GoldButton;
use dioxus::prelude::*;
use olaat_domain::constants::headings;

#[component]
pub fn Veterans() -> Element {
    let brand = use_brand();
    let h1_style = heading_style(&brand);

    rsx! {
        section { class: "page",
            h1 { style: "{h1_style}", {headings::VETERANS} }
            p {
                "Veterans already know how to lead under pressure. Our transition "
                "program translates that experience into the language and habits of "
                "civilian organizations — without asking anyone to start over."
            }
            ul {
                li { "Cohort-based coaching with fellow veterans" }
                li { "Career-transition mentoring and interview preparation" }
                li { "Scholarship seats in every E.L.I.T.E.™ cohort" }
            }
            p {
                "A portion of every corporate engagement funds this program."
            }
            div { class: "hero-actions",
                GoldButton { to: Route::Contact {}, text: "Join the next cohort" }
            }
        }
    }
}
