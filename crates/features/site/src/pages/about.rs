use super::heading_style;
use crate::use_brand;
use dioxus::prelude::*;
use olaat_domain::constants::headings;

#[component]
pub fn About() -> Element {
    let brand = use_brand();
    let h1_style = heading_style(&brand);

    rsx! {
        section { class: "page",
            h1 { style: "{h1_style}", {headings::ABOUT} }
            p {
                "One Leader at a Time was founded on a simple conviction: organizations "
                "do not transform — people do, one leader at a time. We coach the person "
                "first and the title second."
            }
            p {
                "Our founder spent over two decades leading teams in uniform and in the "
                "boardroom before building the E.L.I.T.E.™ Framework, a practical path "
                "from ordinary management habits to legendary leadership presence."
            }
            h2 { "What we believe" }
            ul {
                li { "Leadership is learned behavior, not a birthright." }
                li { "Character outlasts charisma." }
                li { "Every team deserves a leader worth following." }
            }
        }
    }
}
