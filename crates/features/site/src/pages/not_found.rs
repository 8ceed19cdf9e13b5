use super::heading_style;
use crate::routes::Route;
use crate::use_brand;
use crate::widgets::GoldButton;
use dioxus::prelude::*;
use olaat_domain::constants::headings;

/// Dedicated page for unregistered paths. The original route table left
/// these unhandled (a blank content area); rendering an explicit fallback
/// inside the shell is the intended replacement behavior.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let brand = use_brand();
    let h1_style = heading_style(&brand);
    let requested = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "page",
            h1 { style: "{h1_style}", {headings::NOT_FOUND} }
            p { "There is no page at \"{requested}\"." }
            div { class: "hero-actions",
                GoldButton { to: Route::Home {}, text: "Back to the home page" }
            }
        }
    }
}
