use crate::routes::Route;
use crate::use_brand;
use dioxus::prelude::*;
use olaat_domain::constants::{GOLD, GOLD_DARK, HEADING, LINK};

/// Call-to-action link. Hover is declarative local state: a boolean signal
/// flipped by pointer enter/leave, with the colors derived from it through
/// the theme resolver. Carries no application state.
#[component]
pub fn GoldButton(to: Route, text: String) -> Element {
    let brand = use_brand();
    let nav = use_navigator();
    let mut hovered = use_signal(|| false);

    let (background, color) = if hovered() {
        (brand.color(GOLD_DARK).to_owned(), "#FFFFFF")
    } else {
        (brand.color(GOLD).to_owned(), "#0f172a")
    };
    let href = to.to_string();

    rsx! {
        a {
            class: "cta",
            href: "{href}",
            style: "background-color: {background}; color: {color};",
            onclick: move |evt| {
                evt.prevent_default();
                nav.push(to.clone());
            },
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            "{text}"
        }
    }
}

/// The header banner image. On image-load failure the broken image is
/// hidden and a text label with the brand name takes its place; this is
/// the only failure-recovery path in the site.
#[component]
pub fn Banner() -> Element {
    let brand = use_brand();
    let mut failed = use_signal(|| false);

    let heading_font = brand.font(HEADING).to_owned();
    let link_color = brand.color(LINK).to_owned();

    rsx! {
        if failed() {
            span {
                class: "banner-fallback",
                style: "font-family: {heading_font}; color: {link_color};",
                "{brand.name}"
            }
        } else {
            img {
                class: "banner-img",
                src: "{brand.banner_url}",
                alt: "One Leader at a Time banner",
                onerror: move |_| failed.set(true),
            }
        }
    }
}
