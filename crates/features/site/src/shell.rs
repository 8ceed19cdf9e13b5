use crate::routes::Route;
use crate::use_brand;
use crate::widgets::Banner;
use chrono::{Datelike, Local};
use dioxus::prelude::*;
use olaat_domain::brand::BrandConfig;
use olaat_domain::constants::{BODY, DOCUMENT_TITLE, HEADER_BLUE, LINK};
use olaat_domain::nav::{FOOTER_LINKS, NAV_ITEMS};
use tracing::{info, warn};

/// Baseline styles for the shell and widgets. Brand colors and fonts are
/// resolved per element; this only carries layout and interaction affordances.
const GLOBAL_CSS: &str = r"
* { box-sizing: border-box; }
body { margin: 0; background: #ffffff; }
a { text-decoration: none; }
.site { min-height: 100vh; display: flex; flex-direction: column; }
.site main { flex: 1 1 auto; }
.site-header { position: sticky; top: 0; z-index: 40; }
.site-nav { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; height: 6rem;
            display: flex; align-items: center; justify-content: space-between; }
.menu { display: flex; align-items: center; gap: 1.5rem; font-size: 0.875rem; }
.menu-link:hover { opacity: 0.9; }
.menu-link.active { font-weight: 600; }
.banner-img { height: 4rem; width: auto; object-fit: contain; }
.banner-fallback { font-size: 1.25rem; font-weight: 700; }
.cta { display: inline-block; padding: 0.75rem 1.25rem; border-radius: 0.5rem;
       transition: background-color 0.2s, color 0.2s; }
.page { max-width: 80rem; margin: 0 auto; padding: 2.5rem 1.5rem; }
.hero { width: 100%; text-align: center; padding: 5rem 1.5rem; }
.hero p { max-width: 42rem; margin: 1rem auto 0; font-size: 1.125rem; }
.hero-actions { margin-top: 2rem; display: flex; justify-content: center; gap: 1rem; }
.site-footer { margin-top: 2.5rem; }
.footer-inner { max-width: 80rem; margin: 0 auto; padding: 2.5rem 1.5rem;
                display: flex; align-items: center; justify-content: space-between;
                gap: 0.75rem; flex-wrap: wrap; font-size: 0.875rem; color: #f1f5f9; }
.footer-links { display: flex; gap: 1rem; }
.contact-form { max-width: 36rem; display: grid; gap: 1rem; }
.contact-form label { display: grid; gap: 0.25rem; font-weight: 600; }
.contact-form input, .contact-form select, .contact-form textarea {
    padding: 0.5rem 0.75rem; border: 1px solid #cbd5e1; border-radius: 0.375rem;
    font: inherit; }
.video-frame { width: 100%; max-width: 48rem; aspect-ratio: 16 / 9; border: 0; }
";

/// The shared layout wrapping every page: header with navigation, the routed
/// content area, and the footer. Sets the document title as an idempotent
/// side effect and runs the brand self-check once on first mount.
#[component]
pub fn Shell() -> Element {
    let brand = use_brand();
    use_hook(|| log_self_check(&brand));

    let body_color = brand.color(BODY).to_owned();
    let body_font = brand.font(BODY).to_owned();

    rsx! {
        document::Title { "{DOCUMENT_TITLE}" }
        document::Style { {GLOBAL_CSS} }
        div { class: "site", style: "color: {body_color}; font-family: {body_font};",
            Header {}
            main { Outlet::<Route> {} }
            Footer {}
        }
    }
}

#[component]
fn Header() -> Element {
    let brand = use_brand();
    let header_blue = brand.color(HEADER_BLUE).to_owned();
    let link_color = brand.color(LINK).to_owned();

    rsx! {
        header { class: "site-header", style: "background-color: {header_blue};",
            nav { class: "site-nav",
                Link { to: Route::Home {}, Banner {} }
                div { class: "menu",
                    for (item, route) in NAV_ITEMS.iter().zip(Route::PAGES) {
                        Link {
                            key: "{item.path}",
                            to: route,
                            active_class: "active",
                            class: "menu-link",
                            style: "color: {link_color};",
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let brand = use_brand();
    let header_blue = brand.color(HEADER_BLUE).to_owned();
    let link_color = brand.color(LINK).to_owned();
    let year = Local::now().year();
    let copyright = brand.copyright(year);

    rsx! {
        footer { class: "site-footer", style: "background-color: {header_blue};",
            div { class: "footer-inner",
                div { "{copyright}" }
                div { class: "footer-links",
                    for item in FOOTER_LINKS {
                        Link {
                            key: "{item.path}",
                            to: Route::resolve(item.path),
                            style: "color: {link_color};",
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

/// Reports each startup assertion as a pass/fail row to the diagnostic log.
/// Observability only; rendering proceeds regardless of the outcome.
fn log_self_check(brand: &BrandConfig) {
    for row in brand.self_check() {
        if row.pass {
            info!(test = row.name, pass = row.pass, "brand self-check");
        } else {
            warn!(test = row.name, pass = row.pass, "brand self-check");
        }
    }
}
