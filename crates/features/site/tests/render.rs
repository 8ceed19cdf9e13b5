//! Server-side rendering checks: each registered path renders its page
//! through the shared shell.

use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use olaat_domain::constants::headings;
use olaat_site::App;
use std::rc::Rc;

fn render_at(path: &str) -> String {
    let mut dom = VirtualDom::new(App);
    let history: Rc<dyn History> = Rc::new(MemoryHistory::with_initial_path(path));
    dom.insert_any_root_context(Box::new(history));
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn each_registered_path_renders_its_heading() {
    let cases = [
        ("/", headings::HOME),
        ("/about", headings::ABOUT),
        ("/services", headings::SERVICES),
        ("/elite", headings::ELITE),
        ("/speaking", headings::SPEAKING),
        ("/veterans", headings::VETERANS),
        ("/contact", headings::CONTACT),
    ];

    for (path, heading) in cases {
        let html = render_at(path);
        assert!(html.contains(heading), "page at {path} is missing {heading:?}");
    }
}

#[test]
fn shell_wraps_every_page() {
    let html = render_at("/about");
    // Header menu, banner and footer all come from the shared shell.
    for label in ["Home", "About", "Services", "ELITE", "Speaking", "Veterans", "Contact"] {
        assert!(html.contains(label), "missing nav label {label}");
    }
    assert!(html.contains("fb-cover.png"));
    assert!(html.contains("#4C7CC1"), "header should use the resolved header blue");
}

#[test]
fn footer_shows_the_current_year() {
    let year = chrono::Local::now().year();
    let html = render_at("/");
    assert!(html.contains(&format!("© {year}")));
    assert!(html.contains("One Leader at a Time Leadership Group, LLC"));
}

#[test]
fn home_renders_gold_call_to_actions() {
    let html = render_at("/");
    assert!(html.contains("Book a discovery call"));
    assert!(html.contains("#F5C24B"), "CTA should use the resolved gold");
}

#[test]
fn contact_form_lists_the_named_fields() {
    let html = render_at("/contact");
    for name in ["name", "email", "phone", "inquiry", "message"] {
        assert!(html.contains(&format!("name=\"{name}\"")), "missing field {name}");
    }
    assert!(html.contains("Send message"));
}

#[test]
fn unregistered_paths_render_the_not_found_page() {
    let html = render_at("/pricing");
    assert!(html.contains(headings::NOT_FOUND));
    // The shell stays up around the fallback page.
    assert!(html.contains("Veterans"));
}
