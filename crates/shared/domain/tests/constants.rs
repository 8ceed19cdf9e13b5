use olaat_domain::constants::{BODY, GOLD, GOLD_DARK, HEADER_BLUE, HEADING, LINK, SKY, WHITE};
use olaat_domain::nav::{FOOTER_LINKS, NAV_ITEMS};

#[test]
fn constants_match_palette_strings() {
    assert_eq!(HEADER_BLUE, "headerBlue");
    assert_eq!(LINK, "link");
    assert_eq!(GOLD, "gold");
    assert_eq!(GOLD_DARK, "goldDark");
    assert_eq!(SKY, "sky");
    assert_eq!(WHITE, "white");
    assert_eq!(BODY, "body");
    assert_eq!(HEADING, "heading");
}

#[test]
fn nav_items_are_ordered_and_unique() {
    let paths: Vec<&str> = NAV_ITEMS.iter().map(|item| item.path).collect();
    assert_eq!(paths, ["/", "/about", "/services", "/elite", "/speaking", "/veterans", "/contact"]);

    let mut labels: Vec<&str> = NAV_ITEMS.iter().map(|item| item.label).collect();
    labels.dedup();
    assert_eq!(labels.len(), NAV_ITEMS.len());
}

#[test]
fn footer_links_point_at_registered_paths() {
    for link in FOOTER_LINKS {
        assert!(NAV_ITEMS.iter().any(|item| item.path == link.path), "unknown path {}", link.path);
    }
}
