//! The fixed header menu.

/// A single (path, label) entry in the header navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
}

/// The ordered header menu. Every path here must have a matching entry in
/// the site's route table, and vice versa; the site crate pins that with a
/// test.
pub const NAV_ITEMS: [NavItem; 7] = [
    NavItem { path: "/", label: "Home" },
    NavItem { path: "/about", label: "About" },
    NavItem { path: "/services", label: "Services" },
    NavItem { path: "/elite", label: "ELITE" },
    NavItem { path: "/speaking", label: "Speaking" },
    NavItem { path: "/veterans", label: "Veterans" },
    NavItem { path: "/contact", label: "Contact" },
];

/// Secondary links rendered in the footer.
pub const FOOTER_LINKS: [NavItem; 3] = [
    NavItem { path: "/elite", label: "The Framework" },
    NavItem { path: "/veterans", label: "Veterans" },
    NavItem { path: "/contact", label: "Contact" },
];
