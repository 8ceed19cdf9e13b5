//! String constants shared across the site.
//!
//! Palette and font-stack keys are semantic names, not CSS values; every
//! consumer resolves them through [`crate::brand::BrandConfig`] so a missing
//! entry degrades to a fallback instead of failing.

/// Palette keys.
pub const HEADER_BLUE: &str = "headerBlue";
pub const LINK: &str = "link";
pub const GOLD: &str = "gold";
pub const GOLD_DARK: &str = "goldDark";
pub const SKY: &str = "sky";
pub const WHITE: &str = "white";
/// Doubles as the body font-stack key.
pub const BODY: &str = "body";

/// Font-stack keys.
pub const HEADING: &str = "heading";

/// The document display title, set by the shell on every render.
pub const DOCUMENT_TITLE: &str =
    "One Leader at a Time – Leadership Group™ | E.L.I.T.E.™ Framework";

/// Fixed page headings, keyed by route.
pub mod headings {
    pub const HOME: &str = "Lead Today. Transform Tomorrow.";
    pub const ABOUT: &str = "About One Leader at a Time";
    pub const SERVICES: &str = "Coaching and Development Services";
    pub const ELITE: &str = "The E.L.I.T.E.™ Framework";
    pub const SPEAKING: &str = "Speaking and Keynotes";
    pub const VETERANS: &str = "Veterans Leadership Program";
    pub const CONTACT: &str = "Start the Conversation";
    pub const NOT_FOUND: &str = "Page Not Found";
}

/// External static assets referenced by the Speaking page. The site only
/// carries the paths; the files live on the static file server.
pub const SPEAKING_VIDEO_URL: &str = "https://player.vimeo.com/video/903741284";
pub const SPEAKER_KIT_PATH: &str = "/downloads/speaker-kit.pdf";

pub const CONTACT_EMAIL: &str = "hello@oneleaderatatime.com";
