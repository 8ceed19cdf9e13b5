//! Facade crate for the One Leader at a Time site.
//! Re-exports the brand domain and the site slice.
//! Keep this crate thin: it should compose other crates, not implement content.
//!
//! ## Usage
//! - Add `olaat` with the desired platform feature (`web`/`desktop`).
//! - Launch `olaat::site::App` from the application binary.

pub use olaat_domain as domain;
pub use olaat_site as site;

/// Commonly used entry points.
pub mod prelude {
    pub use crate::domain::brand::BrandConfig;
    pub use crate::site::{App, Route};
}
