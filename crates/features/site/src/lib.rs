//! Site feature slice: the route table, the shared shell and the page
//! components, rendered with Dioxus.
//!
//! The one piece of shared state, [`BrandConfig`], is constructed once at
//! the root and handed to components through the Dioxus context; nothing
//! else in the slice is stateful beyond per-widget hover signals.

pub mod pages;
mod routes;
mod shell;
mod widgets;

pub use crate::routes::Route;
pub use crate::shell::Shell;
pub use crate::widgets::{Banner, GoldButton};

use dioxus::prelude::*;
use olaat_domain::brand::BrandConfig;

/// Root component: provides the brand configuration and mounts the router.
#[component]
pub fn App() -> Element {
    use_context_provider(BrandConfig::default);

    rsx! {
        Router::<Route> {}
    }
}

/// The brand configuration provided at the app root.
///
/// Cheap to call: [`BrandConfig`] is an `Arc` wrapper.
#[must_use]
pub fn use_brand() -> BrandConfig {
    use_context::<BrandConfig>()
}
