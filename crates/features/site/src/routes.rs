use crate::pages::{About, Contact, Elite, Home, NotFound, Services, Speaking, Veterans};
use crate::shell::Shell;
use dioxus::prelude::*;
use olaat_domain::constants::headings;

/// The static route table. Built once; exactly one page renders per
/// navigation, selected by exact path match. Unregistered paths hit the
/// [`NotFound`] catch-all, which renders a dedicated page inside the shell.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/elite")]
    Elite {},
    #[route("/speaking")]
    Speaking {},
    #[route("/veterans")]
    Veterans {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// The seven registered pages, in header-menu order. Kept in lockstep
    /// with [`olaat_domain::nav::NAV_ITEMS`] (pinned by a test).
    pub const PAGES: [Self; 7] = [
        Self::Home {},
        Self::About {},
        Self::Services {},
        Self::Elite {},
        Self::Speaking {},
        Self::Veterans {},
        Self::Contact {},
    ];

    /// Exact-match lookup for a path string; unregistered paths land on
    /// the catch-all.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or(Self::NotFound { segments: Vec::new() })
    }

    /// The fixed heading rendered by this route's page.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::Home {} => headings::HOME,
            Self::About {} => headings::ABOUT,
            Self::Services {} => headings::SERVICES,
            Self::Elite {} => headings::ELITE,
            Self::Speaking {} => headings::SPEAKING,
            Self::Veterans {} => headings::VETERANS,
            Self::Contact {} => headings::CONTACT,
            Self::NotFound { .. } => headings::NOT_FOUND,
        }
    }
}
