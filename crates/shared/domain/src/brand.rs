use crate::constants::{BODY, GOLD, GOLD_DARK, HEADER_BLUE, HEADING, LINK, SKY, WHITE};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Built-in fallback when a palette key is absent and the caller supplies
/// no fallback of its own.
pub const FALLBACK_COLOR: &str = "#111827";
/// Built-in fallback font stack.
pub const FALLBACK_FONT: &str = "system-ui, sans-serif";

/// The single source of brand truth: name, tagline, palette, font stacks
/// and banner path.
///
/// The palette and font-stack mappings may be partial; consumers resolve
/// values through [`BrandConfig::color`] / [`BrandConfig::font`] and never
/// read the maps directly, so missing keys degrade to a fallback rather
/// than failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrandConfigInner {
    pub name: String,
    pub legal: String,
    pub tagline: String,
    pub colors: BTreeMap<String, String>,
    pub fonts: BTreeMap<String, String>,
    pub banner_url: String,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct BrandConfig {
    #[serde(flatten, default)]
    inner: Arc<BrandConfigInner>,
}

impl Deref for BrandConfig {
    type Target = BrandConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for BrandConfig {
    fn deref_mut(&mut self) -> &mut BrandConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// One pass/fail row of the startup self-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckRow {
    pub name: &'static str,
    pub pass: bool,
}

impl BrandConfig {
    /// Resolves a palette entry, falling back to [`FALLBACK_COLOR`].
    #[must_use]
    pub fn color(&self, key: &str) -> &str {
        self.color_or(key, FALLBACK_COLOR)
    }

    /// Resolves a palette entry with a caller-supplied fallback.
    ///
    /// Total over all inputs: an absent or empty entry falls through to
    /// `fallback`, never an error.
    #[must_use]
    pub fn color_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        lookup(&self.colors, key).unwrap_or(fallback)
    }

    /// Resolves a font-stack entry, falling back to [`FALLBACK_FONT`].
    #[must_use]
    pub fn font(&self, key: &str) -> &str {
        self.font_or(key, FALLBACK_FONT)
    }

    /// Resolves a font-stack entry with a caller-supplied fallback.
    #[must_use]
    pub fn font_or<'a>(&'a self, key: &str, fallback: &'a str) -> &'a str {
        lookup(&self.fonts, key).unwrap_or(fallback)
    }

    /// The footer copyright line for the given calendar year.
    #[must_use]
    pub fn copyright(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.legal)
    }

    /// Enumerates the startup assertions as pure pass/fail rows.
    ///
    /// Observability only: the shell logs these once on first mount and
    /// rendering proceeds regardless of the outcome.
    #[must_use]
    pub fn self_check(&self) -> [CheckRow; 4] {
        [
            CheckRow { name: "brand name present", pass: !self.name.is_empty() },
            CheckRow {
                name: "colors.headerBlue present",
                pass: lookup(&self.colors, HEADER_BLUE).is_some(),
            },
            CheckRow {
                name: "fonts.heading present",
                pass: lookup(&self.fonts, HEADING).is_some(),
            },
            CheckRow { name: "banner_url present", pass: !self.banner_url.is_empty() },
        ]
    }
}

/// Present-but-empty entries count as missing.
fn lookup<'a>(map: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    map.get(key).map(String::as_str).filter(|value| !value.is_empty())
}

// --- Default ---

impl Default for BrandConfigInner {
    fn default() -> Self {
        Self {
            name: "One Leader at a Time – Leadership Group™".to_owned(),
            legal: "One Leader at a Time Leadership Group, LLC".to_owned(),
            tagline: "Transforming Ordinary into Legendary".to_owned(),
            colors: BTreeMap::from([
                (HEADER_BLUE.to_owned(), "#4C7CC1".to_owned()),
                (LINK.to_owned(), "#FFFFFF".to_owned()),
                (GOLD.to_owned(), "#F5C24B".to_owned()),
                (GOLD_DARK.to_owned(), "#D4A32C".to_owned()),
                (SKY.to_owned(), "#E6EEF7".to_owned()),
                (WHITE.to_owned(), "#FFFFFF".to_owned()),
                (BODY.to_owned(), "#334155".to_owned()),
            ]),
            fonts: BTreeMap::from([
                (HEADING.to_owned(), "'Merriweather', Georgia, 'Times New Roman', serif".to_owned()),
                (
                    BODY.to_owned(),
                    "'Open Sans', system-ui, -apple-system, Segoe UI, Roboto, sans-serif"
                        .to_owned(),
                ),
            ]),
            banner_url: "/fb-cover.png".to_owned(),
        }
    }
}
