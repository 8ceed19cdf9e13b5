//! The seven content pages plus the not-found fallback. All static
//! content; every color and font goes through the theme resolver.

mod about;
mod contact;
mod elite;
mod home;
mod not_found;
mod services;
mod speaking;
mod veterans;

pub use about::About;
pub use contact::{Contact, InquiryType};
pub use elite::Elite;
pub use home::Home;
pub use not_found::NotFound;
pub use services::Services;
pub use speaking::Speaking;
pub use veterans::Veterans;

use olaat_domain::brand::BrandConfig;
use olaat_domain::constants::{HEADER_BLUE, HEADING};

/// Inline style for page headings: heading font stack in the header blue.
fn heading_style(brand: &BrandConfig) -> String {
    format!("font-family: {}; color: {};", brand.font(HEADING), brand.color(HEADER_BLUE))
}
