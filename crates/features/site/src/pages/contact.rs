use super::heading_style;
use crate::use_brand;
use dioxus::prelude::*;
use olaat_domain::constants::headings;
use olaat_domain::constants::CONTACT_EMAIL;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::info;

/// Inquiry categories offered by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum InquiryType {
    #[strum(serialize = "Executive Coaching")]
    ExecutiveCoaching,
    #[strum(serialize = "Team Development")]
    TeamDevelopment,
    #[strum(serialize = "Speaking Engagement")]
    SpeakingEngagement,
    #[strum(serialize = "Veterans Program")]
    VeteransProgram,
    #[strum(serialize = "Other")]
    Other,
}

/// The contact form. Submission is captured and logged; no delivery sink
/// is wired up, so the default form navigation is suppressed.
#[component]
pub fn Contact() -> Element {
    let brand = use_brand();
    let h1_style = heading_style(&brand);

    rsx! {
        section { class: "page",
            h1 { style: "{h1_style}", {headings::CONTACT} }
            p {
                "Tell us where your team is today and where you want it to be. "
                "You can also reach us directly at "
                a { href: "mailto:{CONTACT_EMAIL}", "{CONTACT_EMAIL}" }
                "."
            }
            form {
                class: "contact-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    info!("contact form submitted; no delivery sink is configured");
                },
                label {
                    "Name"
                    input { name: "name", r#type: "text", placeholder: "Your name" }
                }
                label {
                    "Email"
                    input { name: "email", r#type: "email", placeholder: "you@example.com" }
                }
                label {
                    "Phone"
                    input { name: "phone", r#type: "tel", placeholder: "(555) 555-5555" }
                }
                label {
                    "Inquiry"
                    select { name: "inquiry",
                        for kind in InquiryType::iter() {
                            option { key: "{kind}", value: "{kind}", "{kind}" }
                        }
                    }
                }
                label {
                    "Message"
                    textarea { name: "message", rows: "5", placeholder: "How can we help?" }
                }
                button { class: "cta", r#type: "submit", "Send message" }
            }
        }
    }
}
