//! Contact form to `mailto:` link.
//!
//! The site has no backend; submitting the form opens the visitor's mail
//! client with the inquiry already written.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::SiteConfig;
use crate::constants::ANONYMOUS_SENDER;

/// Characters `encodeURIComponent` leaves alone besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URI component.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Submitted contact form fields, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// `<Brand> — New inquiry from <Name>`, with a stand-in for a blank name.
    pub fn subject(&self, brand: &str) -> String {
        let sender = if self.name.is_empty() {
            ANONYMOUS_SENDER
        } else {
            self.name.as_str()
        };
        format!("{} — New inquiry from {}", brand, sender)
    }

    pub fn body(&self, signature: &str) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}\n\n— Sent from {} portfolio site",
            self.name, self.email, self.message, signature
        )
    }

    /// The pre-filled `mailto:` link for this inquiry.
    pub fn mailto(&self, config: &SiteConfig) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            config.contact_email,
            encode_component(&self.subject(&config.brand)),
            encode_component(&self.body(&config.signature))
        )
    }
}
