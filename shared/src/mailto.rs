//! # Mail handoff codec
//!
//! Builds the `mailto:` URI the contact form hands to the user's mail client:
//!
//! ```text
//! mailto:<recipient>?subject=<enc(subject)>&body=<enc(body)>
//!
//! subject = "Portfolio Contact from {name}"
//! body    = "Name: {name}\nEmail: {email}\n\nMessage:\n{message}"
//! ```
//!
//! `enc` follows `encodeURIComponent`: ASCII letters, digits and
//! `- _ . ! ~ * ' ( )` pass through, every other byte of the UTF-8 encoding
//! becomes `%XX` with uppercase hex. Mail clients parse this format, so the
//! output must stay byte-for-byte stable.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes `encodeURIComponent` leaves untouched, besides alphanumerics.
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

/// Percent-encode one URI component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// The three user-entered fields of a contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailDraft<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl<'a> MailDraft<'a> {
    pub fn subject(&self) -> String {
        format!("Portfolio Contact from {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\n\nMessage:\n{}",
            self.name, self.email, self.message
        )
    }

    /// The full handoff target addressed to `recipient`.
    pub fn mailto_uri(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject()),
            encode_component(&self.body())
        )
    }
}
