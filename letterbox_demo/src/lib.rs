//! Fixtures shared by the tests of all crates.

use std::sync::LazyLock;

use letterbox_models::{contact::ContactSubmission, email_address::EmailAddress};

pub const NAME: &str = "Max Mustermann";
pub const EMAIL: &str = "max.mustermann@example.de";
pub const MESSAGE: &str = "Hello World!";

pub const SITE: &str = "example.com";

pub static RECIPIENT: LazyLock<EmailAddress> =
    LazyLock::new(|| "contact@example.com".parse().unwrap());

/// A valid submission by [`NAME`] with an empty honeypot.
pub fn submission() -> ContactSubmission {
    ContactSubmission {
        name: Some(NAME.into()),
        email: Some(EMAIL.into()),
        message: Some(MESSAGE.into()),
        honeypot: None,
    }
}

/// The email body the contact service renders for the given fields.
pub fn email_body(name: &str, email: &str, message: &str) -> String {
    format!(
        "New contact form submission from {SITE}\n\nName: {name}\nEmail: {email}\n\nMessage:\n{message}\n\n---\nSent from the contact form at {SITE}"
    )
}
