use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

/// Maximum number of characters kept from each submitted field.
pub const CONTACT_FIELD_MAX_CHARS: usize = 5000;

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A contact form submission as received from the client, before any
/// sanitization or validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Hidden form field that only bots fill in.
    pub honeypot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactMessageAuthorEmail,
}

#[nutype(
    sanitize(trim, with = |s: String| truncate(s)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Display)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    sanitize(trim, with = |s: String| truncate(s)),
    validate(not_empty, regex = CONTACT_EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Display)
)]
pub struct ContactMessageAuthorEmail(String);

#[nutype(
    sanitize(trim, with = |s: String| truncate(s)),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, AsRef, Display)
)]
pub struct ContactMessageContent(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please provide a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
}

impl ContactSubmission {
    /// Whether the honeypot field has been filled in.
    pub fn is_spam(&self) -> bool {
        self.honeypot.as_deref().is_some_and(|x| !is_blank(x))
    }

    /// Sanitizes all fields and checks them in the order name, email,
    /// message. All violations are collected instead of stopping at the first
    /// one.
    pub fn validate(self) -> Result<ContactMessage, Vec<ContactValidationError>> {
        let mut errors = Vec::new();

        let name = ContactMessageAuthorName::try_new(self.name.unwrap_or_default()).ok();
        if name.is_none() {
            errors.push(ContactValidationError::NameRequired);
        }

        let email = self.email.unwrap_or_default();
        let email = if is_blank(&email) {
            errors.push(ContactValidationError::EmailRequired);
            None
        } else {
            let email = ContactMessageAuthorEmail::try_new(email).ok();
            if email.is_none() {
                errors.push(ContactValidationError::EmailInvalid);
            }
            email
        };

        let content = ContactMessageContent::try_new(self.message.unwrap_or_default()).ok();
        if content.is_none() {
            errors.push(ContactValidationError::MessageRequired);
        }

        match (name, email, content) {
            (Some(name), Some(email), Some(content)) => Ok(ContactMessage {
                author: ContactMessageAuthor { name, email },
                content,
            }),
            _ => Err(errors),
        }
    }
}

/// Returns `true` if `value` is empty or consists only of whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn truncate(mut s: String) -> String {
    if let Some((idx, _)) = s.char_indices().nth(CONTACT_FIELD_MAX_CHARS) {
        s.truncate(idx);
    }
    s
}
