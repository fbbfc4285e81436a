use std::sync::Arc;

use letterbox_core_contact_contracts::{ContactService, ContactSubmitError, ContactSubmitOutcome};
use letterbox_email_contracts::{Email, EmailService};
use letterbox_models::{
    contact::{ContactMessage, ContactSubmission},
    email_address::EmailAddress,
};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email> {
    email: Email,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    /// Address that receives the contact form messages
    pub recipient: Arc<EmailAddress>,
    /// Name of the website, mentioned in the email body
    pub site: Arc<str>,
}

impl<Email> ContactServiceImpl<Email> {
    pub fn new(email: Email, config: ContactServiceConfig) -> Self {
        Self { email, config }
    }
}

impl<EmailS> ContactService for ContactServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactSubmitOutcome, ContactSubmitError> {
        if submission.is_spam() {
            warn!("Spam detected: honeypot field was filled");
            return Ok(ContactSubmitOutcome::Discarded);
        }

        let message = submission.validate().map_err(ContactSubmitError::Invalid)?;
        let email = self.make_email(&message);

        if !self.email.send(email).await? {
            return Err(ContactSubmitError::Send);
        }

        info!(email = %message.author.email, "Contact form email sent");

        Ok(ContactSubmitOutcome::Sent)
    }
}

impl<EmailS> ContactServiceImpl<EmailS> {
    fn make_email(&self, message: &ContactMessage) -> Email {
        let ContactMessage { author, content } = message;
        let site = &self.config.site;

        Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("Contact Form: Message from {}", author.name),
            body: format!(
                "New contact form submission from {site}\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n\n---\nSent from the contact form at {site}",
                author.name, author.email, content
            ),
            reply_to: Some(author.email.to_string()),
        }
    }
}
