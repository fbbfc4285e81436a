use anyhow::{anyhow, Context};
use letterbox_email_contracts::{Email, EmailService};
use letterbox_models::email_address::EmailAddress;
use letterbox_utils::Apply;
use lettre::{
    message::{header, Mailbox, MessageBuilder},
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailServiceImpl {
    /// Create a new email service for the smtp server at `url`.
    ///
    /// No connection is established until the first message is sent.
    pub async fn new(url: &str, from: EmailAddress) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { from, transport })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let message = build_message(&self.from, email)?;

        debug!(envelope = ?message.envelope(), "sending email");

        self.transport
            .send(message)
            .await
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn build_message(from: &EmailAddress, email: Email) -> anyhow::Result<Message> {
    let reply_to = email
        .reply_to
        .as_deref()
        .map(str::parse::<Address>)
        .transpose()
        .context("Invalid reply-to address")?;

    Message::builder()
        .from(Mailbox::new(None, from.0.clone()))
        .to(Mailbox::new(None, email.recipient.into()))
        .apply_map(
            reply_to.map(|x| Mailbox::new(None, x)),
            MessageBuilder::reply_to,
        )
        .subject(email.subject)
        .header(header::ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(Into::into)
}
