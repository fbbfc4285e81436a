use anyhow::Context;
use letterbox_config::EmailConfig;
use letterbox_email_impl::EmailServiceImpl;

/// Create the SMTP client. The connection itself is opened lazily.
pub async fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.smtp_url, config.from.clone())
        .await
        .context("Failed to create SMTP client")
}
