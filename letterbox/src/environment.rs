use letterbox_api_gateway::{ContactHandler, CorsHeaders};
use letterbox_config::Config;
use letterbox_core_contact_impl::{ContactServiceConfig, ContactServiceImpl};
use letterbox_email_impl::EmailServiceImpl;

pub type Email = EmailServiceImpl;
pub type Contact = ContactServiceImpl<Email>;
pub type Handler = ContactHandler<Contact>;

/// Wire up the contact form handler from the config and an email client.
pub fn contact_handler(config: &Config, email: Email) -> anyhow::Result<Handler> {
    let contact_service_config = ContactServiceConfig {
        recipient: config.contact.recipient.clone().into(),
        site: config.contact.site.as_str().into(),
    };
    let contact = ContactServiceImpl::new(email, contact_service_config);

    let cors = CorsHeaders::new(&config.cors.allowed_origin)?;

    Ok(ContactHandler::new(contact, cors))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[tokio::test]
    async fn build_handler() {
        let config = letterbox_config::load_from(&[] as &[&Path], |_| None).unwrap();
        let email = crate::email::connect(&config.email).await.unwrap();

        let handler = contact_handler(&config, email).unwrap();

        assert_eq!(
            handler.cors(),
            &CorsHeaders::new("https://example.com").unwrap()
        );
    }

    #[tokio::test]
    async fn invalid_origin() {
        let config = letterbox_config::load_from(&[] as &[&Path], |var| {
            (var == "ALLOWED_ORIGIN").then(|| "https://example.com\r\nX-Evil: 1".into())
        })
        .unwrap();
        let email = crate::email::connect(&config.email).await.unwrap();

        assert!(contact_handler(&config, email).is_err());
    }
}
