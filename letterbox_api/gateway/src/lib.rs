//! Transport independent handling of contact form requests.
//!
//! A [`GatewayEvent`] carries the request method and the raw body as
//! delivered by an HTTP gateway. [`ContactHandler::handle`] turns it into a
//! [`GatewayResponse`] with a JSON body and the CORS headers attached.

use std::sync::Arc;

use anyhow::anyhow;
use http::{HeaderMap, Method, StatusCode};
use letterbox_core_contact_contracts::{ContactService, ContactSubmitError, ContactSubmitOutcome};
use tracing::debug;

pub use cors::CorsHeaders;
pub use responses::{
    internal_server_error, INVALID_JSON_ERROR, PREFLIGHT_MESSAGE, SEND_FAILED_ERROR,
    SUCCESS_MESSAGE,
};

mod cors;
mod models;
mod responses;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayEvent {
    pub method: Method,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct ContactHandler<Contact> {
    contact: Contact,
    cors: Arc<CorsHeaders>,
}

impl<Contact> ContactHandler<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: Contact, cors: CorsHeaders) -> Self {
        Self {
            contact,
            cors: cors.into(),
        }
    }

    pub fn cors(&self) -> &CorsHeaders {
        &self.cors
    }

    pub async fn handle(&self, event: GatewayEvent) -> GatewayResponse {
        if event.method == Method::OPTIONS {
            return responses::preflight(&self.cors);
        }

        let submission = match models::parse_submission(event.body.as_deref()) {
            Ok(submission) => submission,
            Err(err) => {
                debug!(%err, "Failed to parse request body");
                return responses::invalid_json(&self.cors);
            }
        };

        // Discarded spam gets the same response as a message that was sent.
        match self.contact.submit(submission).await {
            Ok(ContactSubmitOutcome::Sent | ContactSubmitOutcome::Discarded) => {
                responses::success(&self.cors)
            }
            Err(ContactSubmitError::Invalid(errors)) => {
                debug!(?errors, "Rejected invalid submission");
                responses::validation_failed(&self.cors, &errors)
            }
            Err(ContactSubmitError::Send) => responses::internal_server_error(
                &self.cors,
                anyhow!("The mail server did not accept the message"),
            ),
            Err(ContactSubmitError::Other(err)) => {
                responses::internal_server_error(&self.cors, err)
            }
        }
    }
}
