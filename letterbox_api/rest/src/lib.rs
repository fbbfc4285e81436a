use std::{net::IpAddr, sync::Arc};

use axum::Router;
use letterbox_api_gateway::ContactHandler;
use letterbox_core_contact_contracts::ContactService;
use tokio::net::TcpListener;

mod middlewares;
mod routes;

/// HTTP server exposing the contact form handler, used for local development.
#[derive(Debug, Clone)]
pub struct RestServer<Contact> {
    contact: ContactHandler<Contact>,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactService,
{
    pub fn new(contact: ContactHandler<Contact>) -> Self {
        Self { contact }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let contact = Arc::new(self.contact);
        let router = Router::new().merge(routes::contact::router(Arc::clone(&contact)));
        let router = middlewares::panic_handler::add(contact)(router);
        middlewares::trace::add(router)
    }
}
