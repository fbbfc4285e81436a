use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::Method,
    response::{IntoResponse, Response},
    routing, Router,
};
use letterbox_api_gateway::{ContactHandler, GatewayEvent, GatewayResponse};
use letterbox_core_contact_contracts::ContactService;

pub fn router(handler: Arc<ContactHandler<impl ContactService>>) -> Router<()> {
    Router::new()
        .route("/contact", routing::any(contact))
        .with_state(handler)
}

async fn contact(
    handler: State<Arc<ContactHandler<impl ContactService>>>,
    method: Method,
    body: Bytes,
) -> Response {
    let event = GatewayEvent {
        method,
        body: (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned()),
    };

    into_response(handler.handle(event).await)
}

pub fn into_response(response: GatewayResponse) -> Response {
    let GatewayResponse {
        status,
        headers,
        body,
    } = response;

    let mut response = body.into_response();
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
