//! AWS Lambda entry point for API Gateway and ALB events.

use std::sync::Arc;

use anyhow::anyhow;
use lambda_http::{service_fn, Body, Error, Request, Response};
use letterbox_api_gateway::{ContactHandler, GatewayEvent, GatewayResponse};
use letterbox_core_contact_contracts::ContactService;
use tracing::{debug, info};

/// Run `handler` inside the Lambda runtime until the runtime shuts down.
pub async fn run<Contact>(handler: ContactHandler<Contact>) -> anyhow::Result<()>
where
    Contact: ContactService,
{
    let handler = Arc::new(handler);

    info!("Starting lambda runtime");
    lambda_http::run(service_fn(move |request: Request| {
        let handler = Arc::clone(&handler);
        async move { Ok::<_, Error>(handle(&handler, request).await) }
    }))
    .await
    .map_err(|err| anyhow!(err))
}

async fn handle<Contact>(handler: &ContactHandler<Contact>, request: Request) -> Response<Body>
where
    Contact: ContactService,
{
    let event = into_event(request);
    debug!(method = %event.method, "Handling lambda request");
    into_response(handler.handle(event).await)
}

fn into_event(request: Request) -> GatewayEvent {
    let (parts, body) = request.into_parts();
    let body = match body {
        Body::Empty => None,
        Body::Text(text) => Some(text),
        Body::Binary(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
    };

    GatewayEvent {
        method: parts.method,
        body,
    }
}

fn into_response(response: GatewayResponse) -> Response<Body> {
    let GatewayResponse {
        status,
        headers,
        body,
    } = response;

    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
