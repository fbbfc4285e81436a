use std::time::Duration;

use axum::{extract::Request, response::Response, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, Span};

pub fn add<S: Clone + Send + Sync + 'static>(router: Router<S>) -> Router<S> {
    let layer = TraceLayer::new_for_http()
        .make_span_with(request_span)
        .on_request(())
        .on_response(log_response)
        .on_body_chunk(())
        .on_eos(())
        .on_failure(());

    router.layer(layer)
}

fn request_span(request: &Request) -> Span {
    let method = request.method();
    let path = request.uri().path();
    let origin = request
        .headers()
        .get(axum::http::header::ORIGIN)
        .and_then(|origin| origin.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!("request", %method, path, origin)
}

fn log_response(response: &Response, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    let latency_ms = latency.as_millis();
    info!(status, latency_ms, "request completed");
}
