use http::StatusCode;
use letterbox_models::contact::ContactValidationError;
use serde_json::{json, Value};
use tracing::error;

use crate::{cors::CorsHeaders, GatewayResponse};

pub const PREFLIGHT_MESSAGE: &str = "OK";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";
pub const INVALID_JSON_ERROR: &str = "Invalid JSON in request body";
pub const SEND_FAILED_ERROR: &str =
    "An error occurred while sending your message. Please try again later.";

/// Log the error and return the generic error response. The error itself is
/// never included in the response.
pub fn internal_server_error(
    cors: &CorsHeaders,
    err: impl Into<anyhow::Error>,
) -> GatewayResponse {
    let err = err.into();
    error!("Error processing contact form: {err:#}");

    let body = json!({ "success": false, "error": SEND_FAILED_ERROR });
    respond(cors, StatusCode::INTERNAL_SERVER_ERROR, body)
}

pub(crate) fn preflight(cors: &CorsHeaders) -> GatewayResponse {
    let body = json!({ "message": PREFLIGHT_MESSAGE });
    respond(cors, StatusCode::OK, body)
}

pub(crate) fn success(cors: &CorsHeaders) -> GatewayResponse {
    let body = json!({ "success": true, "message": SUCCESS_MESSAGE });
    respond(cors, StatusCode::OK, body)
}

pub(crate) fn invalid_json(cors: &CorsHeaders) -> GatewayResponse {
    let body = json!({ "success": false, "error": INVALID_JSON_ERROR });
    respond(cors, StatusCode::BAD_REQUEST, body)
}

pub(crate) fn validation_failed(
    cors: &CorsHeaders,
    errors: &[ContactValidationError],
) -> GatewayResponse {
    let errors = errors.iter().map(ToString::to_string).collect::<Vec<_>>();
    let body = json!({ "success": false, "errors": errors });
    respond(cors, StatusCode::BAD_REQUEST, body)
}

fn respond(cors: &CorsHeaders, status: StatusCode, body: Value) -> GatewayResponse {
    GatewayResponse {
        status,
        headers: cors.header_map(),
        body: body.to_string(),
    }
}
