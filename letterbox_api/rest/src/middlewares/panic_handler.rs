use std::{panic::AssertUnwindSafe, sync::Arc};

use anyhow::anyhow;
use axum::{
    extract::Request,
    middleware::{from_fn, Next},
    Router,
};
use futures::FutureExt;
use letterbox_api_gateway::{internal_server_error, ContactHandler};
use letterbox_core_contact_contracts::ContactService;

use crate::routes::contact::into_response;

/// Turn panics in request handlers into the generic error response, so the
/// CORS headers are present even then.
pub fn add<S: Clone + Send + Sync + 'static>(
    handler: Arc<ContactHandler<impl ContactService>>,
) -> impl FnOnce(Router<S>) -> Router<S> {
    |router| {
        router.layer(from_fn(move |request: Request, next: Next| {
            let handler = Arc::clone(&handler);
            async move {
                match AssertUnwindSafe(next.run(request)).catch_unwind().await {
                    Ok(response) => response,
                    Err(_) => into_response(internal_server_error(
                        handler.cors(),
                        anyhow!("request handler panicked"),
                    )),
                }
            }
        }))
    }
}
