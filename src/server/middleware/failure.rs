use std::any::Any;

use axum::response::Response;
use uuid::Uuid;

use crate::server::error::unexpected_error_response;

/// Turns a handler panic into the opaque 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`. The panic payload is
/// logged with a fresh correlation id; the client only receives the id.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let error_id = Uuid::new_v4();

    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(%error_id, panic = %detail, "Request handler panicked");

    unexpected_error_response(error_id)
}
