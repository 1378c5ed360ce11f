use std::any::Any;

use axum::response::{IntoResponse, Response};
use kennel_core::KennelError;

use crate::KennelAxumError;

fn panic_detail(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Catch-all for failures no handler dealt with. Logs the detail and answers
/// with the generic 500 body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_detail(err.as_ref());
    tracing::error!(panic = %detail, "request handler panicked");

    KennelAxumError(KennelError::internal(detail)).into_response()
}
