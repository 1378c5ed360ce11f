use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use kennel_core::{KennelError, ValidationError};

#[derive(Debug)]
pub struct KennelAxumError(pub KennelError);

impl From<KennelError> for KennelAxumError {
    fn from(e: KennelError) -> Self {
        Self(e)
    }
}

impl From<JsonRejection> for KennelAxumError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ValidationError::Malformed(rejection.body_text()).into())
    }
}

impl IntoResponse for KennelAxumError {
    fn into_response(self) -> Response {
        // Status and body both come from the core mapping; the cause stays server-side.
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.0.to_json())).into_response()
    }
}
