use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use invoicegen_core::ValidationError;

use crate::app::services::InvoiceError;

/// Client-facing message for failures after validation succeeded.
pub const GENERATION_FAILED: &str = "Failed to generate invoice";

pub fn validation_error_to_response(err: ValidationError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, err.to_string())
}

pub fn invoice_error_to_response(err: InvoiceError) -> axum::response::Response {
    match err {
        InvoiceError::Render(e) => {
            tracing::error!("invoice rendering failed: {e}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
        }
        InvoiceError::Worker(msg) => {
            tracing::error!("render worker failed: {msg}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, GENERATION_FAILED)
        }
    }
}

/// `{"error": "<message>"}` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
