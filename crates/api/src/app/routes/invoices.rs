use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use serde_json::Value;

use invoicegen_core::ValidationError;
use invoicegen_invoicing::InvoiceRequest;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/generate-invoice", post(generate_invoice))
}

/// Validate the posted invoice and answer with the rendered PDF as a download.
pub async fn generate_invoice(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Value>, JsonRejection>,
) -> axum::response::Response {
    // A body that is not JSON at all carries none of the required fields.
    let body = match body {
        Ok(Json(v)) => v,
        Err(rejection) => {
            tracing::info!("invoice rejected: unreadable body: {rejection}");
            return errors::validation_error_to_response(ValidationError::missing("body"));
        }
    };

    let invoice = match InvoiceRequest::from_json(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::info!(field = e.field(), "invoice rejected: {e}");
            return errors::validation_error_to_response(e);
        }
    };

    tracing::info!(
        invoice_num = %invoice.invoice_num,
        items = invoice.items.len(),
        total = invoice.total_amount(),
        "generating invoice"
    );

    let disposition = format!("attachment; filename={}", invoice.attachment_filename());

    let pdf = match services.render_invoice(invoice).await {
        Ok(bytes) => bytes,
        Err(e) => return errors::invoice_error_to_response(e),
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf,
    )
        .into_response()
}
