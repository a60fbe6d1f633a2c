use std::io::ErrorKind;
use std::sync::Arc;

use chrono::Local;
use thiserror::Error;

use invoicegen_invoicing::InvoiceRequest;
use invoicegen_render::{RenderError, render_pdf};

use crate::config::AppConfig;

/// Failure after the request was accepted.
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The blocking render task panicked or was cancelled.
    #[error("render task failed: {0}")]
    Worker(String),
}

/// Request-independent state shared by all handlers. Read-only.
#[derive(Debug, Clone)]
pub struct AppServices {
    config: Arc<AppConfig>,
}

impl AppServices {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Read the signature image, if there is one.
    ///
    /// Read on every request so the file can be replaced without a restart.
    pub async fn load_signature(&self) -> Option<Vec<u8>> {
        let path = &self.config.signature_path;
        match tokio::fs::read(path).await {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no signature image; skipping");
                None
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "signature image unreadable: {e}");
                None
            }
        }
    }

    /// Render `invoice` to PDF bytes, dated today (local time).
    ///
    /// The PDF document is not `Send` and rendering is CPU-bound, so the whole
    /// render runs on the blocking pool.
    pub async fn render_invoice(&self, invoice: InvoiceRequest) -> Result<Vec<u8>, InvoiceError> {
        let signature = self.load_signature().await;
        let config = self.config.clone();
        let issued_on = Local::now().date_naive();

        let bytes = tokio::task::spawn_blocking(move || {
            render_pdf(&invoice, issued_on, &config.letterhead, signature.as_deref())
        })
        .await
        .map_err(|e| InvoiceError::Worker(e.to_string()))??;

        Ok(bytes)
    }
}
