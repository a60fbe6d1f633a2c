use axum::Router;

pub mod invoices;
pub mod system;

/// Router for all `/api` endpoints.
pub fn router() -> Router {
    Router::new().nest("/api", invoices::router())
}
