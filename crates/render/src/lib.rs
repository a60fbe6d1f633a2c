//! Invoice rendering.
//!
//! - `canvas`: the drawing capability the layout talks to (points, top-left origin)
//! - `metrics`: built-in Helvetica widths and line wrapping
//! - `pdf`: `printpdf`-backed canvas producing the final document bytes
//! - `letterhead`: issuer details printed on every invoice
//! - `layout`: the fixed invoice layout

pub mod canvas;
pub mod error;
pub mod layout;
pub mod letterhead;
pub mod metrics;
pub mod pdf;

pub use canvas::{Canvas, FontWeight, TextStyle};
pub use error::RenderError;
pub use layout::render_invoice;
pub use letterhead::Letterhead;
pub use pdf::{PdfCanvas, render_pdf};
