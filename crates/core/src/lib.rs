//! `invoicegen-core` — request-level building blocks shared by every crate.
//!
//! This crate contains **pure** primitives (no IO, no HTTP, no rendering):
//! the validation error model and the loose JSON value coercions used when
//! reading invoice payloads.

pub mod error;
pub mod value;

pub use error::{ValidationError, ValidationResult};
pub use value::{is_truthy, non_empty_str, number_like};
