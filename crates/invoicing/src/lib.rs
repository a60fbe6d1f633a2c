//! Invoicing domain module.
//!
//! This crate contains the business rules for a single invoice request:
//! payload validation, line totals, and the amount-in-words converter. It is
//! implemented purely as deterministic logic (no IO, no HTTP, no rendering).

pub mod contact;
pub mod invoice;
pub mod words;

pub use contact::Contact;
pub use invoice::{InvoiceRequest, LineItem};
pub use words::{amount_in_words, rupees_in_words};
