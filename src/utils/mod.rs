//! Shared helpers for the API layer.

pub mod validate;

pub use validate::ValidatedJson;
