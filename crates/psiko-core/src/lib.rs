//! psiko-core
//!
//! Pure domain types and biodata validation.
//! No I/O, no async — this is the shared vocabulary of the Psiko system.

pub mod error;
pub mod models;
pub mod validate;
