//! Shared helpers used across the crate
pub mod errors;
