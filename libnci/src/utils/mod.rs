//! Utilities for libnci: small, reusable helpers used across the crate.

pub mod hex;

// Re-export the common helpers at the `utils` module level so callers can
// use `crate::utils::bytes_to_hex(...)` directly.
pub use hex::*;
