//! Domain layer for Verity
//!
//! This module contains the verification models, the port traits the
//! services depend on, and the error taxonomy.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{OutOfRange, StorageError, TransportError, VerifyError};
