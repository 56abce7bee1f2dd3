//! Port trait definitions (Hexagonal Architecture)
//!
//! - KeyValueStore: persisted storage for the verification history
//! - VerificationService: the remote verification capability
//!
//! These traits let the services be exercised against in-memory fakes and
//! mock servers without a real storage backend or network.

pub mod key_value_store;
pub mod verification_service;

pub use key_value_store::KeyValueStore;
pub use verification_service::{ModelInfo, VerificationService, VerifyRequest};
