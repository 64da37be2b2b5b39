// src/lib.rs
//! cipher-registry — a metadata facade over libcrypto's cipher table
//!
//! Features:
//! - Name lookup against OpenSSL's algorithm-by-name table
//! - Six predefined AES descriptors (ECB/CBC/CFB, 128/256-bit)
//! - Pure metadata queries: type id, key size, IV size, block size
//! - No encryption, decryption, or key handling anywhere in this crate

pub mod algo;
pub mod consts;
pub mod enums;
pub mod registry;

pub mod error;

// Re-export everything users need at the crate root
pub use algo::CipherAlgorithm;
pub use enums::CipherKind;
pub use error::LookupError;
pub use registry::{lookup, CipherRegistry};
