// src/algo.rs
//! Cipher algorithm descriptors — pure metadata, no crypto
//!
//! `CipherAlgorithm` wraps a non-owning reference to one of libcrypto's
//! process-lifetime `EVP_CIPHER` descriptors. Everything here is a read of
//! immutable native data; nothing allocates or frees a descriptor.

use std::fmt;

use once_cell::sync::Lazy;
use openssl::nid::Nid;
use openssl::symm::Cipher;

// Bound once, shared by every caller for the rest of the process.
static AES_128_ECB: Lazy<CipherAlgorithm> =
    Lazy::new(|| CipherAlgorithm::from_cipher(Cipher::aes_128_ecb()));
static AES_256_ECB: Lazy<CipherAlgorithm> =
    Lazy::new(|| CipherAlgorithm::from_cipher(Cipher::aes_256_ecb()));
static AES_128_CBC: Lazy<CipherAlgorithm> =
    Lazy::new(|| CipherAlgorithm::from_cipher(Cipher::aes_128_cbc()));
static AES_256_CBC: Lazy<CipherAlgorithm> =
    Lazy::new(|| CipherAlgorithm::from_cipher(Cipher::aes_256_cbc()));
static AES_128_CFB: Lazy<CipherAlgorithm> =
    Lazy::new(|| CipherAlgorithm::from_cipher(Cipher::aes_128_cfb128()));
static AES_256_CFB: Lazy<CipherAlgorithm> =
    Lazy::new(|| CipherAlgorithm::from_cipher(Cipher::aes_256_cfb128()));

/// A resolved symmetric-cipher algorithm descriptor.
///
/// Immutable after construction. The wrapped handle points into libcrypto's
/// static algorithm table, so copies are free and there is no teardown.
#[derive(Clone, Copy)]
pub struct CipherAlgorithm {
    cipher: Cipher,
}

impl CipherAlgorithm {
    /// Wraps an already-resolved native descriptor.
    ///
    /// Infallible: callers hand in descriptors obtained from libcrypto's own
    /// accessors or from a successful table lookup, never null.
    pub(crate) fn from_cipher(cipher: Cipher) -> Self {
        CipherAlgorithm { cipher }
    }

    /// AES-128 in ECB mode
    pub fn aes_128_ecb() -> Self {
        *AES_128_ECB
    }

    /// AES-256 in ECB mode
    pub fn aes_256_ecb() -> Self {
        *AES_256_ECB
    }

    /// AES-128 in CBC mode
    pub fn aes_128_cbc() -> Self {
        *AES_128_CBC
    }

    /// AES-256 in CBC mode
    pub fn aes_256_cbc() -> Self {
        *AES_256_CBC
    }

    /// AES-128 in CFB mode (128-bit feedback)
    pub fn aes_128_cfb() -> Self {
        *AES_128_CFB
    }

    /// AES-256 in CFB mode (128-bit feedback)
    pub fn aes_256_cfb() -> Self {
        *AES_256_CFB
    }

    /// libcrypto's numeric identifier for this algorithm/mode pair
    pub fn nid(&self) -> Nid {
        self.cipher.nid()
    }

    /// `nid()` as the raw integer downstream code configures contexts with
    pub fn type_id(&self) -> i32 {
        self.nid().as_raw()
    }

    /// Required key length in bytes
    pub fn key_size(&self) -> usize {
        self.cipher.key_len()
    }

    /// Required IV length in bytes; 0 for modes that take no IV (ECB)
    pub fn iv_size(&self) -> usize {
        self.cipher.iv_len().unwrap_or_default()
    }

    /// Block size in bytes — 16 for AES block modes, 1 for stream-like CFB.
    /// Consumers use this to size output buffers.
    pub fn block_size(&self) -> usize {
        self.cipher.block_size()
    }

    /// The descriptor's registered short name, when libcrypto knows one
    pub fn name(&self) -> Option<&'static str> {
        self.nid().short_name().ok()
    }

    /// The raw `openssl` handle, for downstream cipher contexts
    pub fn as_cipher(&self) -> Cipher {
        self.cipher
    }
}

// Same algorithm/mode pair, regardless of how each side was resolved.
impl PartialEq for CipherAlgorithm {
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for CipherAlgorithm {}

impl fmt::Debug for CipherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherAlgorithm")
            .field("name", &self.name().unwrap_or("<unnamed>"))
            .field("type_id", &self.type_id())
            .field("key_size", &self.key_size())
            .field("iv_size", &self.iv_size())
            .field("block_size", &self.block_size())
            .finish()
    }
}
