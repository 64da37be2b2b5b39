// src/consts.rs
//! Shared constants — canonical algorithm names
//!
//! These are libcrypto's long names, the same strings `EVP_get_cipherbyname`
//! resolves. Short names ("AES-128-CBC") resolve too; the long names are the
//! canonical spelling this crate uses.

/// AES-128 in ECB mode (no IV)
pub const AES_128_ECB: &str = "aes-128-ecb";

/// AES-256 in ECB mode (no IV)
pub const AES_256_ECB: &str = "aes-256-ecb";

/// AES-128 in CBC mode
pub const AES_128_CBC: &str = "aes-128-cbc";

/// AES-256 in CBC mode
pub const AES_256_CBC: &str = "aes-256-cbc";

/// AES-128 in CFB mode (128-bit feedback)
pub const AES_128_CFB: &str = "aes-128-cfb";

/// AES-256 in CFB mode (128-bit feedback)
pub const AES_256_CFB: &str = "aes-256-cfb";
