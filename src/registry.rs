// src/registry.rs
//! Name lookup against libcrypto's global algorithm table

use std::ffi::CString;

use once_cell::sync::Lazy;
use openssl::symm::Cipher;
use tracing::debug;

use crate::algo::CipherAlgorithm;
use crate::error::LookupError;

// libcrypto populates its name table during OPENSSL_init_crypto and never
// mutates it afterwards; all lookups after this point are lock-free reads.
static REGISTRY: Lazy<CipherRegistry> = Lazy::new(|| {
    openssl::init();
    CipherRegistry { _priv: () }
});

/// Handle to the process-wide native algorithm table.
///
/// Obtaining an instance guarantees libcrypto initialization has run, so the
/// table is fully populated before the first lookup.
pub struct CipherRegistry {
    _priv: (),
}

impl CipherRegistry {
    /// The shared registry handle, initialized once per process.
    pub fn global() -> &'static CipherRegistry {
        &REGISTRY
    }

    /// Resolves a cipher algorithm by its canonical name.
    ///
    /// Accepts the names libcrypto itself registers, e.g. `"aes-128-cbc"`.
    /// Fails with [`LookupError::NotFound`] when the table has no entry; no
    /// other failure mode exists.
    pub fn lookup(&self, name: &str) -> Result<CipherAlgorithm, LookupError> {
        // An interior NUL can never appear in a registered name.
        let c_name = CString::new(name).map_err(|_| LookupError::not_found(name))?;

        let ptr = unsafe { openssl_sys::EVP_get_cipherbyname(c_name.as_ptr()) };
        if ptr.is_null() {
            debug!(name, "cipher name not in the native algorithm table");
            return Err(LookupError::not_found(name));
        }

        // Non-null descriptors from the table are static and live for the
        // whole process; the wrapper never frees them.
        let algo = CipherAlgorithm::from_cipher(unsafe { Cipher::from_ptr(ptr) });
        debug!(name, type_id = algo.type_id(), "resolved cipher algorithm");
        Ok(algo)
    }
}

/// Resolves a cipher algorithm by name against the global registry.
pub fn lookup(name: &str) -> Result<CipherAlgorithm, LookupError> {
    CipherRegistry::global().lookup(name)
}
