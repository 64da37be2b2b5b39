// src/enums.rs
//! Public enum types used throughout the crate
//!
//! `CipherKind` is the closed, serializable spelling of the six predefined
//! algorithms. Use it wherever a choice of algorithm is stored or configured;
//! resolve it to a `CipherAlgorithm` when metadata is needed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algo::CipherAlgorithm;
use crate::consts;
use crate::error::LookupError;

/// The predefined cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum CipherKind {
    Aes128Ecb,
    Aes256Ecb,
    #[default]
    Aes128Cbc,
    Aes256Cbc,
    Aes128Cfb,
    Aes256Cfb,
}

impl CipherKind {
    /// Every predefined algorithm, in declaration order
    pub const ALL: [CipherKind; 6] = [
        CipherKind::Aes128Ecb,
        CipherKind::Aes256Ecb,
        CipherKind::Aes128Cbc,
        CipherKind::Aes256Cbc,
        CipherKind::Aes128Cfb,
        CipherKind::Aes256Cfb,
    ];

    /// The canonical name libcrypto registers for this algorithm
    pub fn canonical_name(self) -> &'static str {
        match self {
            CipherKind::Aes128Ecb => consts::AES_128_ECB,
            CipherKind::Aes256Ecb => consts::AES_256_ECB,
            CipherKind::Aes128Cbc => consts::AES_128_CBC,
            CipherKind::Aes256Cbc => consts::AES_256_CBC,
            CipherKind::Aes128Cfb => consts::AES_128_CFB,
            CipherKind::Aes256Cfb => consts::AES_256_CFB,
        }
    }

    /// The shared descriptor constant for this algorithm
    pub fn algorithm(self) -> CipherAlgorithm {
        match self {
            CipherKind::Aes128Ecb => CipherAlgorithm::aes_128_ecb(),
            CipherKind::Aes256Ecb => CipherAlgorithm::aes_256_ecb(),
            CipherKind::Aes128Cbc => CipherAlgorithm::aes_128_cbc(),
            CipherKind::Aes256Cbc => CipherAlgorithm::aes_256_cbc(),
            CipherKind::Aes128Cfb => CipherAlgorithm::aes_128_cfb(),
            CipherKind::Aes256Cfb => CipherAlgorithm::aes_256_cfb(),
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for CipherKind {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.canonical_name() == s)
            .ok_or_else(|| LookupError::not_found(s))
    }
}
