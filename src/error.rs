// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LookupError {
    /// The native algorithm table has no entry for this name.
    ///
    /// Retrying cannot succeed: the table is fixed for the process lifetime.
    #[error("cipher algorithm not found: {name:?}")]
    NotFound { name: String },
}

impl LookupError {
    pub(crate) fn not_found(name: &str) -> Self {
        LookupError::NotFound {
            name: name.to_string(),
        }
    }

    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            LookupError::NotFound { name } => name,
        }
    }
}
