// Error types shared by the signing and key-exchange pipelines

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by parameter loading and the numeric core
#[derive(Error, Debug)]
pub enum Error {
    /// A message or parameter file could not be read
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A parameter file is not valid JSON or is missing a field
    #[error("invalid parameter file {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A field could not be parsed as a non-negative integer
    #[error("field `{field}` is not a valid integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },

    /// A field parsed but violates a precondition
    #[error("field `{field}` is invalid: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    /// Digest string is not 64 hex digits
    #[error("digest must be 64 hex digits, got {0:?}")]
    InvalidDigest(String),

    /// The modulus cannot hold even the minimal padded block
    #[error("modulus of {modulus_bits} bits is too small for the padded digest ({required_bits} bits)")]
    ModulusTooSmall { modulus_bits: u64, required_bits: u64 },

    /// Modular exponentiation was asked to reduce by zero
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// A recovered block does not have the PKCS#1 v1.5 signature layout
    #[error("malformed signature block: {0}")]
    MalformedBlock(String),
}

/// Result type for this crate
pub type Result<T> = std::result::Result<T, Error>;
