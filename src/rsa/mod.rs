// RSA Module - Main module file
// Exports the signing pipeline and its building blocks

pub mod bigint;
pub mod digest;
pub mod keys;
pub mod padding;
pub mod sign;

pub use bigint::{mod_pow, parse_integer, RsaBigInt};
pub use digest::sha256_hex;
pub use keys::{RsaPrivateKey, RsaPublicKey};
pub use padding::{extract_digest, pad_for_signature, SHA256_ALGO_ID};
pub use sign::{sign_message, verify_message, verify_signature, Signature, Verification};
