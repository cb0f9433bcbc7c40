// RSA Signing
// Hash, pad and exponentiate with the private key; recover with the public key

use super::bigint::{mod_pow, to_hex, RsaBigInt};
use super::digest::sha256_hex;
use super::keys::{RsaPrivateKey, RsaPublicKey};
use super::padding::{extract_digest, pad_for_signature};
use crate::error::Result;

/// A signature together with the intermediate values that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    /// Hex SHA-256 digest of the message
    pub digest: String,
    /// PKCS#1 v1.5 block that was exponentiated
    pub padded: RsaBigInt,
    /// padded^d mod n
    pub value: RsaBigInt,
}

impl Signature {
    /// Lowercase hex rendering of the signature value
    pub fn to_hex(&self) -> String {
        to_hex(&self.value)
    }
}

/// Outcome of raising a signature back to the public exponent
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    /// signature^e mod n
    pub recovered: RsaBigInt,
    /// The padded block the signature was built from
    pub expected: RsaBigInt,
    pub matches: bool,
    /// Digest found inside the recovered block, if it has a valid layout
    pub digest: Option<String>,
}

/// Sign `message` with the private key
pub fn sign_message(key: &RsaPrivateKey, message: &[u8]) -> Result<Signature> {
    let digest = sha256_hex(message);
    tracing::debug!(message_len = message.len(), %digest, "hashed message");

    let padded = pad_for_signature(&digest, key.n())?;
    let value = mod_pow(&padded, key.d(), key.n())?;
    tracing::debug!(modulus_bits = key.bit_length(), "signed padded block");

    Ok(Signature {
        digest,
        padded,
        value,
    })
}

/// Compute signature^e mod n
pub fn recover_block(key: &RsaPublicKey, signature: &RsaBigInt) -> Result<RsaBigInt> {
    mod_pow(signature, key.e(), key.n())
}

/// Recover the block behind `signature` and compare it with the padded
/// block that was signed
pub fn verify_signature(key: &RsaPublicKey, signature: &Signature) -> Result<Verification> {
    let recovered = recover_block(key, &signature.value)?;
    let matches = recovered == signature.padded;
    let digest = extract_digest(&recovered).ok();
    tracing::debug!(matches, "verified signature");

    Ok(Verification {
        recovered,
        expected: signature.padded.clone(),
        matches,
        digest,
    })
}

/// Check a bare signature value against `message`
pub fn verify_message(key: &RsaPublicKey, message: &[u8], signature: &RsaBigInt) -> Result<bool> {
    let expected = pad_for_signature(&sha256_hex(message), key.n())?;
    Ok(recover_block(key, signature)? == expected)
}
