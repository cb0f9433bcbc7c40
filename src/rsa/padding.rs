// PKCS#1 v1.5 Signature Padding
// Builds EMSA-PKCS1-v1_5 blocks for SHA-256 digests sized against a modulus

use super::bigint::{from_hex, to_hex, RsaBigInt};
use super::digest::is_digest_hex;
use crate::error::{Error, Result};

/// DER DigestInfo prefix for SHA-256 (RFC 8017 Section 9.2 notes)
pub const SHA256_ALGO_ID: &str = "3031300d060960864801650304020105000420";

const BLOCK_MARKER: &str = "0001";
const SEPARATOR: &str = "00";

/// One candidate block: 0x00 || 0x01 || PS (0xFF * ff_len) || 0x00 || DigestInfo || digest
fn candidate(digest: &str, ff_len: usize) -> Result<RsaBigInt> {
    let block = format!(
        "{}{}{}{}{}",
        BLOCK_MARKER,
        "ff".repeat(ff_len),
        SEPARATOR,
        SHA256_ALGO_ID,
        digest
    );
    from_hex("padded block", &block)
}

/// Pad a hex SHA-256 digest for signing under `modulus`.
///
/// The 0xFF run starts at one byte and grows while the block stays below
/// the modulus; the longest block that still fits is returned. A modulus
/// that cannot hold the one-byte run is rejected with
/// [`Error::ModulusTooSmall`].
pub fn pad_for_signature(digest: &str, modulus: &RsaBigInt) -> Result<RsaBigInt> {
    if !is_digest_hex(digest) {
        return Err(Error::InvalidDigest(digest.to_string()));
    }
    let digest = digest.to_ascii_lowercase();

    let mut ff_len = 1;
    let mut accepted = candidate(&digest, ff_len)?;
    if accepted >= *modulus {
        tracing::error!(
            modulus_bits = modulus.bits(),
            required_bits = accepted.bits(),
            "modulus too small for padded digest"
        );
        return Err(Error::ModulusTooSmall {
            modulus_bits: modulus.bits(),
            required_bits: accepted.bits(),
        });
    }

    loop {
        let next = candidate(&digest, ff_len + 1)?;
        if next >= *modulus {
            break;
        }
        accepted = next;
        ff_len += 1;
    }

    tracing::debug!(ff_len, block_bits = accepted.bits(), "built signature padding");
    Ok(accepted)
}

/// Recover the hex digest embedded in a signature block.
///
/// Accepts exactly the layout produced by [`pad_for_signature`], with any
/// non-empty 0xFF run.
pub fn extract_digest(block: &RsaBigInt) -> Result<String> {
    let hex = to_hex(block);

    let rest = hex
        .strip_prefix('1')
        .ok_or_else(|| Error::MalformedBlock("missing 0x01 block marker".to_string()))?;

    let ff_len = rest
        .as_bytes()
        .chunks(2)
        .take_while(|pair| *pair == &b"ff"[..])
        .count();
    if ff_len == 0 {
        return Err(Error::MalformedBlock("empty 0xFF padding run".to_string()));
    }

    let digest = rest[ff_len * 2..]
        .strip_prefix(SEPARATOR)
        .ok_or_else(|| Error::MalformedBlock("no separator after padding".to_string()))?
        .strip_prefix(SHA256_ALGO_ID)
        .ok_or_else(|| Error::MalformedBlock("unexpected digest algorithm identifier".to_string()))?;

    if !is_digest_hex(digest) {
        return Err(Error::MalformedBlock(format!(
            "trailing digest has {} hex digits",
            digest.len()
        )));
    }

    Ok(digest.to_string())
}
