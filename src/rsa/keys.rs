// RSA Key Parameters
// Public and private key records loaded from a parameter file

use num_traits::One;

use super::bigint::RsaBigInt;
use crate::error::{Error, Result};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPublicKey {
    n: RsaBigInt, // Modulus
    e: RsaBigInt, // Public exponent
}

/// RSA Private Key
///
/// Carries the public exponent alongside `d` so a signature can be checked
/// against the key that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct RsaPrivateKey {
    public: RsaPublicKey,
    d: RsaBigInt, // Private exponent
}

fn check_modulus(n: &RsaBigInt) -> Result<()> {
    if *n <= RsaBigInt::one() {
        return Err(Error::InvalidParameter {
            field: "n",
            reason: "modulus must be greater than 1".to_string(),
        });
    }
    Ok(())
}

impl RsaPublicKey {
    /// Build a public key; the modulus must exceed 1
    pub fn new(n: RsaBigInt, e: RsaBigInt) -> Result<Self> {
        check_modulus(&n)?;
        Ok(Self { n, e })
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.n
    }

    pub fn e(&self) -> &RsaBigInt {
        &self.e
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.n.bits()
    }
}

impl RsaPrivateKey {
    /// Build a private key from `(n, e, d)`.
    ///
    /// `n = p*q` and `e*d ≡ 1 (mod λ(n))` are trusted, not checked.
    pub fn new(n: RsaBigInt, e: RsaBigInt, d: RsaBigInt) -> Result<Self> {
        Ok(Self {
            public: RsaPublicKey::new(n, e)?,
            d,
        })
    }

    pub fn n(&self) -> &RsaBigInt {
        &self.public.n
    }

    pub fn d(&self) -> &RsaBigInt {
        &self.d
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    /// Get the bit length of the modulus
    pub fn bit_length(&self) -> u64 {
        self.public.bit_length()
    }
}
