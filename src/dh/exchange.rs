// Diffie-Hellman Key Exchange
// Client side of a finite-field exchange against a known server public value

use num_traits::One;

use crate::error::{Error, Result};
use crate::rsa::bigint::{from_u64, mod_pow, RsaBigInt};

/// Client private scalar used when none is configured
pub const DEFAULT_CLIENT_PRIVATE: u64 = 123_456_789;

/// Domain parameters plus the server's public value
#[derive(Debug, Clone, PartialEq)]
pub struct DhParams {
    p: RsaBigInt,             // Prime modulus
    g: RsaBigInt,             // Generator
    server_public: RsaBigInt, // y_s = g^x_s mod p
}

/// Values produced by the client side of the exchange
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeOutcome {
    /// g^x mod p, sent to the server
    pub client_public: RsaBigInt,
    /// y_s^x mod p
    pub shared_secret: RsaBigInt,
}

impl DhParams {
    /// Build parameters; `p` must exceed 1. Primality and the order of `g`
    /// are not checked.
    pub fn new(p: RsaBigInt, g: RsaBigInt, server_public: RsaBigInt) -> Result<Self> {
        if p <= RsaBigInt::one() {
            return Err(Error::InvalidParameter {
                field: "p",
                reason: "modulus must be greater than 1".to_string(),
            });
        }
        Ok(Self {
            p,
            g,
            server_public,
        })
    }

    pub fn p(&self) -> &RsaBigInt {
        &self.p
    }

    pub fn g(&self) -> &RsaBigInt {
        &self.g
    }

    pub fn server_public(&self) -> &RsaBigInt {
        &self.server_public
    }

    /// g^private mod p
    pub fn public_value(&self, private: &RsaBigInt) -> Result<RsaBigInt> {
        mod_pow(&self.g, private, &self.p)
    }

    /// peer_public^private mod p
    pub fn shared_secret(&self, peer_public: &RsaBigInt, private: &RsaBigInt) -> Result<RsaBigInt> {
        mod_pow(peer_public, private, &self.p)
    }
}

/// The default client private scalar as a big integer
pub fn default_client_private() -> RsaBigInt {
    from_u64(DEFAULT_CLIENT_PRIVATE)
}

/// Run the client side of the exchange with `private` as the local scalar
pub fn exchange(params: &DhParams, private: &RsaBigInt) -> Result<ExchangeOutcome> {
    let client_public = params.public_value(private)?;
    let shared_secret = params.shared_secret(&params.server_public, private)?;
    tracing::debug!(modulus_bits = params.p.bits(), "computed client public value and shared secret");

    Ok(ExchangeOutcome {
        client_public,
        shared_secret,
    })
}
