// Parameter Files
// JSON records holding RSA signing keys and Diffie-Hellman parameters

use std::path::Path;

use serde::Deserialize;

use super::file_ops::read_text;
use crate::dh::{default_client_private, DhParams};
use crate::error::{Error, Result};
use crate::rsa::bigint::{from_u64, parse_integer, RsaBigInt};
use crate::rsa::RsaPrivateKey;

/// Integer as it may appear in a parameter file: a decimal or `0x` hex
/// string, or a plain JSON number for small values such as `e` and `g`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IntegerField {
    Text(String),
    Number(u64),
}

impl IntegerField {
    fn into_bigint(self, field: &'static str) -> Result<RsaBigInt> {
        match self {
            IntegerField::Text(text) => parse_integer(field, &text),
            IntegerField::Number(n) => Ok(from_u64(n)),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawSigningParams {
    n: IntegerField,
    e: IntegerField,
    d: IntegerField,
}

#[derive(Debug, Deserialize)]
struct RawExchangeParams {
    p: IntegerField,
    g: IntegerField,
    y_s: IntegerField,
    #[serde(default)]
    x: Option<IntegerField>,
}

/// Everything the client side of the exchange needs
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeConfig {
    pub params: DhParams,
    pub client_private: RsaBigInt,
}

impl ExchangeConfig {
    /// Replace the client private scalar
    pub fn with_client_private(mut self, client_private: RsaBigInt) -> Self {
        self.client_private = client_private;
        self
    }
}

fn from_json<'a, T: Deserialize<'a>>(text: &'a str, origin: &Path) -> Result<T> {
    serde_json::from_str(text).map_err(|source| Error::Json {
        path: origin.to_path_buf(),
        source,
    })
}

/// Parse a signing key from JSON text; `origin` is only used in errors
pub fn parse_signing_key(text: &str, origin: &Path) -> Result<RsaPrivateKey> {
    let raw: RawSigningParams = from_json(text, origin)?;
    RsaPrivateKey::new(
        raw.n.into_bigint("n")?,
        raw.e.into_bigint("e")?,
        raw.d.into_bigint("d")?,
    )
}

/// Parse key-exchange parameters from JSON text; `origin` is only used in errors
pub fn parse_exchange_config(text: &str, origin: &Path) -> Result<ExchangeConfig> {
    let raw: RawExchangeParams = from_json(text, origin)?;
    let params = DhParams::new(
        raw.p.into_bigint("p")?,
        raw.g.into_bigint("g")?,
        raw.y_s.into_bigint("y_s")?,
    )?;
    let client_private = match raw.x {
        Some(x) => x.into_bigint("x")?,
        None => default_client_private(),
    };

    Ok(ExchangeConfig {
        params,
        client_private,
    })
}

/// Load `{ "n", "e", "d" }` from a parameter file
pub fn load_signing_key(path: &Path) -> Result<RsaPrivateKey> {
    let text = read_text(path)?;
    let key = parse_signing_key(&text, path)?;
    tracing::debug!(path = %path.display(), modulus_bits = key.bit_length(), "loaded signing key");
    Ok(key)
}

/// Load `{ "p", "g", "y_s" [, "x"] }` from a parameter file
pub fn load_exchange_config(path: &Path) -> Result<ExchangeConfig> {
    let text = read_text(path)?;
    let config = parse_exchange_config(&text, path)?;
    tracing::debug!(path = %path.display(), modulus_bits = config.params.p().bits(), "loaded exchange parameters");
    Ok(config)
}
