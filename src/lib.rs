//! RSA PKCS#1 v1.5 signing and Diffie-Hellman key exchange built directly on
//! big-integer modular exponentiation.
//!
//! Both pipelines are pure functions of an immutable parameter record:
//! [`rsa::sign_message`] hashes, pads and exponentiates a message under an
//! [`rsa::RsaPrivateKey`], and [`dh::exchange`] derives the client public value
//! and shared secret from [`dh::DhParams`] and a private scalar.

pub mod dh;
pub mod error;
pub mod rsa;
pub mod util;

pub use error::{Error, Result};
