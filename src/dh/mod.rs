// Diffie-Hellman Module
// Finite-field key exchange on top of the shared modular exponentiation

pub mod exchange;

pub use exchange::{default_client_private, exchange, DhParams, ExchangeOutcome, DEFAULT_CLIENT_PRIVATE};
