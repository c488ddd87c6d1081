//! Adapters that sign requests built outside the crate's own clients.

pub mod request_signer;

pub use request_signer::*;
