//! Signer tuning options: nonce length and query parsing mode.

// self
use crate::{
	_prelude::*,
	error::ConfigError,
	oauth1::{DEFAULT_NONCE_LEN, MAX_NONCE_LEN, MIN_NONCE_LEN, QueryMode},
};

/// Tunables for the request signer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SigningOptions {
	/// Number of alphanumeric characters in each generated nonce.
	pub nonce_len: usize,
	/// How request query strings are parsed before signing.
	pub query_mode: QueryMode,
}
impl SigningOptions {
	/// Overrides the nonce length (validated when the signer is built).
	pub fn with_nonce_len(mut self, len: usize) -> Self {
		self.nonce_len = len;

		self
	}

	/// Overrides the query parsing mode.
	pub fn with_query_mode(mut self, mode: QueryMode) -> Self {
		self.query_mode = mode;

		self
	}

	/// Checks invariants the signer relies on.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.nonce_len < MIN_NONCE_LEN {
			return Err(ConfigError::NonceTooShort { len: self.nonce_len, min: MIN_NONCE_LEN });
		}
		if self.nonce_len > MAX_NONCE_LEN {
			return Err(ConfigError::NonceTooLong { len: self.nonce_len, max: MAX_NONCE_LEN });
		}

		Ok(())
	}
}
impl Default for SigningOptions {
	fn default() -> Self {
		Self { nonce_len: DEFAULT_NONCE_LEN, query_mode: QueryMode::default() }
	}
}
