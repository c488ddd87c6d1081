//! Consumer key/secret pair owned by a client for its lifetime.

// self
use crate::{
	_prelude::*,
	auth::{ClientId, ClientSecret, IdentifierError},
};

/// Immutable consumer credentials used to sign roster requests.
///
/// The secret never appears in `Debug` output and is only ever consumed as HMAC key
/// material; the key is the only part rendered into request headers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
	/// Consumer key sent as `oauth_consumer_key`.
	pub consumer_key: ClientId,
	/// Consumer secret used to derive the signing key.
	pub consumer_secret: ClientSecret,
}
impl Credentials {
	/// Creates credentials from an already validated key and a secret.
	pub fn new(consumer_key: ClientId, consumer_secret: impl Into<String>) -> Self {
		Self { consumer_key, consumer_secret: ClientSecret::new(consumer_secret) }
	}

	/// Validates the raw consumer key and builds credentials.
	pub fn parse(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<String>,
	) -> Result<Self, IdentifierError> {
		Ok(Self::new(ClientId::new(consumer_key)?, consumer_secret))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_hides_secret() {
		let credentials =
			Credentials::parse("CID", "SECRET").expect("Credential fixture should be valid.");
		let rendered = format!("{credentials:?}");

		assert!(rendered.contains("Client(CID)"));
		assert!(!rendered.contains("SECRET"));
	}

	#[test]
	fn parse_rejects_invalid_keys() {
		assert!(Credentials::parse("", "secret").is_err());
		assert!(Credentials::parse("has space", "secret").is_err());
	}
}
