//! Protocol parameters and the `Authorization` header they render into.

// self
use crate::oauth1::encode::percent_encode;

/// Only supported signature method.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA256";

/// Per-request protocol parameters in their fixed insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolParams {
	/// `oauth_consumer_key`.
	pub consumer_key: String,
	/// `oauth_timestamp`.
	pub timestamp: String,
	/// `oauth_nonce`.
	pub nonce: String,
	/// `oauth_signature`, present once the base string has been signed.
	pub signature: Option<String>,
}
impl ProtocolParams {
	/// Creates unsigned protocol parameters.
	pub fn new(
		consumer_key: impl Into<String>,
		timestamp: impl Into<String>,
		nonce: impl Into<String>,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			timestamp: timestamp.into(),
			nonce: nonce.into(),
			signature: None,
		}
	}

	/// Attaches the computed signature.
	pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
		self.signature = Some(signature.into());

		self
	}

	/// Pairs in insertion order, including `oauth_signature` when set.
	pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
		self.unsigned_pairs().chain(self.signature.as_deref().map(|sig| ("oauth_signature", sig)))
	}

	/// Pairs in insertion order, never including `oauth_signature`.
	pub fn unsigned_pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
		[
			("oauth_consumer_key", self.consumer_key.as_str()),
			("oauth_signature_method", SIGNATURE_METHOD),
			("oauth_timestamp", self.timestamp.as_str()),
			("oauth_nonce", self.nonce.as_str()),
		]
		.into_iter()
	}
}

/// Renders `OAuth k1="enc(v1)",k2="enc(v2)",...` in insertion order.
pub fn build_header(params: &ProtocolParams) -> String {
	let rendered = params
		.pairs()
		.map(|(key, value)| format!("{key}=\"{}\"", percent_encode(value)))
		.collect::<Vec<_>>()
		.join(",");

	format!("OAuth {rendered}")
}
