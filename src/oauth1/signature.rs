//! HMAC-SHA256 signer.

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;
// self
use crate::{error::SigningError, oauth1::encode::percent_encode};

type HmacSha256 = Hmac<Sha256>;

/// Derives the signing key `enc(consumer_secret) + "&"`; the token-secret half is always
/// empty in this single-legged scheme.
pub fn signing_key(consumer_secret: &str) -> String {
	format!("{}&", percent_encode(consumer_secret))
}

/// Signs `base_string` and returns the padded standard base64 digest.
pub fn sign(base_string: &str, consumer_secret: &str) -> Result<String, SigningError> {
	let mut mac = keyed_mac(consumer_secret)?;

	mac.update(base_string.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Confirms HMAC-SHA256 accepts the key derived from `consumer_secret`.
pub fn ensure_available(consumer_secret: &str) -> Result<(), SigningError> {
	keyed_mac(consumer_secret).map(drop)
}

fn keyed_mac(consumer_secret: &str) -> Result<HmacSha256, SigningError> {
	HmacSha256::new_from_slice(signing_key(consumer_secret).as_bytes())
		.map_err(|_| SigningError::InvalidKey)
}
