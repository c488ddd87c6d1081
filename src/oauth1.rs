//! HMAC-SHA256 request signing shaped after OAuth 1.0 one-legged requests.
//!
//! The pipeline runs leaf-first:
//!
//! 1. [`params::normalize`] splits the request URL, decodes its query, and merges it with
//!    freshly generated [`ProtocolParams`] into [`CanonicalParams`].
//! 2. [`base_string::build_base_string`] serializes method, base URL, and sorted parameters.
//! 3. [`signature::sign`] computes the HMAC over the base string with `enc(secret) + "&"`.
//! 4. [`header::build_header`] renders the signed protocol parameters in insertion order.
//!
//! Every stage is a pure function; only [`nonce`] touches the clock and the RNG. The scheme
//! has no token secret and uses long nonces, so it should be treated as a private signing
//! scheme rather than a drop-in OAuth 1.0a implementation.

pub mod base_string;
pub mod encode;
pub mod header;
pub mod nonce;
pub mod params;
pub mod signature;

pub use base_string::*;
pub use encode::*;
pub use header::*;
pub use nonce::{DEFAULT_NONCE_LEN, MAX_NONCE_LEN, MIN_NONCE_LEN};
pub use params::*;

// self
use crate::{_prelude::*, auth::Credentials, config::SigningOptions};

/// The only HTTP method the scheme signs.
pub const METHOD: &str = "GET";

/// Everything produced while signing one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
	/// Full request URL as supplied by the caller.
	pub url: String,
	/// URL without its query string.
	pub base_url: String,
	/// Canonical string that was signed.
	pub base_string: String,
	/// Protocol parameters including `oauth_signature`.
	pub protocol: ProtocolParams,
	/// Ready-to-send `Authorization` header value.
	pub authorization: String,
}

/// Signs request URLs with a fixed credential pair.
///
/// Construction fails if the options are invalid or HMAC-SHA256 rejects the derived key,
/// so a misconfigured signer never reaches the request path.
#[derive(Clone, Debug)]
pub struct Signer {
	credentials: Credentials,
	options: SigningOptions,
}
impl Signer {
	/// Validates `options`, probes the HMAC primitive, and builds the signer.
	pub fn new(credentials: Credentials, options: SigningOptions) -> Result<Self> {
		options.validate()?;
		signature::ensure_available(credentials.consumer_secret.expose())?;

		Ok(Self { credentials, options })
	}

	/// Credentials the signer was built with.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Options the signer was built with.
	pub fn options(&self) -> &SigningOptions {
		&self.options
	}

	/// Signs a `GET` of `url` with a fresh timestamp and nonce.
	pub fn sign(&self, url: &str) -> Result<SignedRequest> {
		self.sign_with(url, nonce::timestamp(), nonce::nonce(self.options.nonce_len))
	}

	/// Signs a `GET` of `url` with caller-supplied uniqueness tokens.
	///
	/// Deterministic for identical inputs, which makes it the entry point for fixtures.
	pub fn sign_with(
		&self,
		url: &str,
		timestamp: impl Into<String>,
		nonce: impl Into<String>,
	) -> Result<SignedRequest> {
		let protocol =
			ProtocolParams::new(self.credentials.consumer_key.to_string(), timestamp, nonce);
		let params = params::normalize(url, &protocol, self.options.query_mode)?;
		let (base_url, _) = params::split_url(url);
		let base_string = base_string::build_base_string(METHOD, base_url, &params);
		let digest = signature::sign(&base_string, self.credentials.consumer_secret.expose())?;
		let protocol = protocol.with_signature(digest);
		let authorization = header::build_header(&protocol);

		Ok(SignedRequest {
			url: url.to_owned(),
			base_url: base_url.to_owned(),
			base_string,
			protocol,
			authorization,
		})
	}
}
