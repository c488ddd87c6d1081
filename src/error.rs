//! Crate-level error types shared by the signing core, transports, and clients.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Request URL could not be decoded into parameters.
	#[error(transparent)]
	Encoding(#[from] EncodingError),
	/// Signature could not be computed.
	#[error(transparent)]
	Signing(#[from] SigningError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (URL, DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// API answered with a non-200 status; the raw response is preserved.
	#[error("API responded with HTTP {status}.")]
	Protocol {
		/// HTTP status code returned by the API.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// Token endpoint rejected the authorization code exchange.
	#[error("Token endpoint rejected the exchange with HTTP {status}.")]
	Auth {
		/// HTTP status code returned by the token endpoint.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// Response body was not the JSON document we expected.
	#[error("Response body could not be parsed as JSON.")]
	ResponseParse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Requested node is absent from the JSON response.
	#[error("Response does not contain the `{node}` node.")]
	MissingNode {
		/// Name of the missing top-level node.
		node: String,
	},
}

/// Failures raised while decoding request URLs into parameters.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum EncodingError {
	/// A `%` was not followed by two hexadecimal digits.
	#[error("Malformed percent-escape `{sequence}` at byte {position}.")]
	InvalidEscape {
		/// Byte offset of the `%` inside the raw (undecoded) segment.
		position: usize,
		/// Offending sequence (up to three bytes).
		sequence: String,
	},
	/// Decoded octets are not valid UTF-8.
	#[error("Percent-decoded query segment is not valid UTF-8.")]
	InvalidUtf8,
	/// A query segment had no `=` while parsing in strict mode.
	#[error("Query segment `{segment}` has no `=` separator.")]
	MissingSeparator {
		/// Decoded segment lacking a key/value separator.
		segment: String,
	},
}

/// Failures raised by the HMAC signer.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SigningError {
	/// HMAC-SHA256 refused the derived key material.
	#[error("HMAC-SHA256 could not be initialized with the derived signing key.")]
	InvalidKey,
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint URL cannot be parsed.
	#[error("Endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS unless they point at a loopback host.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Redirect URI cannot be parsed.
	#[error("Redirect URI is invalid.")]
	InvalidRedirect {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Nonce length is below the supported minimum.
	#[error("Nonce length {len} is below the minimum of {min}.")]
	NonceTooShort {
		/// Requested nonce length.
		len: usize,
		/// Minimum accepted nonce length.
		min: usize,
	},
	/// Nonce length is above the supported maximum.
	#[error("Nonce length {len} exceeds the maximum of {max}.")]
	NonceTooLong {
		/// Requested nonce length.
		len: usize,
		/// Maximum accepted nonce length.
		max: usize,
	},
	/// Signed header could not be represented by the HTTP stack.
	#[error("Authorization header value is not a valid HTTP header.")]
	InvalidHeader {
		/// Transport-specific header error.
		#[source]
		source: BoxError,
	},
	/// Only `GET` requests can be signed.
	#[error("HTTP method `{method}` cannot be signed; only GET is supported.")]
	UnsupportedMethod {
		/// Rejected method name.
		method: String,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (URL, network, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Request URL could not be parsed.
	#[error("Request URL is invalid.")]
	InvalidUrl {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request did not complete before the configured timeout.
	#[error("Request timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Human-readable diagnostic including the full source chain.
	pub fn diagnostic(&self) -> String {
		let mut message = self.to_string();
		let mut source = self.source();

		while let Some(cause) = source {
			message.push_str(" Caused by: ");
			message.push_str(&cause.to_string());

			source = cause.source();
		}

		message
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() {
			Self::Timeout { source: Box::new(e) }
		} else {
			Self::network(e)
		}
	}
}
