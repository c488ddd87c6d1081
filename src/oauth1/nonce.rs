//! Per-request uniqueness tokens.

// crates.io
use rand::{Rng, distr::Alphanumeric};
// self
use crate::_prelude::*;

/// Nonce length used when none is configured.
pub const DEFAULT_NONCE_LEN: usize = 32;
/// Shortest nonce accepted by [`SigningOptions`](crate::config::SigningOptions).
pub const MIN_NONCE_LEN: usize = 16;
/// Longest nonce accepted by [`SigningOptions`](crate::config::SigningOptions).
pub const MAX_NONCE_LEN: usize = 256;

/// Current Unix time in whole seconds, rendered as a decimal string.
pub fn timestamp() -> String {
	OffsetDateTime::now_utc().unix_timestamp().to_string()
}

/// Draws `len` characters uniformly from `[0-9A-Za-z]` using the thread-local CSPRNG.
pub fn nonce(len: usize) -> String {
	rand::rng().sample_iter(Alphanumeric).take(len).map(char::from).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn timestamp_is_decimal_seconds() {
		let raw = timestamp();
		let seconds: i64 = raw.parse().expect("Timestamp should be a decimal integer.");

		assert!(seconds > 1_600_000_000, "Timestamp should be expressed in seconds since epoch.");
		assert!(raw.bytes().all(|b| b.is_ascii_digit()));
	}

	#[test]
	fn nonce_has_requested_length_and_alphabet() {
		for len in [0, MIN_NONCE_LEN, DEFAULT_NONCE_LEN, 64] {
			let value = nonce(len);

			assert_eq!(value.len(), len);
			assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
		}
	}

	#[test]
	fn consecutive_nonces_differ() {
		assert_ne!(nonce(DEFAULT_NONCE_LEN), nonce(DEFAULT_NONCE_LEN));
	}
}
