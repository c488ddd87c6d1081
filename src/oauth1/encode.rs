//! Canonical percent-encoding used by every stage of the signing pipeline.

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
// self
use crate::error::EncodingError;

/// Everything except `[A-Za-z0-9-._~]` is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes every UTF-8 octet outside the unreserved set as uppercase `%XX`.
///
/// Spaces become `%20` and `*` is escaped, unlike form encoding.
pub fn percent_encode(value: &str) -> String {
	utf8_percent_encode(value, UNRESERVED).to_string()
}

/// Strictly percent-decodes `value`.
///
/// Unlike lenient decoders, a `%` that is not followed by two hex digits is an error rather
/// than being passed through, and the decoded octets must form valid UTF-8. `+` is left
/// untouched.
pub fn percent_decode(value: &str) -> Result<String, EncodingError> {
	let bytes = value.as_bytes();
	let mut cursor = 0;

	while let Some(offset) = bytes[cursor..].iter().position(|b| *b == b'%') {
		let position = cursor + offset;

		match bytes.get(position + 1..position + 3) {
			Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() =>
				cursor = position + 3,
			_ => {
				let end = (position + 3).min(bytes.len());

				return Err(EncodingError::InvalidEscape {
					position,
					sequence: String::from_utf8_lossy(&bytes[position..end]).into_owned(),
				});
			},
		}
	}

	percent_decode_str(value)
		.decode_utf8()
		.map(Cow::into_owned)
		.map_err(|_| EncodingError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn unreserved_ascii_is_identity() {
		let unreserved = "ABCxyz0189-._~";

		assert_eq!(percent_encode(unreserved), unreserved);
	}

	#[test]
	fn spaces_encode_as_percent_twenty() {
		let encoded = percent_encode("a b  c");

		assert_eq!(encoded, "a%20b%20%20c");
		assert!(!encoded.contains('+'));
		assert_eq!(encoded.matches("%20").count(), 3);
	}

	#[test]
	fn reserved_and_form_special_characters_are_escaped() {
		assert_eq!(percent_encode("*+/=&?:"), "%2A%2B%2F%3D%26%3F%3A");
		assert_eq!(percent_encode("role='student'"), "role%3D%27student%27");
	}

	#[test]
	fn multibyte_characters_escape_each_octet_uppercase() {
		assert_eq!(percent_encode("é"), "%C3%A9");
		assert_eq!(percent_encode("☃"), "%E2%98%83");
	}

	#[test]
	fn decode_round_trips_encoded_values() {
		let raw = "dateLastModified>'2024-01-01' & é";

		assert_eq!(percent_decode(&percent_encode(raw)).expect("Encoded value should decode."), raw);
		assert_eq!(percent_decode("a+b").expect("Plus should decode verbatim."), "a+b");
	}

	#[test]
	fn decode_rejects_malformed_escapes() {
		assert_eq!(
			percent_decode("limit=%zz"),
			Err(EncodingError::InvalidEscape { position: 6, sequence: "%zz".into() })
		);
		assert_eq!(
			percent_decode("trailing%4"),
			Err(EncodingError::InvalidEscape { position: 8, sequence: "%4".into() })
		);
		assert_eq!(percent_decode("bad%FF"), Err(EncodingError::InvalidUtf8));
	}

	#[test]
	fn escape_positions_index_the_raw_segment() {
		// `%41` decodes to one byte, but the offset still counts its three raw bytes.
		assert_eq!(
			percent_decode("%41%zz"),
			Err(EncodingError::InvalidEscape { position: 3, sequence: "%zz".into() })
		);
	}
}
