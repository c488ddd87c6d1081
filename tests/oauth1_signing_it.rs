// self
use oneroster_client::{
	auth::Credentials,
	config::SigningOptions,
	error::{EncodingError, Error},
	oauth1::{QueryMode, Signer},
};

const TIMESTAMP: &str = "1000000000";
const NONCE: &str = "AAAAAAAAAA";

fn signer(options: SigningOptions) -> Signer {
	let credentials = Credentials::parse("CID", "SECRET")
		.expect("Credential fixture should be valid for signing tests.");

	Signer::new(credentials, options).expect("Signer should build for signing tests.")
}

#[test]
fn signing_is_deterministic_and_order_independent() {
	let signer = signer(SigningOptions::default());
	let first = signer
		.sign_with("https://example.com/api?x=1&y=2", TIMESTAMP, NONCE)
		.expect("Ordered query should sign.");
	let again = signer
		.sign_with("https://example.com/api?x=1&y=2", TIMESTAMP, NONCE)
		.expect("Repeated query should sign.");
	let shuffled = signer
		.sign_with("https://example.com/api?y=2&x=1", TIMESTAMP, NONCE)
		.expect("Shuffled query should sign.");

	assert_eq!(first, again);
	assert_eq!(first.base_string, shuffled.base_string);
	assert_eq!(first.authorization, shuffled.authorization);
	assert_eq!(
		first.protocol.signature.as_deref(),
		Some("901H7qg3mwiJ/77Y64uKxcDdz+kHANnnHsPctV8FIjw=")
	);
}

#[test]
fn query_parameters_override_protocol_parameters() {
	let signed = signer(SigningOptions::default())
		.sign_with("https://example.com/api?oauth_nonce=evil", TIMESTAMP, NONCE)
		.expect("Colliding query should sign.");

	assert_eq!(
		signed.base_string,
		"GET&https%3A%2F%2Fexample.com%2Fapi&oauth_consumer_key%3DCID%26oauth_nonce%3Devil%26oauth_signature_method%3DHMAC-SHA256%26oauth_timestamp%3D1000000000"
	);
	assert_eq!(
		signed.protocol.signature.as_deref(),
		Some("nuNzQMpFQMq9VIaWeRKp97hsvxdLXC5IZSnfoU60A38=")
	);
	// The header still carries the generated nonce.
	assert!(signed.authorization.contains("oauth_nonce=\"AAAAAAAAAA\""));
}

#[test]
fn header_lists_protocol_parameters_in_insertion_order() {
	let signed = signer(SigningOptions::default())
		.sign_with("https://example.com/api?x=1&y=2", TIMESTAMP, NONCE)
		.expect("Known vector should sign.");

	assert_eq!(
		signed.authorization,
		"OAuth oauth_consumer_key=\"CID\",oauth_signature_method=\"HMAC-SHA256\",oauth_timestamp=\"1000000000\",oauth_nonce=\"AAAAAAAAAA\",oauth_signature=\"901H7qg3mwiJ%2F77Y64uKxcDdz%2BkHANnnHsPctV8FIjw%3D\""
	);
}

#[test]
fn decoded_spaces_are_reencoded_without_plus() {
	let signed = signer(SigningOptions::default())
		.sign_with("https://example.com/api?q=a%20b", TIMESTAMP, NONCE)
		.expect("Escaped space should sign.");

	assert!(signed.base_string.ends_with("%26q%3Da%2520b"));
	assert!(!signed.base_string.contains('+'));
}

#[test]
fn legacy_mode_accepts_multi_separator_filters_and_bare_tokens() {
	let url = "https://example.com/users?filter%3DfamilyName%3D'Smith'";
	let strict = signer(SigningOptions::default())
		.sign_with(url, TIMESTAMP, NONCE)
		.expect("Strict mode should split on the first `=`.");
	let legacy = signer(SigningOptions::default().with_query_mode(QueryMode::LegacyFilter))
		.sign_with(url, TIMESTAMP, NONCE)
		.expect("Legacy mode should accept a multi-`=` filter.");

	assert!(
		strict
			.base_string
			.contains("Fusers&filter%3DfamilyName%253D%2527Smith%2527%26oauth_consumer_key")
	);
	assert_eq!(strict.base_string, legacy.base_string);

	let err = signer(SigningOptions::default())
		.sign_with("https://example.com/users?bare", TIMESTAMP, NONCE)
		.expect_err("Strict mode should reject segments without `=`.");

	assert!(matches!(
		err,
		Error::Encoding(EncodingError::MissingSeparator { ref segment }) if segment == "bare"
	));
	assert!(
		signer(SigningOptions::default().with_query_mode(QueryMode::LegacyFilter))
			.sign_with("https://example.com/users?bare", TIMESTAMP, NONCE)
			.is_ok()
	);
}
