//! Canonical signature base string.

// self
use crate::oauth1::{CanonicalParams, encode::percent_encode};

/// Serializes `method`, `base_url`, and the sorted parameters into the string that gets
/// signed: `METHOD&enc(base_url)&enc(k1=enc(v1)&k2=enc(v2)...)`.
///
/// Keys are emitted verbatim inside the parameter string and only escaped by the outer
/// encoding pass; values are escaped twice.
pub fn build_base_string(method: &str, base_url: &str, params: &CanonicalParams) -> String {
	let joined = params
		.iter()
		.map(|(key, value)| format!("{key}={}", percent_encode(value)))
		.collect::<Vec<_>>()
		.join("&");

	format!("{}&{}&{}", method.to_ascii_uppercase(), percent_encode(base_url), percent_encode(&joined))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn values_are_double_encoded() {
		let params: CanonicalParams = [("q", "a b"), ("k", "x/y")].into_iter().collect();

		assert_eq!(
			build_base_string("GET", "https://example.com/p", &params),
			"GET&https%3A%2F%2Fexample.com%2Fp&k%3Dx%252Fy%26q%3Da%2520b"
		);
	}

	#[test]
	fn method_is_upper_cased() {
		let params = CanonicalParams::default();

		assert_eq!(build_base_string("get", "https://e.io", &params), "GET&https%3A%2F%2Fe.io&");
	}

	#[test]
	fn input_order_does_not_change_output() {
		let forward: CanonicalParams =
			[("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
		let backward: CanonicalParams =
			[("c", "3"), ("a", "1"), ("b", "2")].into_iter().collect();
		let base = build_base_string("GET", "https://example.com", &forward);

		assert_eq!(base, build_base_string("GET", "https://example.com", &backward));
		assert!(base.ends_with("a%3D1%26b%3D2%26c%3D3"));
	}
}
