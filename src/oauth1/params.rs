//! Query parsing and the canonical (sorted, merged) parameter set.

// self
use crate::{
	_prelude::*,
	error::EncodingError,
	oauth1::{ProtocolParams, encode},
};

/// Synthetic key assigned to legacy single-token filter segments.
pub const LEGACY_FILTER_KEY: &str = "filter";

// Characters skipped from a legacy segment, i.e. the length of `filter=`.
const LEGACY_FILTER_PREFIX_LEN: usize = 7;

/// How `&`-delimited query segments are turned into key/value pairs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
	/// Split every decoded segment on its first `=`; a segment without `=` is an error.
	#[default]
	Strict,
	/// Accept segments only when they split into exactly two pieces on `=`; anything else is
	/// stored under `filter` with its first seven characters dropped.
	///
	/// This reproduces older integrations that passed `filter=<expr>` expressions whose
	/// decoded form carries extra `=` characters.
	LegacyFilter,
}

/// Splits `url` on its first `?` into the base URL and the optional raw query string.
pub fn split_url(url: &str) -> (&str, Option<&str>) {
	match url.split_once('?') {
		Some((base, query)) => (base, Some(query)),
		None => (url, None),
	}
}

/// Parses a raw query string into decoded query parameters.
///
/// Each segment is percent-decoded as a whole before it is split, so an encoded `%3D`
/// inside a value participates in the split. Empty segments are ignored and later
/// duplicates overwrite earlier ones.
pub fn parse_query(
	query: &str,
	mode: QueryMode,
) -> Result<BTreeMap<String, String>, EncodingError> {
	let mut params = BTreeMap::new();

	for segment in query.split('&').filter(|segment| !segment.is_empty()) {
		let decoded = encode::percent_decode(segment)?;
		let (key, value) = match mode {
			QueryMode::Strict => split_strict(decoded)?,
			QueryMode::LegacyFilter => split_legacy(decoded),
		};

		params.insert(key, value);
	}

	Ok(params)
}

fn split_strict(decoded: String) -> Result<(String, String), EncodingError> {
	match decoded.split_once('=') {
		Some((key, value)) => Ok((key.to_owned(), value.to_owned())),
		None => Err(EncodingError::MissingSeparator { segment: decoded }),
	}
}

fn split_legacy(decoded: String) -> (String, String) {
	let mut pieces = decoded.split('=');

	if let (Some(key), Some(value), None) = (pieces.next(), pieces.next(), pieces.next()) {
		return (key.to_owned(), value.to_owned());
	}

	(LEGACY_FILTER_KEY.to_owned(), decoded.chars().skip(LEGACY_FILTER_PREFIX_LEN).collect())
}

/// Protocol and query parameters merged and sorted by the byte order of their keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonicalParams(BTreeMap<String, String>);
impl CanonicalParams {
	/// Merges the unsigned protocol parameters with the query parameters.
	///
	/// Protocol parameters are inserted first; a query parameter with the same key
	/// overwrites the protocol value.
	pub fn merge(protocol: &ProtocolParams, query: BTreeMap<String, String>) -> Self {
		let mut params: BTreeMap<String, String> = protocol
			.unsigned_pairs()
			.map(|(key, value)| (key.to_owned(), value.to_owned()))
			.collect();

		params.extend(query);

		Self(params)
	}

	/// Iterates pairs in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
	}

	/// Looks up a single parameter.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	/// Number of parameters.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no parameters are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for CanonicalParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
	}
}

/// Splits `url`, parses its query with `mode`, and merges it with `protocol`.
pub fn normalize(
	url: &str,
	protocol: &ProtocolParams,
	mode: QueryMode,
) -> Result<CanonicalParams, EncodingError> {
	let query = match split_url(url).1 {
		Some(raw) => parse_query(raw, mode)?,
		None => BTreeMap::new(),
	};

	Ok(CanonicalParams::merge(protocol, query))
}
