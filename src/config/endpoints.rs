//! OneClick endpoint set and its validating builder.

// std
use std::net::IpAddr;
// crates.io
use url::Host;
// self
use crate::{_prelude::*, error::ConfigError};

/// ClassLink launchpad authorization endpoint.
pub const CLASSLINK_AUTHORIZATION_URL: &str = "https://launchpad.classlink.com/oauth2/v2/auth";
/// ClassLink launchpad token endpoint.
pub const CLASSLINK_TOKEN_URL: &str = "https://launchpad.classlink.com/oauth2/v2/token";
/// ClassLink user-info API base.
pub const CLASSLINK_INFO_URL: &str = "https://nodeapi.classlink.com/";

/// Endpoints used by the OneClick bearer-token client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneClickEndpoints {
	/// Authorization endpoint users are redirected to.
	pub authorization: Url,
	/// Token endpoint that exchanges authorization codes.
	pub token: Url,
	/// Base URL that info endpoint paths are joined onto; always ends with `/`.
	pub info: Url,
}
impl OneClickEndpoints {
	/// Creates a builder seeded with the ClassLink production endpoints.
	pub fn builder() -> OneClickEndpointsBuilder {
		OneClickEndpointsBuilder::default()
	}

	/// ClassLink production endpoints.
	pub fn classlink() -> Result<Self, ConfigError> {
		Self::builder().build()
	}

	/// Resolves an info endpoint path (e.g. `v2/my/info`) against the info base.
	pub fn info_url(&self, endpoint: &str) -> Result<Url, ConfigError> {
		self.info
			.join(endpoint.trim_start_matches('/'))
			.map_err(|source| ConfigError::InvalidEndpoint { source })
	}
}

/// Builder for [`OneClickEndpoints`].
#[derive(Clone, Debug)]
pub struct OneClickEndpointsBuilder {
	/// Raw authorization endpoint.
	pub authorization: String,
	/// Raw token endpoint.
	pub token: String,
	/// Raw info API base.
	pub info: String,
}
impl OneClickEndpointsBuilder {
	/// Sets the authorization endpoint.
	pub fn authorization(mut self, url: impl Into<String>) -> Self {
		self.authorization = url.into();

		self
	}

	/// Sets the token endpoint.
	pub fn token(mut self, url: impl Into<String>) -> Self {
		self.token = url.into();

		self
	}

	/// Sets the info API base.
	pub fn info(mut self, url: impl Into<String>) -> Self {
		self.info = url.into();

		self
	}

	/// Parses and validates every endpoint.
	pub fn build(self) -> Result<OneClickEndpoints, ConfigError> {
		let authorization = parse_endpoint("authorization", &self.authorization)?;
		let token = parse_endpoint("token", &self.token)?;
		let mut info = parse_endpoint("info", &self.info)?;

		if !info.path().ends_with('/') {
			let path = format!("{}/", info.path());

			info.set_path(&path);
		}

		Ok(OneClickEndpoints { authorization, token, info })
	}
}
impl Default for OneClickEndpointsBuilder {
	fn default() -> Self {
		Self {
			authorization: CLASSLINK_AUTHORIZATION_URL.into(),
			token: CLASSLINK_TOKEN_URL.into(),
			info: CLASSLINK_INFO_URL.into(),
		}
	}
}

fn parse_endpoint(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw).map_err(|source| ConfigError::InvalidEndpoint { source })?;

	if url.scheme() == "https" || (url.scheme() == "http" && is_loopback(&url)) {
		Ok(url)
	} else {
		Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
