//! Transport primitives for roster and OneClick requests.
//!
//! [`RosterHttpClient`] is the crate's only dependency on an HTTP stack. It executes an
//! [`OutboundRequest`] and reports either a [`RosterResponse`] (for every HTTP status,
//! success or not) or a [`TransportError`] when no response was obtained. The provided
//! [`RosterHttpClient::get`] folds transport failures into the status-0 convention for
//! callers that want a response value on every path.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// crates.io
use serde::de::DeserializeOwned;
// self
use crate::{_prelude::*, error::TransportError};

/// Boxed future returned by [`RosterHttpClient::execute`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<RosterResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared by many
/// clients behind an [`Arc`], and the futures they return must be `Send` so client calls can
/// hop executors.
pub trait RosterHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Executes `request`, reading the full body regardless of status.
	///
	/// URL parsing happens here, so a malformed URL is a [`TransportError::InvalidUrl`]
	/// rather than a panic or a builder error.
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_>;

	/// Issues a `GET` with `authorization` attached and never fails: transport errors become
	/// a status-0 response whose body describes the failure.
	fn get<'a>(
		&'a self,
		url: &str,
		authorization: &str,
	) -> Pin<Box<dyn Future<Output = RosterResponse> + 'a + Send>> {
		let request = OutboundRequest::get(url, authorization);

		Box::pin(async move { RosterResponse::from_outcome(self.execute(request).await) })
	}
}

/// HTTP methods the crate issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// Signed roster requests and bearer info requests.
	Get,
	/// Form-encoded token exchange.
	Post,
}
impl HttpMethod {
	/// Upper-case method name.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Transport-agnostic description of one outbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct OutboundRequest {
	/// Request method.
	pub method: HttpMethod,
	/// Absolute URL, parsed by the transport.
	pub url: String,
	/// Optional `Authorization` header value.
	pub authorization: Option<String>,
	/// Form fields sent as `application/x-www-form-urlencoded` (POST only).
	pub form: Vec<(String, String)>,
}
impl OutboundRequest {
	/// `GET` with an `Authorization` header.
	pub fn get(url: impl Into<String>, authorization: impl Into<String>) -> Self {
		Self {
			method: HttpMethod::Get,
			url: url.into(),
			authorization: Some(authorization.into()),
			form: Vec::new(),
		}
	}

	/// Form-encoded `POST` without an `Authorization` header.
	pub fn post_form<I, K, V>(url: impl Into<String>, form: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			method: HttpMethod::Post,
			url: url.into(),
			authorization: None,
			form: form.into_iter().map(|(key, value)| (key.into(), value.into())).collect(),
		}
	}
}
impl Debug for OutboundRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let form_keys = self.form.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>();

		f.debug_struct("OutboundRequest")
			.field("method", &self.method)
			.field("url", &self.url)
			.field("authorization_set", &self.authorization.is_some())
			.field("form_keys", &form_keys)
			.finish()
	}
}

/// Status and raw body of an API response.
///
/// `status_code == 0` means no response was obtained; the body then carries a diagnostic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterResponse {
	/// HTTP status, or [`RosterResponse::NO_RESPONSE`].
	pub status_code: u16,
	/// Raw response body, or a diagnostic for status 0.
	pub body: String,
}
impl RosterResponse {
	/// Status reserved for "no response obtained".
	pub const NO_RESPONSE: u16 = 0;

	/// Creates a response value.
	pub fn new(status_code: u16, body: impl Into<String>) -> Self {
		Self { status_code, body: body.into() }
	}

	/// Folds a transport outcome into the status-0 convention.
	pub fn from_outcome(outcome: Result<Self, TransportError>) -> Self {
		match outcome {
			Ok(response) => response,
			Err(e) => Self::new(
				Self::NO_RESPONSE,
				format!("An error occurred, check your URL. {}", e.diagnostic()),
			),
		}
	}

	/// Whether a real HTTP response was received.
	pub fn has_response(&self) -> bool {
		self.status_code != Self::NO_RESPONSE
	}

	/// Whether the API answered `200 OK`.
	pub fn is_success(&self) -> bool {
		self.status_code == 200
	}

	/// Converts any non-200 response into [`Error::Protocol`], keeping status and body.
	pub fn into_result(self) -> Result<Self> {
		if self.is_success() {
			Ok(self)
		} else {
			Err(Error::Protocol { status: self.status_code, body: self.body })
		}
	}

	/// Deserializes the body as JSON.
	pub fn json<T>(&self) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_str(&self.body);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| Error::ResponseParse { source, status: self.status_code })
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client whose requests fail with [`TransportError::Timeout`] after `timeout`.
	pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, crate::error::ConfigError> {
		Ok(Self(ReqwestClient::builder().timeout(timeout).build()?))
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl RosterHttpClient for ReqwestHttpClient {
	fn execute(&self, request: OutboundRequest) -> TransportFuture<'_> {
		let client = self.0.clone();

		Box::pin(async move {
			let OutboundRequest { method, url, authorization, form } = request;
			let url = Url::parse(&url).map_err(|source| TransportError::InvalidUrl { source })?;
			let mut builder = match method {
				HttpMethod::Get => client.get(url),
				HttpMethod::Post => client.post(url).form(&form),
			};

			if let Some(value) = authorization {
				builder = builder.header(reqwest::header::AUTHORIZATION, value);
			}

			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.text().await?;

			Ok(RosterResponse::new(status, body))
		})
	}
}
