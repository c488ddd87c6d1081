//! OneClick OAuth 2.0 authorization-code client.
//!
//! The flow has three steps:
//!
//! 1. Send the user to [`OneClickClient::authorization_url`].
//! 2. Trade the returned `code` for an [`AccessToken`] via [`OneClickClient::exchange_code`].
//! 3. Call bearer-authenticated info endpoints with [`OneClickClient::info`] or one of the
//!    typed helpers in [`info`].

pub mod info;

pub use info::*;

// crates.io
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	auth::{AccessToken, ClientId, ClientSecret},
	config::OneClickEndpoints,
	error::ConfigError,
	http::{OutboundRequest, RosterHttpClient, RosterResponse},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

/// Scope requested when the caller does not pass one.
pub const DEFAULT_SCOPE: &str = "profile";
/// Redirect URI used when the caller does not pass one.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/code";

/// Client specialized for the crate's default reqwest transport.
#[cfg(feature = "reqwest")]
pub type ReqwestOneClickClient = OneClickClient<ReqwestHttpClient>;

#[derive(Deserialize)]
struct TokenResponse {
	access_token: String,
}

/// OneClick client bound to one registered application.
pub struct OneClickClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	endpoints: OneClickEndpoints,
	client_id: ClientId,
	client_secret: ClientSecret,
}
impl<C> OneClickClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		client_id: ClientId,
		client_secret: impl Into<String>,
		endpoints: OneClickEndpoints,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self {
			http_client: http_client.into(),
			endpoints,
			client_id,
			client_secret: ClientSecret::new(client_secret),
		}
	}

	/// Endpoints the client talks to.
	pub fn endpoints(&self) -> &OneClickEndpoints {
		&self.endpoints
	}

	/// Registered client identifier.
	pub fn client_id(&self) -> &ClientId {
		&self.client_id
	}

	/// Builds the URL users visit to grant access.
	///
	/// `None` falls back to [`DEFAULT_SCOPE`] and [`DEFAULT_REDIRECT_URI`].
	pub fn authorization_url(
		&self,
		scope: Option<&str>,
		redirect_uri: Option<&str>,
	) -> Result<Url> {
		let redirect_uri = Url::parse(redirect_uri.unwrap_or(DEFAULT_REDIRECT_URI))
			.map_err(|source| ConfigError::InvalidRedirect { source })?;
		let mut url = self.endpoints.authorization.clone();

		url.query_pairs_mut()
			.append_pair("client_id", &self.client_id)
			.append_pair("scope", scope.unwrap_or(DEFAULT_SCOPE))
			.append_pair("redirect_uri", redirect_uri.as_str())
			.append_pair("response_type", "code");

		Ok(url)
	}

	/// Exchanges an authorization code for a bearer token.
	///
	/// Any status other than 200 fails with [`Error::Auth`] carrying the raw response.
	pub async fn exchange_code(&self, code: &str) -> Result<AccessToken> {
		const KIND: FlowKind = FlowKind::CodeExchange;

		let span = FlowSpan::new(KIND, "exchange_code");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);
		span.record_target(self.endpoints.token.as_str());

		let result = span
			.instrument(async {
				let request = OutboundRequest::post_form(
					self.endpoints.token.as_str(),
					[
						("client_id", &*self.client_id),
						("client_secret", self.client_secret.expose()),
						("code", code),
					],
				);
				let response = self.http_client.execute(request).await?;

				span.record_status(response.status_code);
				obs::record_status(KIND, response.status_code);

				if !response.is_success() {
					return Err(Error::Auth { status: response.status_code, body: response.body });
				}

				let token = response.json::<TokenResponse>()?;

				Ok::<_, Error>(AccessToken::new(token.access_token))
			})
			.await;

		obs::record_flow_result(KIND, result)
	}

	/// Fetches an info endpoint (e.g. `v2/my/info`) and returns its JSON body.
	///
	/// Non-200 answers fail with [`Error::Protocol`].
	pub async fn info(&self, token: &AccessToken, endpoint: &str) -> Result<Value> {
		const KIND: FlowKind = FlowKind::InfoRequest;

		let span = FlowSpan::new(KIND, "info");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);

		let result = span
			.instrument(async {
				let url = self.endpoints.info_url(endpoint)?;

				span.record_target(url.as_str());

				let response = self.fetch(token, url).await?;

				span.record_status(response.status_code);
				obs::record_status(KIND, response.status_code);

				response.into_result()?.json::<Value>()
			})
			.await;

		obs::record_flow_result(KIND, result)
	}

	/// Fetches an info endpoint and returns one top-level node of its JSON body.
	pub async fn info_node(&self, token: &AccessToken, endpoint: &str, node: &str) -> Result<Value> {
		let mut body = self.info(token, endpoint).await?;

		body.as_object_mut()
			.and_then(|object| object.remove(node))
			.ok_or_else(|| Error::MissingNode { node: node.to_owned() })
	}

	async fn fetch(&self, token: &AccessToken, url: Url) -> Result<RosterResponse> {
		let request = OutboundRequest::get(url, format!("Bearer {}", token.expose()));

		Ok(self.http_client.execute(request).await?)
	}
}
#[cfg(feature = "reqwest")]
impl OneClickClient<ReqwestHttpClient> {
	/// Creates a client for the ClassLink production endpoints with a fresh reqwest transport.
	pub fn new(client_id: ClientId, client_secret: impl Into<String>) -> Result<Self> {
		Ok(Self::with_http_client(
			client_id,
			client_secret,
			OneClickEndpoints::classlink()?,
			ReqwestHttpClient::default(),
		))
	}
}
impl<C> Clone for OneClickClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			endpoints: self.endpoints.clone(),
			client_id: self.client_id.clone(),
			client_secret: self.client_secret.clone(),
		}
	}
}
impl<C> Debug for OneClickClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OneClickClient")
			.field("endpoints", &self.endpoints)
			.field("client_id", &self.client_id)
			.field("client_secret", &self.client_secret)
			.finish()
	}
}
