//! Signed OneRoster `GET` requests.
//!
//! [`OneRosterClient`] owns a [`Signer`] and a shared transport. Two entry points exist:
//!
//! - [`OneRosterClient::request`] returns transport failures as [`Error::Transport`].
//! - [`OneRosterClient::get`] folds transport failures into a status-0 [`RosterResponse`]
//!   whose body describes the failure. Encoding and signing errors still propagate because
//!   no request was ever attempted.
//!
//! Neither entry point treats non-200 statuses as errors; use [`RosterResponse::into_result`]
//! for that.

// self
use crate::{
	_prelude::*,
	error::TransportError,
	http::{OutboundRequest, RosterHttpClient, RosterResponse},
	oauth1::{SignedRequest, Signer},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};
#[cfg(feature = "reqwest")]
use crate::{auth::Credentials, config::SigningOptions, http::ReqwestHttpClient};

/// Client specialized for the crate's default reqwest transport.
#[cfg(feature = "reqwest")]
pub type ReqwestOneRosterClient = OneRosterClient<ReqwestHttpClient>;

/// Signs and dispatches OneRoster `GET` requests with one credential pair.
///
/// The client holds no per-request state, so it can be cloned freely and shared across
/// tasks; every call generates its own timestamp and nonce.
pub struct OneRosterClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	signer: Signer,
}
impl<C> OneRosterClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(signer: Signer, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), signer }
	}

	/// Signer used for every request.
	pub fn signer(&self) -> &Signer {
		&self.signer
	}

	/// Signs `url` without dispatching it.
	pub fn sign(&self, url: &str) -> Result<SignedRequest> {
		self.signer.sign(url)
	}

	/// Signs and sends a `GET` of `url`, surfacing transport failures as errors.
	pub async fn request(&self, url: &str) -> Result<RosterResponse> {
		const KIND: FlowKind = FlowKind::RosterRequest;

		let span = FlowSpan::new(KIND, "request");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);
		span.record_target(url);

		let result = span
			.instrument(async {
				let signed = self.signer.sign(url)?;
				let response = self.send_signed(signed).await?;

				span.record_status(response.status_code);
				obs::record_status(KIND, response.status_code);

				Ok::<_, Error>(response)
			})
			.await;

		obs::record_flow_result(KIND, result)
	}

	/// Signs and sends a `GET` of `url`, reporting transport failures as status 0.
	///
	/// The returned response carries the real status and body for every HTTP answer,
	/// including non-200 ones.
	pub async fn get(&self, url: &str) -> Result<RosterResponse> {
		const KIND: FlowKind = FlowKind::RosterRequest;

		let span = FlowSpan::new(KIND, "get");

		obs::record_flow_outcome(KIND, FlowOutcome::Attempt);
		span.record_target(url);

		let result = span
			.instrument(async {
				let signed = self.signer.sign(url)?;
				let response = match self.send_signed(signed).await {
					Ok(response) => response,
					Err(e) => {
						obs::warn_soft_failure(KIND, &e);

						RosterResponse::from_outcome(Err(e))
					},
				};

				span.record_status(response.status_code);
				obs::record_status(KIND, response.status_code);

				Ok::<_, Error>(response)
			})
			.await;

		obs::record_flow_result(KIND, result)
	}

	async fn send_signed(
		&self,
		signed: SignedRequest,
	) -> Result<RosterResponse, TransportError> {
		let SignedRequest { url, authorization, .. } = signed;

		self.http_client.execute(OutboundRequest::get(url, authorization)).await
	}
}
#[cfg(feature = "reqwest")]
impl OneRosterClient<ReqwestHttpClient> {
	/// Creates a client with default signing options and a fresh reqwest transport.
	pub fn new(credentials: Credentials) -> Result<Self> {
		Self::with_options(credentials, SigningOptions::default())
	}

	/// Creates a client with custom signing options and a fresh reqwest transport.
	pub fn with_options(credentials: Credentials, options: SigningOptions) -> Result<Self> {
		Ok(Self::with_http_client(Signer::new(credentials, options)?, ReqwestHttpClient::default()))
	}
}
impl<C> Clone for OneRosterClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: self.http_client.clone(), signer: self.signer.clone() }
	}
}
impl<C> Debug for OneRosterClient<C>
where
	C: ?Sized + RosterHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OneRosterClient").field("signer", &self.signer).finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::Mutex;
	// self
	use super::*;
	use crate::{
		auth::Credentials, config::SigningOptions, error::EncodingError, http::TransportFuture,
	};

	#[derive(Default)]
	struct Recording {
		seen: Mutex<Vec<OutboundRequest>>,
		fail: bool,
	}
	impl RosterHttpClient for Recording {
		fn execute(&self, request: OutboundRequest) -> TransportFuture<'_> {
			let fail = self.fail;

			if let Ok(mut seen) = self.seen.lock() {
				seen.push(request);
			}

			Box::pin(async move {
				if fail {
					Err(TransportError::network(std::io::Error::new(
						std::io::ErrorKind::ConnectionRefused,
						"connection refused",
					)))
				} else {
					Ok(RosterResponse::new(200, "{\"users\":[]}"))
				}
			})
		}
	}

	fn client(fail: bool) -> OneRosterClient<Recording> {
		let credentials =
			Credentials::parse("CID", "SECRET").expect("Credential fixture should be valid.");
		let signer = Signer::new(credentials, SigningOptions::default())
			.expect("Signer should build with default options.");

		OneRosterClient::with_http_client(signer, Recording { fail, ..Default::default() })
	}

	#[tokio::test]
	async fn request_attaches_signed_header() {
		let client = client(false);
		let response = client
			.request("https://oneroster.example.com/users?limit=5")
			.await
			.expect("Recording transport should succeed.");

		assert!(response.is_success());

		let seen = client.http_client.seen.lock().expect("Recording lock should not be poisoned.");
		let sent = &seen[0];

		assert_eq!(sent.url, "https://oneroster.example.com/users?limit=5");
		assert!(
			sent.authorization
				.as_deref()
				.is_some_and(|value| value.starts_with("OAuth oauth_consumer_key=\"CID\""))
		);
	}

	#[tokio::test]
	async fn get_folds_transport_failures() {
		let client = client(true);
		let response = client
			.get("https://oneroster.example.com/users")
			.await
			.expect("Transport failures should not surface as errors.");

		assert_eq!(response.status_code, 0);
		assert!(response.body.contains("connection refused"));

		let err = client
			.request("https://oneroster.example.com/users")
			.await
			.expect_err("Tagged entry point should surface transport failures.");

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
	}

	#[tokio::test]
	async fn encoding_errors_skip_dispatch() {
		let client = client(false);
		let err = client
			.get("https://oneroster.example.com/users?filter=%G1")
			.await
			.expect_err("Malformed escapes should fail before dispatch.");

		assert!(matches!(err, Error::Encoding(EncodingError::InvalidEscape { .. })));
		assert!(
			client.http_client.seen.lock().expect("Recording lock should not be poisoned.").is_empty()
		);
	}
}
