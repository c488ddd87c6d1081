#![cfg(feature = "reqwest")]

// std
use std::time::Duration;
// crates.io
use httpmock::prelude::*;
// self
use oneroster_client::{
	auth::Credentials,
	config::SigningOptions,
	error::{Error, TransportError},
	http::{ReqwestHttpClient, RosterResponse},
	oauth1::Signer,
	roster::{OneRosterClient, ReqwestOneRosterClient},
};

const USERS_BODY: &str = "{\"users\":[{\"sourcedId\":\"u1\",\"givenName\":\"Ada\"}]}";

fn credentials() -> Credentials {
	Credentials::parse("roster-key", "roster-secret")
		.expect("Credential fixture should be valid for roster tests.")
}

fn client() -> ReqwestOneRosterClient {
	OneRosterClient::new(credentials()).expect("Roster client should build with defaults.")
}

#[tokio::test]
async fn signed_get_reaches_the_api_with_an_oauth_header() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/ims/oneroster/v1p1/users")
				.query_param("limit", "1")
				.header_exists("authorization");
			then.status(200).header("content-type", "application/json").body(USERS_BODY);
		})
		.await;
	let response = client()
		.request(&server.url("/ims/oneroster/v1p1/users?limit=1"))
		.await
		.expect("Signed request should reach the mock server.");

	mock.assert_async().await;

	assert_eq!(response, RosterResponse::new(200, USERS_BODY));

	let users: serde_json::Value = response.json().expect("Users body should be JSON.");

	assert_eq!(users["users"][0]["givenName"], "Ada");
}

#[tokio::test]
async fn non_success_statuses_pass_through_with_their_body() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/ims/oneroster/v1p1/classes");
			then.status(401).body("{\"imsx_codeMajor\":\"failure\"}");
		})
		.await;
	let response = client()
		.get(&server.url("/ims/oneroster/v1p1/classes"))
		.await
		.expect("Non-200 answers should not fail the fail-soft entry point.");

	mock.assert_async().await;

	assert_eq!(response.status_code, 401);
	assert_eq!(response.body, "{\"imsx_codeMajor\":\"failure\"}");
	assert!(matches!(response.into_result(), Err(Error::Protocol { status: 401, .. })));
}

#[tokio::test]
async fn unreachable_hosts_report_status_zero() {
	let client = client();
	let response = client
		.get("http://127.0.0.1:1/ims/oneroster/v1p1/users")
		.await
		.expect("Connection failures should fold into a response.");

	assert_eq!(response.status_code, 0);
	assert!(!response.body.is_empty());

	let err = client
		.request("http://127.0.0.1:1/ims/oneroster/v1p1/users")
		.await
		.expect_err("Tagged entry point should surface the connection failure.");

	assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
}

#[tokio::test]
async fn malformed_urls_fail_soft() {
	let response = client()
		.get("not-a-url")
		.await
		.expect("Malformed URLs should fold into a response.");

	assert_eq!(response.status_code, 0);
	assert!(response.body.contains("Request URL is invalid."));
}

#[tokio::test]
async fn slow_responses_time_out_on_a_configured_transport() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/slow");
			then.status(200).delay(Duration::from_millis(500)).body("{}");
		})
		.await;
	let transport = ReqwestHttpClient::with_timeout(Duration::from_millis(50))
		.expect("Timeout transport should build.");
	let signer = Signer::new(credentials(), SigningOptions::default())
		.expect("Signer should build with default options.");
	let client: ReqwestOneRosterClient = OneRosterClient::with_http_client(signer, transport);
	let err = client
		.request(&server.url("/slow"))
		.await
		.expect_err("Request should time out before the delayed answer.");

	assert!(matches!(err, Error::Transport(TransportError::Timeout { .. })));
}
