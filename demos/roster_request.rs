//! Signs a OneRoster `GET` and dispatches it.
//!
//! Reads `ONEROSTER_KEY`, `ONEROSTER_SECRET`, and `ONEROSTER_URL` from the environment and
//! falls back to placeholder values, in which case the request fails soft with status 0.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use oneroster_client::{auth::Credentials, roster::OneRosterClient};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let key = env::var("ONEROSTER_KEY").unwrap_or_else(|_| "demo-key".into());
	let secret = env::var("ONEROSTER_SECRET").unwrap_or_else(|_| "demo-secret".into());
	let url = env::var("ONEROSTER_URL").unwrap_or_else(|_| {
		"https://oneroster.example.invalid/ims/oneroster/v1p1/users?limit=5".into()
	});
	let client = OneRosterClient::new(Credentials::parse(key, secret)?)?;
	let signed = client.sign(&url)?;

	println!("Base string: {}.", signed.base_string);
	println!("Authorization: {}.", signed.authorization);

	let response = client.get(&url).await?;

	if response.has_response() {
		println!("HTTP {}: {}", response.status_code, response.body);
	} else {
		eprintln!("No response: {}", response.body);
	}

	Ok(())
}
