//! Walks through the OneClick authorization-code flow.
//!
//! Without arguments it prints the URL to send a user to. Pass the `code` from the redirect
//! as the first argument to exchange it and fetch the user's profile.

// std
use std::env;
// crates.io
use color_eyre::Result;
// self
use oneroster_client::{auth::ClientId, oneclick::OneClickClient};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client_id = env::var("ONECLICK_CLIENT_ID").unwrap_or_else(|_| "demo-client".into());
	let client_secret =
		env::var("ONECLICK_CLIENT_SECRET").unwrap_or_else(|_| "demo-secret".into());
	let client = OneClickClient::new(ClientId::new(client_id)?, client_secret)?;

	let Some(code) = env::args().nth(1) else {
		println!("Send your user to {}.", client.authorization_url(None, None)?);
		println!("Rerun with the returned `code` to finish the exchange.");

		return Ok(());
	};
	let token = client.exchange_code(&code).await?;
	let info = client.user_info(&token).await?;

	println!("{}", serde_json::to_string_pretty(&info)?);

	Ok(())
}
