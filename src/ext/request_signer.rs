//! Attach OneRoster signatures to requests built with another client's builder.

// crates.io
use reqwest::{
	Method, Request,
	header::{AUTHORIZATION, HeaderValue},
};
// self
use crate::{_prelude::*, error::ConfigError, oauth1::Signer};

/// Signs an already built request in place of the crate's roster client.
///
/// Generic over the request and error types so other HTTP stacks can plug in their own
/// request representation.
pub trait RequestSignerExt<Request, Error>
where
	Self: Send + Sync,
{
	/// Consumes the request and returns it with an `Authorization` header attached.
	fn sign_request(&self, request: Request) -> Result<Request, Error>;
}

impl RequestSignerExt<Request, Error> for Signer {
	fn sign_request(&self, mut request: Request) -> Result<Request> {
		if request.method() != Method::GET {
			return Err(ConfigError::UnsupportedMethod { method: request.method().to_string() }
				.into());
		}

		let signed = self.sign(request.url().as_str())?;
		let value = HeaderValue::from_str(&signed.authorization)
			.map_err(|e| ConfigError::InvalidHeader { source: Box::new(e) })?;

		request.headers_mut().insert(AUTHORIZATION, value);

		Ok(request)
	}
}
