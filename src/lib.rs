//! OneRoster request signing and OneClick OAuth 2.0 helpers for roster/identity APIs.
//!
//! The crate centers on a private HMAC-SHA256 request-signing scheme shaped like OAuth 1.0
//! (see [`oauth1`]), wraps it in a roster client that dispatches signed `GET` requests
//! ([`roster`]), and ships a small bearer-token client for the OneClick authorization-code
//! flow ([`oneclick`]).

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
#[cfg(feature = "reqwest")] pub mod ext;
pub mod http;
pub mod oauth1;
pub mod obs;
pub mod oneclick;
pub mod roster;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _, tokio as _};
