//! OAuth 2.0 token lifecycle client for the Refinitiv Data Platform (RDP).
//!
//! The crate turns password, refresh, and client-credentials grants into [`auth::Credential`]
//! values, rotates refresh tokens, and revokes access tokens. Every operation issues exactly one
//! form-encoded POST through a pluggable [`http::TokenHttpClient`] and reports the outcome as a
//! [`Result`]; retries, caching, and expiry tracking stay with the caller.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
#[cfg(feature = "blocking")] pub mod blocking;
pub mod config;
pub mod error;
pub mod ext;
pub mod flows;
pub mod http;
pub mod obs;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::Deserialize;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)]
use {
	base64 as _, color_eyre as _, dotenvy as _, httpmock as _, parking_lot as _, tokio as _,
	tracing_subscriber as _,
};
