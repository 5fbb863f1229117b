//! Transport primitives for token-service calls.
//!
//! The lifecycle client never talks to an HTTP stack directly. It builds a
//! [`TokenHttpRequest`] (endpoint, form body, optional Basic-auth user) and hands it to a
//! [`TokenHttpClient`], which returns the raw status, reason phrase, and body text. Status
//! interpretation stays in [`flows`](crate::flows), so custom transports only need to move bytes
//! and classify their own failures into [`TransportError`](crate::error::TransportError).

// self
use crate::_prelude::*;
#[cfg(feature = "reqwest")]
use crate::error::{ConfigError, TransportError};

/// `Content-Type` sent with every token-service request.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Boxed future returned by [`TokenHttpClient::execute`].
pub type TransportFuture<'a> = Pin<Box<dyn Future<Output = Result<TokenHttpResponse>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of sending a single form-encoded POST.
///
/// Implementations must be `Send + Sync + 'static` so a client can be shared behind an
/// [`Arc`]. They must not follow redirects and must keep TLS certificate verification on.
pub trait TokenHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` and resolves once the whole response body has been read.
	///
	/// Any HTTP status is a successful transport outcome; only failures to obtain a response
	/// (DNS, connect, TLS, timeout) are errors.
	fn execute(&self, request: TokenHttpRequest) -> TransportFuture<'_>;
}

/// Transport-agnostic description of a token-service POST.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenHttpRequest {
	/// Absolute endpoint URL.
	pub url: Url,
	/// `application/x-www-form-urlencoded` body.
	pub form: String,
	/// Username for HTTP Basic authentication with an empty password, if required.
	pub basic_auth_user: Option<String>,
}
impl TokenHttpRequest {
	/// Creates an unauthenticated form POST.
	pub fn new(url: Url, form: String) -> Self {
		Self { url, form, basic_auth_user: None }
	}

	/// Attaches HTTP Basic credentials (`user`, empty password).
	pub fn with_basic_auth(mut self, user: impl Into<String>) -> Self {
		self.basic_auth_user = Some(user.into());

		self
	}
}
impl Debug for TokenHttpRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenHttpRequest")
			.field("url", &self.url.as_str())
			.field("form", &"<redacted>")
			.field("basic_auth_user", &self.basic_auth_user)
			.finish()
	}
}

/// Raw response returned by a [`TokenHttpClient`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenHttpResponse {
	/// HTTP status code.
	pub status: u16,
	/// Reason phrase associated with the status.
	pub reason: String,
	/// Response body decoded as text.
	pub body: String,
}
impl TokenHttpResponse {
	/// Returns `true` for HTTP 200, the only status the token service uses for success.
	pub fn is_ok(&self) -> bool {
		self.status == 200
	}
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Token requests never follow redirects and always verify TLS certificates. Any custom
/// [`ReqwestClient`] passed to [`with_client`](Self::with_client) should be configured the same
/// way.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a client with redirects disabled and the provided request timeout.
	pub fn new(timeout: Duration) -> Result<Self> {
		let client = ReqwestClient::builder()
			.redirect(reqwest::redirect::Policy::none())
			.timeout(timeout)
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl TokenHttpClient for ReqwestHttpClient {
	fn execute(&self, request: TokenHttpRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let mut builder = self
				.0
				.post(request.url)
				.header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
				.body(request.form);

			if let Some(user) = request.basic_auth_user {
				builder = builder.basic_auth(user, Some(""));
			}

			let response = builder.send().await.map_err(map_reqwest_error)?;
			let status = response.status();
			let body = response.text().await.map_err(map_reqwest_error)?;

			Ok(TokenHttpResponse {
				status: status.as_u16(),
				reason: status.canonical_reason().unwrap_or("Unknown Status").to_owned(),
				body,
			})
		})
	}
}

#[cfg(feature = "reqwest")]
fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::from(err).into();
	}

	TransportError::from(err).into()
}
