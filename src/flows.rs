//! Token lifecycle operations: login, refresh, rotation, and revocation.

pub mod common;

mod login;
mod revoke;

// self
use crate::{_prelude::*, config::ServiceConfig, http::TokenHttpClient};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Lifecycle client specialized for the crate's default reqwest transport.
pub type ReqwestTokenClient = TokenLifecycleClient<ReqwestHttpClient>;

/// Performs OAuth 2.0 logins against the token service and revokes issued tokens.
///
/// The client is stateless between calls: it holds the immutable [`ServiceConfig`] and a
/// shareable transport, never a credential. Each operation sends exactly one request and returns
/// the outcome; retries and expiry tracking belong to the caller.
pub struct TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client wrapper used for every outbound request.
	pub http_client: Arc<C>,
	/// Host, scope, and timeout applied to every request.
	pub config: ServiceConfig,
}
impl<C> TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(config: ServiceConfig, http_client: impl Into<Arc<C>>) -> Self {
		Self { http_client: http_client.into(), config }
	}
}
#[cfg(feature = "reqwest")]
impl TokenLifecycleClient<ReqwestHttpClient> {
	/// Creates a client backed by a reqwest transport honoring the configured timeout.
	pub fn new(config: ServiceConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::new(config.timeout())?;

		Ok(Self::with_http_client(config, http_client))
	}
}
impl<C> Clone for TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self { http_client: self.http_client.clone(), config: self.config.clone() }
	}
}
impl<C> Debug for TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenLifecycleClient").field("config", &self.config).finish()
	}
}
