//! Synchronous facade over [`flows::TokenLifecycleClient`](crate::flows::TokenLifecycleClient).
//!
//! Each blocking client owns a current-thread Tokio runtime and drives one operation to
//! completion per call. Do not call these methods from inside an async runtime; use the async
//! client there instead.

// crates.io
use tokio::runtime::{Builder, Runtime};
// self
use crate::{
	_prelude::*,
	auth::{AuthRequest, Credential},
	config::ServiceConfig,
	error::ConfigError,
	flows,
	http::{ReqwestHttpClient, TokenHttpClient},
};

/// Blocking lifecycle client with the same operations as the async one.
pub struct TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	inner: flows::TokenLifecycleClient<C>,
	runtime: Runtime,
}
impl TokenLifecycleClient<ReqwestHttpClient> {
	/// Creates a blocking client backed by a reqwest transport honoring the configured timeout.
	pub fn new(config: ServiceConfig) -> Result<Self> {
		Self::from_async(flows::TokenLifecycleClient::new(config)?)
	}
}
impl<C> TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Wraps an async client, building the runtime that will drive it.
	pub fn from_async(inner: flows::TokenLifecycleClient<C>) -> Result<Self> {
		let runtime = Builder::new_current_thread()
			.enable_all()
			.build()
			.map_err(|source| ConfigError::RuntimeBuild { source })?;

		Ok(Self { inner, runtime })
	}

	/// Creates a blocking client over a caller-provided transport.
	pub fn with_http_client(config: ServiceConfig, http_client: impl Into<Arc<C>>) -> Result<Self> {
		Self::from_async(flows::TokenLifecycleClient::with_http_client(config, http_client))
	}

	/// Returns the wrapped async client.
	pub fn as_async(&self) -> &flows::TokenLifecycleClient<C> {
		&self.inner
	}

	/// Blocking [`login`](flows::TokenLifecycleClient::login).
	pub fn login(&self, request: AuthRequest) -> Result<Credential> {
		self.runtime.block_on(self.inner.login(request))
	}

	/// Blocking [`refresh`](flows::TokenLifecycleClient::refresh).
	pub fn refresh(&self, refresh_token: &str, app_key: &str) -> Result<Credential> {
		self.runtime.block_on(self.inner.refresh(refresh_token, app_key))
	}

	/// Blocking [`rotate`](flows::TokenLifecycleClient::rotate).
	pub fn rotate(&self, credential: Credential, app_key: &str) -> Result<Credential> {
		self.runtime.block_on(self.inner.rotate(credential, app_key))
	}

	/// Blocking [`revoke`](flows::TokenLifecycleClient::revoke).
	pub fn revoke(&self, app_key: &str, access_token: &str) -> Result<()> {
		self.runtime.block_on(self.inner.revoke(app_key, access_token))
	}

	/// Blocking [`logout`](flows::TokenLifecycleClient::logout).
	pub fn logout(&self, app_key: &str, credential: Credential) -> bool {
		self.runtime.block_on(self.inner.logout(app_key, credential))
	}
}
impl<C> Debug for TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("blocking::TokenLifecycleClient").field("config", &self.inner.config).finish()
	}
}
