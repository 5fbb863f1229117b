//! Access token revocation.

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::{Credential, request::require},
	flows::{TokenLifecycleClient, common},
	http::{TokenHttpClient, TokenHttpRequest},
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

impl<C> TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Revokes `access_token` on the v1 revocation endpoint.
	///
	/// The app key is sent once, as HTTP Basic credentials with an empty password. Empty
	/// arguments fail with [`Error::InvalidRequest`] before anything is sent.
	pub async fn revoke(&self, app_key: &str, access_token: &str) -> Result<()> {
		const KIND: OperationKind = OperationKind::Revoke;

		let span = OperationSpan::new(KIND, "revoke");

		obs::record_operation_outcome(KIND, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let app_key = require("app_key", app_key.to_owned())?;
				let access_token = require("access_token", access_token.to_owned())?;
				let url = self.config.revocation_endpoint()?;
				let form = Serializer::new(String::new()).append_pair("token", &access_token).finish();
				let request = TokenHttpRequest::new(url, form).with_basic_auth(app_key);

				common::post_form(self.http_client.as_ref(), request).await.map(|_| ())
			})
			.await;

		common::finish(KIND, &result);

		result
	}

	/// Best-effort revocation used during shutdown.
	///
	/// Consumes the credential and reports whether the service confirmed the revocation. Failures
	/// are logged by [`revoke`](Self::revoke) and never returned, so cleanup cannot change the
	/// outcome of the work that preceded it.
	pub async fn logout(&self, app_key: &str, credential: Credential) -> bool {
		self.revoke(app_key, credential.access_token().expose()).await.is_ok()
	}
}
