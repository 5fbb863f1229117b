//! Password, refresh, and client-credentials logins.
//!
//! All three grants share one exchange: encode the [`AuthRequest`] as a form, POST it to the
//! grant's token endpoint, and parse a [`Credential`] from a 200 answer. Refresh tokens are
//! single-use; [`TokenLifecycleClient::rotate`] consumes the old credential so the superseded
//! refresh token cannot be replayed by accident.

// self
use crate::{
	_prelude::*,
	auth::{AuthRequest, Credential},
	flows::{TokenLifecycleClient, common},
	http::{TokenHttpClient, TokenHttpRequest},
	obs::{self, OperationKind, OperationOutcome, OperationSpan},
};

impl<C> TokenLifecycleClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Exchanges any grant for a new credential.
	///
	/// `request` has already been validated by its constructor, so the only failures left are
	/// configuration, transport, a non-200 answer ([`Error::Rejected`]), or an unparsable body.
	pub async fn login(&self, request: AuthRequest) -> Result<Credential> {
		self.exchange(request, "login").await
	}

	/// Exchanges a refresh token for a new credential.
	///
	/// Empty arguments fail with [`Error::InvalidRequest`] before anything is sent. On success
	/// the returned credential replaces the old one entirely; treat `refresh_token` as spent.
	pub async fn refresh(&self, refresh_token: &str, app_key: &str) -> Result<Credential> {
		let request = AuthRequest::refresh(refresh_token, app_key)?;

		self.exchange(request, "refresh").await
	}

	/// Consumes `credential` and refreshes it with its own refresh token.
	///
	/// Credentials without a refresh token (client credentials grants) fail with
	/// [`Error::InvalidRequest`]; log in again instead.
	pub async fn rotate(&self, credential: Credential, app_key: &str) -> Result<Credential> {
		let refresh_token = credential
			.into_refresh_token()
			.ok_or(Error::InvalidRequest { field: "refresh_token" })?;
		let request = AuthRequest::refresh(refresh_token.expose(), app_key)?;

		self.exchange(request, "rotate").await
	}

	async fn exchange(&self, request: AuthRequest, stage: &'static str) -> Result<Credential> {
		let grant = request.grant_type();
		let kind = OperationKind::from(grant);
		let span = OperationSpan::new(kind, stage);

		obs::record_operation_outcome(kind, OperationOutcome::Attempt);

		let result = span
			.instrument(async move {
				let url = self.config.token_endpoint(grant)?;
				let form = request.to_form(self.config.scope());
				let response =
					common::post_form(self.http_client.as_ref(), TokenHttpRequest::new(url, form))
						.await?;

				Credential::from_token_response(response.status, &response.body)
			})
			.await;

		common::finish(kind, &result);

		result
	}
}
