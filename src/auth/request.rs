//! Validated token requests and their form encodings.

// crates.io
use url::form_urlencoded::Serializer;
// self
use crate::{
	_prelude::*,
	auth::{GrantType, Secret},
	config,
};

/// Parameters needed to obtain a credential from the token service.
///
/// Each variant wraps a grant struct whose fields are private, so every value of this type has
/// passed the non-empty checks in its constructor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
	/// Password grant (v1).
	Password(PasswordGrant),
	/// Refresh token grant (v1).
	Refresh(RefreshGrant),
	/// Client credentials grant (v2).
	ClientCredentials(ClientCredentialsGrant),
}
impl AuthRequest {
	/// Builds a password grant request.
	pub fn password(
		username: impl Into<String>,
		password: impl Into<String>,
		app_key: impl Into<String>,
	) -> Result<Self> {
		Ok(Self::Password(PasswordGrant {
			username: require("username", username.into())?,
			password: Secret::new(require("password", password.into())?),
			app_key: require("app_key", app_key.into())?,
		}))
	}

	/// Builds a refresh grant request.
	pub fn refresh(refresh_token: impl Into<String>, app_key: impl Into<String>) -> Result<Self> {
		Ok(Self::Refresh(RefreshGrant {
			refresh_token: Secret::new(require("refresh_token", refresh_token.into())?),
			app_key: require("app_key", app_key.into())?,
		}))
	}

	/// Builds a client credentials grant request.
	pub fn client_credentials(
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Result<Self> {
		Ok(Self::ClientCredentials(ClientCredentialsGrant {
			client_id: require("client_id", client_id.into())?,
			client_secret: Secret::new(require("client_secret", client_secret.into())?),
		}))
	}

	/// Reads `MACHINE_ID`, `PASSWORD`, and `APP_KEY` from the process environment.
	pub fn password_from_env() -> Result<Self> {
		Self::password_from_lookup(config::env_lookup)
	}

	/// Builds a password grant from an arbitrary variable lookup.
	pub fn password_from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		Self::password(
			config::lookup_required(&lookup, config::ENV_MACHINE_ID)?,
			config::lookup_required(&lookup, config::ENV_PASSWORD)?,
			config::lookup_required(&lookup, config::ENV_APP_KEY)?,
		)
	}

	/// Reads `CLIENT_ID` and `CLIENT_SECRET` from the process environment.
	pub fn client_credentials_from_env() -> Result<Self> {
		Self::client_credentials_from_lookup(config::env_lookup)
	}

	/// Builds a client credentials grant from an arbitrary variable lookup.
	pub fn client_credentials_from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		Self::client_credentials(
			config::lookup_required(&lookup, config::ENV_CLIENT_ID)?,
			config::lookup_required(&lookup, config::ENV_CLIENT_SECRET)?,
		)
	}

	/// Grant type carried by the request.
	pub fn grant_type(&self) -> GrantType {
		match self {
			Self::Password(_) => GrantType::Password,
			Self::Refresh(_) => GrantType::RefreshToken,
			Self::ClientCredentials(_) => GrantType::ClientCredentials,
		}
	}

	/// Encodes the request as an `application/x-www-form-urlencoded` body.
	///
	/// Field order follows what the token service documents for each grant.
	pub fn to_form(&self, scope: &str) -> String {
		let mut form = Serializer::new(String::new());
		let grant = self.grant_type().as_str();

		match self {
			Self::Password(p) => {
				form.append_pair("username", &p.username)
					.append_pair("password", p.password.expose())
					.append_pair("grant_type", grant)
					.append_pair("scope", scope)
					.append_pair("takeExclusiveSignOnControl", "true")
					.append_pair("client_id", &p.app_key);
			},
			Self::Refresh(r) => {
				form.append_pair("grant_type", grant)
					.append_pair("client_id", &r.app_key)
					.append_pair("refresh_token", r.refresh_token.expose());
			},
			Self::ClientCredentials(c) => {
				form.append_pair("client_id", &c.client_id)
					.append_pair("client_secret", c.client_secret.expose())
					.append_pair("grant_type", grant)
					.append_pair("scope", scope);
			},
		}

		form.finish()
	}
}

/// Password grant parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordGrant {
	username: String,
	password: Secret,
	app_key: String,
}
impl PasswordGrant {
	/// Machine ID or user name.
	pub fn username(&self) -> &str {
		&self.username
	}

	/// Application key, sent as `client_id`.
	pub fn app_key(&self) -> &str {
		&self.app_key
	}
}

/// Refresh grant parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshGrant {
	refresh_token: Secret,
	app_key: String,
}
impl RefreshGrant {
	/// Application key, sent as `client_id`.
	pub fn app_key(&self) -> &str {
		&self.app_key
	}
}

/// Client credentials grant parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientCredentialsGrant {
	client_id: String,
	client_secret: Secret,
}
impl ClientCredentialsGrant {
	/// Service ID issued for the v2 authentication service.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}
}

/// Rejects empty values with [`Error::InvalidRequest`].
pub(crate) fn require(field: &'static str, value: String) -> Result<String> {
	if value.is_empty() { Err(Error::InvalidRequest { field }) } else { Ok(value) }
}
