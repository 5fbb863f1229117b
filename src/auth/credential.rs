//! Bearer credentials issued by the token service and the response parser that builds them.

// crates.io
use serde::{
	Deserializer,
	de::{Error as DeError, Unexpected, Visitor},
};
// self
use crate::{_prelude::*, auth::Secret};

/// OAuth 2.0 bearer credential returned by a successful login or refresh.
///
/// A credential is always fully populated: the parser refuses bodies without an access token or
/// an `expires_in` value. The type is intentionally not `Clone`; [`rotate`] and [`logout`] take it
/// by value so a superseded or revoked credential cannot be presented again.
///
/// [`rotate`]: crate::flows::TokenLifecycleClient::rotate
/// [`logout`]: crate::flows::TokenLifecycleClient::logout
#[derive(Debug, PartialEq, Eq)]
pub struct Credential {
	access_token: Secret,
	refresh_token: Option<Secret>,
	expires_in: u64,
}
impl Credential {
	/// Creates a credential from already-issued token values.
	///
	/// An empty refresh token is treated as absent.
	pub fn new(
		access_token: impl Into<String>,
		refresh_token: Option<String>,
		expires_in: u64,
	) -> Result<Self> {
		let access_token = Secret::new(crate::auth::request::require(
			"access_token",
			access_token.into(),
		)?);
		let refresh_token = refresh_token.filter(|value| !value.is_empty()).map(Secret::new);

		Ok(Self { access_token, refresh_token, expires_in })
	}

	/// Parses the JSON body of a 200 token response.
	pub fn from_token_response(status: u16, body: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(body);
		let raw: TokenResponse = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| Error::MalformedResponse { source, status })?;

		Ok(Self {
			access_token: Secret::new(raw.access_token),
			refresh_token: raw.refresh_token.filter(|value| !value.is_empty()).map(Secret::new),
			expires_in: raw.expires_in,
		})
	}

	/// Access token presented as `Authorization: Bearer <token>`.
	pub fn access_token(&self) -> &Secret {
		&self.access_token
	}

	/// Refresh token, issued for password and refresh grants only.
	pub fn refresh_token(&self) -> Option<&Secret> {
		self.refresh_token.as_ref()
	}

	/// Seconds until the access token expires, as reported at issue time.
	pub fn expires_in(&self) -> u64 {
		self.expires_in
	}

	/// [`expires_in`](Self::expires_in) as a [`Duration`].
	pub fn lifetime(&self) -> Duration {
		Duration::from_secs(self.expires_in)
	}

	/// Splits the credential into its refresh token, consuming the access token.
	pub fn into_refresh_token(self) -> Option<Secret> {
		self.refresh_token
	}
}

#[derive(Deserialize)]
struct TokenResponse {
	#[serde(deserialize_with = "non_empty")]
	access_token: String,
	#[serde(default)]
	refresh_token: Option<String>,
	#[serde(deserialize_with = "seconds")]
	expires_in: u64,
}

fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	let value = String::deserialize(deserializer)?;

	if value.is_empty() {
		Err(D::Error::invalid_value(Unexpected::Str(""), &"a non-empty token"))
	} else {
		Ok(value)
	}
}

// The v1 service reports `expires_in` as a string ("599"), v2 as a number.
fn seconds<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
	D: Deserializer<'de>,
{
	deserializer.deserialize_any(SecondsVisitor)
}

struct SecondsVisitor;
impl Visitor<'_> for SecondsVisitor {
	type Value = u64;

	fn expecting(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("a non-negative integer or numeric string")
	}

	fn visit_u64<E>(self, v: u64) -> Result<u64, E>
	where
		E: DeError,
	{
		Ok(v)
	}

	fn visit_i64<E>(self, v: i64) -> Result<u64, E>
	where
		E: DeError,
	{
		u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
	}

	fn visit_f64<E>(self, v: f64) -> Result<u64, E>
	where
		E: DeError,
	{
		// `u64::MAX as f64` rounds up to 2^64.
		if v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 {
			Ok(v as u64)
		} else {
			Err(E::invalid_value(Unexpected::Float(v), &self))
		}
	}

	fn visit_str<E>(self, v: &str) -> Result<u64, E>
	where
		E: DeError,
	{
		v.trim().parse().map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
	}
}
