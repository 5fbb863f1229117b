//! Attaches a [`Credential`] to outbound API requests.

// self
use crate::auth::Credential;

/// Adds `Authorization: Bearer <access_token>` to a request under construction.
///
/// Implemented for [`reqwest::RequestBuilder`] when the `reqwest` feature is enabled; other HTTP
/// stacks can implement it on their own builder types.
pub trait RequestSignerExt
where
	Self: Sized,
{
	/// Returns the request with the credential's access token attached as a bearer token.
	fn with_credential(self, credential: &Credential) -> Self;
}
#[cfg(feature = "reqwest")]
impl RequestSignerExt for reqwest::RequestBuilder {
	fn with_credential(self, credential: &Credential) -> Self {
		self.bearer_auth(credential.access_token().expose())
	}
}
