//! Grant types and the token-service paths they are issued on.

// self
use crate::_prelude::*;

/// OAuth 2.0 grant types understood by the token service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GrantType {
	/// Resource-owner password grant (machine ID + password + app key).
	Password,
	/// Refresh token grant for rotating password-grant sessions.
	RefreshToken,
	/// Client credentials grant for service IDs.
	ClientCredentials,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub const fn as_str(self) -> &'static str {
		match self {
			GrantType::Password => "password",
			GrantType::RefreshToken => "refresh_token",
			GrantType::ClientCredentials => "client_credentials",
		}
	}

	/// Token endpoint path for the grant, relative to the service host.
	///
	/// Password and refresh grants live on the v1 authentication service; client credentials
	/// are only issued by v2.
	pub const fn token_path(self) -> &'static str {
		match self {
			GrantType::Password | GrantType::RefreshToken => "auth/oauth2/v1/token",
			GrantType::ClientCredentials => "auth/oauth2/v2/token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Revocation endpoint path, relative to the service host.
pub const REVOKE_PATH: &str = "auth/oauth2/v1/revoke";

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn grants_map_to_versioned_paths() {
		assert_eq!(GrantType::Password.token_path(), "auth/oauth2/v1/token");
		assert_eq!(GrantType::RefreshToken.token_path(), "auth/oauth2/v1/token");
		assert_eq!(GrantType::ClientCredentials.token_path(), "auth/oauth2/v2/token");
		assert_eq!(GrantType::RefreshToken.to_string(), "refresh_token");
	}
}
