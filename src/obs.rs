//! Optional observability helpers for lifecycle operations.
//!
//! # Feature Flags
//!
//! - `tracing` (default) emits structured spans named `rdp_auth.op` with the `op` and `stage`
//!   fields, plus debug/warn events for outcomes.
//! - `metrics` increments the `rdp_auth_operation_total` counter for every attempt/success/failure,
//!   labeled by `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::{_prelude::*, auth::GrantType};

/// Token-service operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Password grant login.
	PasswordLogin,
	/// Refresh grant login.
	Refresh,
	/// Client credentials grant login.
	ClientCredentialsLogin,
	/// Access token revocation.
	Revoke,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::PasswordLogin => "password_login",
			OperationKind::Refresh => "refresh",
			OperationKind::ClientCredentialsLogin => "client_credentials_login",
			OperationKind::Revoke => "revoke",
		}
	}
}
impl From<GrantType> for OperationKind {
	fn from(grant: GrantType) -> Self {
		match grant {
			GrantType::Password => OperationKind::PasswordLogin,
			GrantType::RefreshToken => OperationKind::Refresh,
			GrantType::ClientCredentials => OperationKind::ClientCredentialsLogin,
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to a lifecycle operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn grant_types_map_to_operations() {
		assert_eq!(OperationKind::from(GrantType::Password), OperationKind::PasswordLogin);
		assert_eq!(OperationKind::from(GrantType::RefreshToken).as_str(), "refresh");
		assert_eq!(
			OperationKind::from(GrantType::ClientCredentials).to_string(),
			"client_credentials_login"
		);
	}
}
