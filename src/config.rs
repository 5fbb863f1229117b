//! Service configuration: token-service host, OAuth scope, and request timeout.
//!
//! [`ServiceConfig`] can be assembled in code through [`ServiceConfigBuilder`] or loaded from
//! `RDP_HOST`, `RDP_SCOPE`, and `RDP_TIMEOUT_SECS`. Credentials are read separately by the
//! [`AuthRequest`](crate::auth::AuthRequest) lookup constructors so secrets never live on the
//! shared configuration value.

// std
use std::net::IpAddr;
// self
use crate::{
	_prelude::*,
	auth::{GrantType, REVOKE_PATH},
	error::ConfigError,
};

/// Production host for the RDP authentication service.
pub const DEFAULT_HOST: &str = "https://api.refinitiv.com";
/// Scope requested by password and client credentials grants.
pub const DEFAULT_SCOPE: &str = "trapi";
/// Per-request timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Variable holding the service host.
pub const ENV_HOST: &str = "RDP_HOST";
/// Variable holding the OAuth scope.
pub const ENV_SCOPE: &str = "RDP_SCOPE";
/// Variable holding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "RDP_TIMEOUT_SECS";
/// Variable holding the machine ID for password grants.
pub const ENV_MACHINE_ID: &str = "MACHINE_ID";
/// Variable holding the password for password grants.
pub const ENV_PASSWORD: &str = "PASSWORD";
/// Variable holding the application key.
pub const ENV_APP_KEY: &str = "APP_KEY";
/// Variable holding the v2 service ID.
pub const ENV_CLIENT_ID: &str = "CLIENT_ID";
/// Variable holding the v2 client secret.
pub const ENV_CLIENT_SECRET: &str = "CLIENT_SECRET";

/// Immutable token-service configuration shared by every lifecycle call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
	host: Url,
	scope: String,
	timeout: Duration,
}
impl ServiceConfig {
	/// Returns a builder seeded with the production defaults.
	pub fn builder() -> ServiceConfigBuilder {
		ServiceConfigBuilder::default()
	}

	/// Loads configuration from the process environment, falling back to defaults for unset
	/// variables.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(env_lookup)
	}

	/// Loads configuration from an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut builder = Self::builder();

		if let Some(host) = lookup(ENV_HOST) {
			builder = builder.host(host);
		}
		if let Some(scope) = lookup(ENV_SCOPE) {
			builder = builder.scope(scope);
		}
		if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
			let secs = raw
				.trim()
				.parse::<u64>()
				.map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;

			builder = builder.timeout(Duration::from_secs(secs));
		}

		builder.build()
	}

	/// Service host every endpoint is resolved against.
	pub fn host(&self) -> &Url {
		&self.host
	}

	/// OAuth scope sent with password and client credentials grants.
	pub fn scope(&self) -> &str {
		&self.scope
	}

	/// Per-request timeout.
	pub fn timeout(&self) -> Duration {
		self.timeout
	}

	/// Token endpoint for a grant (`v1` for password/refresh, `v2` for client credentials).
	pub fn token_endpoint(&self, grant: GrantType) -> Result<Url> {
		self.endpoint(grant.token_path())
	}

	/// Revocation endpoint (`v1` only).
	pub fn revocation_endpoint(&self) -> Result<Url> {
		self.endpoint(REVOKE_PATH)
	}

	fn endpoint(&self, path: &'static str) -> Result<Url> {
		self.host
			.join(path)
			.map_err(|source| ConfigError::InvalidEndpoint { path, source }.into())
	}
}

/// Builder for [`ServiceConfig`] values.
#[derive(Clone, Debug)]
pub struct ServiceConfigBuilder {
	host: String,
	scope: String,
	timeout: Duration,
}
impl ServiceConfigBuilder {
	/// Overrides the service host (scheme + authority, optionally a path prefix).
	pub fn host(mut self, host: impl Into<String>) -> Self {
		self.host = host.into();

		self
	}

	/// Overrides the OAuth scope.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = scope.into();

		self
	}

	/// Overrides the per-request timeout.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ServiceConfig> {
		let raw = self.host.trim();
		// `Url::join` replaces the last path segment unless the base ends with a slash.
		let normalized = if raw.ends_with('/') { raw.to_owned() } else { format!("{raw}/") };
		let host = Url::parse(&normalized)
			.map_err(|source| ConfigError::InvalidHost { host: self.host.clone(), source })?;

		validate_host(&host)?;

		if self.scope.trim().is_empty() {
			return Err(ConfigError::EmptyScope.into());
		}
		if self.timeout.is_zero() {
			return Err(ConfigError::InvalidTimeout { value: "0".into() }.into());
		}

		Ok(ServiceConfig { host, scope: self.scope, timeout: self.timeout })
	}
}
impl Default for ServiceConfigBuilder {
	fn default() -> Self {
		Self { host: DEFAULT_HOST.into(), scope: DEFAULT_SCOPE.into(), timeout: DEFAULT_TIMEOUT }
	}
}

/// Reads a variable from the process environment, treating non-UTF-8 values as unset.
pub(crate) fn env_lookup(key: &str) -> Option<String> {
	std::env::var(key).ok()
}

/// Resolves a variable that must be present (it may still be empty; request constructors decide).
pub(crate) fn lookup_required<F>(lookup: &F, key: &'static str) -> Result<String>
where
	F: Fn(&str) -> Option<String>,
{
	lookup(key).ok_or_else(|| ConfigError::MissingEnv { key }.into())
}

fn validate_host(url: &Url) -> Result<(), ConfigError> {
	if url.scheme() == "https" || is_loopback(url) {
		Ok(())
	} else {
		Err(ConfigError::InsecureHost { url: url.to_string() })
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(url::Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(url::Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::collections::HashMap;
	// self
	use super::*;

	#[test]
	fn defaults_point_at_production_endpoints() {
		let config = ServiceConfig::builder().build().expect("Defaults should validate.");

		assert_eq!(config.scope(), "trapi");
		assert_eq!(config.timeout(), Duration::from_secs(30));
		assert_eq!(
			config.token_endpoint(GrantType::Password).expect("Endpoint should resolve.").as_str(),
			"https://api.refinitiv.com/auth/oauth2/v1/token"
		);
		assert_eq!(
			config
				.token_endpoint(GrantType::ClientCredentials)
				.expect("Endpoint should resolve.")
				.as_str(),
			"https://api.refinitiv.com/auth/oauth2/v2/token"
		);
		assert_eq!(
			config.revocation_endpoint().expect("Endpoint should resolve.").as_str(),
			"https://api.refinitiv.com/auth/oauth2/v1/revoke"
		);
	}

	#[test]
	fn builder_keeps_path_prefix() {
		let config = ServiceConfig::builder()
			.host("https://gateway.example.com/rdp")
			.build()
			.expect("Prefixed host should be accepted.");

		assert_eq!(
			config.token_endpoint(GrantType::RefreshToken).expect("Endpoint should resolve.").as_str(),
			"https://gateway.example.com/rdp/auth/oauth2/v1/token"
		);
	}

	#[test]
	fn builder_rejects_insecure_hosts_except_loopback() {
		let err = ServiceConfig::builder()
			.host("http://api.example.com")
			.build()
			.expect_err("Plain HTTP hosts should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InsecureHost { .. })));

		ServiceConfig::builder()
			.host("http://127.0.0.1:8080")
			.build()
			.expect("Loopback hosts should be accepted for local mocks.");
		ServiceConfig::builder()
			.host("http://localhost:8080")
			.build()
			.expect("Localhost should be accepted for local mocks.");
	}

	#[test]
	fn builder_rejects_bad_values() {
		assert!(matches!(
			ServiceConfig::builder().host("not a url").build(),
			Err(Error::Config(ConfigError::InvalidHost { .. }))
		));
		assert!(matches!(
			ServiceConfig::builder().scope(" ").build(),
			Err(Error::Config(ConfigError::EmptyScope))
		));
		assert!(matches!(
			ServiceConfig::builder().timeout(Duration::ZERO).build(),
			Err(Error::Config(ConfigError::InvalidTimeout { .. }))
		));
	}

	#[test]
	fn lookup_overrides_defaults() {
		let vars = HashMap::from([
			(ENV_HOST, "http://127.0.0.1:9999"),
			(ENV_SCOPE, "trapi.data"),
			(ENV_TIMEOUT_SECS, "5"),
		]);
		let config = ServiceConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
			.expect("Lookup-driven configuration should build.");

		assert_eq!(config.host().as_str(), "http://127.0.0.1:9999/");
		assert_eq!(config.scope(), "trapi.data");
		assert_eq!(config.timeout(), Duration::from_secs(5));

		let err = ServiceConfig::from_lookup(|key| {
			(key == ENV_TIMEOUT_SECS).then(|| "soon".to_owned())
		})
		.expect_err("Non-numeric timeouts should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidTimeout { .. })));
	}
}
