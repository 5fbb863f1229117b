//! Error types shared by the token lifecycle client, its transports, and configuration.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// A required request field is empty; raised before any network call.
	#[error("Request field `{field}` must not be empty.")]
	InvalidRequest {
		/// Name of the offending field.
		field: &'static str,
	},
	/// The token service answered with a non-200 status.
	#[error("Token service rejected the request: {status} {reason}: {body}")]
	Rejected {
		/// HTTP status code.
		status: u16,
		/// HTTP reason phrase.
		reason: String,
		/// Response body, verbatim.
		body: String,
	},
	/// The token service answered 200 but the body is not a valid credential.
	#[error("Token service returned a malformed credential (HTTP {status}).")]
	MalformedResponse {
		/// Structured parsing failure, including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
impl Error {
	/// Returns the HTTP status attached to the error, if the service answered at all.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Rejected { status, .. } | Self::MalformedResponse { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Returns `true` when the failure happened before or during transport, i.e. the token
	/// service never produced a verdict.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// The runtime driving blocking calls could not be started.
	#[error("Blocking runtime could not be started.")]
	RuntimeBuild {
		/// Underlying runtime builder failure.
		#[source]
		source: std::io::Error,
	},
	/// Service host is not a valid absolute URL.
	#[error("Service host `{host}` is not a valid URL.")]
	InvalidHost {
		/// Host value as supplied.
		host: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Service host does not use HTTPS and is not a loopback address.
	#[error("Service host must use HTTPS: {url}.")]
	InsecureHost {
		/// Host URL that failed validation.
		url: String,
	},
	/// An endpoint path could not be joined onto the host.
	#[error("Endpoint `{path}` cannot be resolved against the service host.")]
	InvalidEndpoint {
		/// Relative endpoint path.
		path: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// OAuth scope is empty.
	#[error("OAuth scope must not be empty.")]
	EmptyScope,
	/// Request timeout is zero or unparsable.
	#[error("Request timeout `{value}` is invalid; expected a positive number of seconds.")]
	InvalidTimeout {
		/// Raw timeout value.
		value: String,
	},
	/// A required environment variable is not set.
	#[error("Environment variable `{key}` is not set.")]
	MissingEnv {
		/// Variable name.
		key: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, timeout, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The request did not complete within the configured timeout.
	#[error("Request to the token service timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token service.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Wraps a transport-specific timeout error.
	pub fn timeout(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Timeout { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::timeout(e) } else { Self::network(e) }
	}
}
