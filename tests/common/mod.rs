//! Fixtures shared by the integration suites.

#![allow(dead_code)]

// std
use std::{
	collections::VecDeque,
	sync::{
		Arc,
		atomic::{AtomicUsize, Ordering},
	},
	time::Duration,
};
// crates.io
use httpmock::MockServer;
use parking_lot::Mutex;
// self
use rdp_auth::{
	config::ServiceConfig,
	flows::TokenLifecycleClient,
	http::{TokenHttpClient, TokenHttpRequest, TokenHttpResponse, TransportFuture},
};

pub const APP_KEY: &str = "app-key-123";
pub const MACHINE_ID: &str = "GE-A-00000000-1-0000";
pub const PASSWORD: &str = "p&ss=word";
pub const CLIENT_ID: &str = "svc-client";
pub const CLIENT_SECRET: &str = "svc secret";

pub const PASSWORD_TOKEN_BODY: &str =
	r#"{"access_token":"A1","refresh_token":"R1","expires_in":"599","scope":"trapi","token_type":"Bearer"}"#;
pub const CLIENT_CREDENTIALS_TOKEN_BODY: &str =
	r#"{"access_token":"C1","expires_in":600,"token_type":"Bearer"}"#;

/// Plain-HTTP loopback host of the mock server.
///
/// `base_url()` is HTTPS behind a self-signed certificate, which the verifying transport refuses.
pub fn mock_host(server: &MockServer) -> String {
	format!("http://{}", server.address())
}

/// Builds a config pointing at the mock server's plain-HTTP loopback address.
pub fn config_for(server: &MockServer) -> ServiceConfig {
	ServiceConfig::builder()
		.host(mock_host(server))
		.timeout(Duration::from_secs(5))
		.build()
		.expect("Mock server config should build.")
}

/// Builds a reqwest-backed client for the mock server.
#[cfg(feature = "reqwest")]
pub fn reqwest_client(server: &MockServer) -> TokenLifecycleClient<rdp_auth::http::ReqwestHttpClient> {
	TokenLifecycleClient::new(config_for(server)).expect("Reqwest client should build.")
}

/// Builds a config for in-process transports that never open a socket.
pub fn offline_config() -> ServiceConfig {
	ServiceConfig::builder()
		.host("https://rdp.test")
		.build()
		.expect("Offline config should build.")
}

/// In-memory transport that records every request and replays scripted responses.
#[derive(Default)]
pub struct RecordingHttpClient {
	responses: Mutex<VecDeque<TokenHttpResponse>>,
	requests: Mutex<Vec<TokenHttpRequest>>,
	calls: AtomicUsize,
}
impl RecordingHttpClient {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn with_responses(responses: impl IntoIterator<Item = (u16, &'static str)>) -> Arc<Self> {
		let client = Self::default();

		client.responses.lock().extend(responses.into_iter().map(|(status, body)| {
			TokenHttpResponse { status, reason: reason_for(status).into(), body: body.into() }
		}));

		Arc::new(client)
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn requests(&self) -> Vec<TokenHttpRequest> {
		self.requests.lock().clone()
	}
}
impl TokenHttpClient for RecordingHttpClient {
	fn execute(&self, request: TokenHttpRequest) -> TransportFuture<'_> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().push(request);

		let response = self.responses.lock().pop_front();

		Box::pin(async move {
			Ok(response.unwrap_or_else(|| TokenHttpResponse {
				status: 500,
				reason: reason_for(500).into(),
				body: "no scripted response".into(),
			}))
		})
	}
}

/// Lifecycle client over a [`RecordingHttpClient`].
pub fn recording_client(transport: &Arc<RecordingHttpClient>) -> TokenLifecycleClient<RecordingHttpClient> {
	TokenLifecycleClient::with_http_client(offline_config(), transport.clone())
}

fn reason_for(status: u16) -> &'static str {
	match status {
		200 => "OK",
		400 => "Bad Request",
		401 => "Unauthorized",
		500 => "Internal Server Error",
		_ => "Unknown Status",
	}
}
