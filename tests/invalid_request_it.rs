mod common;

// self
use common::*;
use rdp_auth::{auth::AuthRequest, error::Error};

fn assert_invalid<T>(result: Result<T, Error>, expected: &'static str)
where
	T: std::fmt::Debug,
{
	match result {
		Err(Error::InvalidRequest { field }) => assert_eq!(field, expected),
		other => panic!("Expected InvalidRequest for `{expected}`, got {other:?}."),
	}
}

#[tokio::test]
async fn empty_inputs_never_reach_the_transport() {
	let transport = RecordingHttpClient::new();
	let client = recording_client(&transport);

	assert_invalid(client.refresh("", APP_KEY).await, "refresh_token");
	assert_invalid(client.refresh("R1", "").await, "app_key");
	assert_invalid(client.revoke("", "A1").await, "app_key");
	assert_invalid(client.revoke(APP_KEY, "").await, "access_token");
	assert_invalid(AuthRequest::password("", PASSWORD, APP_KEY), "username");
	assert_invalid(AuthRequest::password(MACHINE_ID, "", APP_KEY), "password");
	assert_invalid(AuthRequest::client_credentials(CLIENT_ID, ""), "client_secret");

	assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn logout_with_empty_app_key_is_false_and_silent() {
	let transport = RecordingHttpClient::new();
	let client = recording_client(&transport);
	let credential =
		rdp_auth::auth::Credential::new("A1", None, 60).expect("Fixture credential should build.");

	assert!(!client.logout("", credential).await);
	assert_eq!(transport.calls(), 0);
}
