//! Logs in with the password grant, rotates the refresh token once, then revokes the access token.
//!
//! Reads `MACHINE_ID`, `PASSWORD`, and `APP_KEY` (plus the optional `RDP_*` overrides) from the
//! environment or a `.env` file.

// std
use std::time::Duration;
// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use rdp_auth::{
	auth::AuthRequest,
	config::{ENV_APP_KEY, ServiceConfig},
	flows::TokenLifecycleClient,
};

const WAIT: Duration = Duration::from_secs(5);

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	color_eyre::install()?;
	dotenvy::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let config = ServiceConfig::from_env()?;
	let client = TokenLifecycleClient::new(config)?;
	let request = AuthRequest::password_from_env()?;
	let app_key = std::env::var(ENV_APP_KEY)?;
	let credential = client.login(request).await?;

	println!("Logged in; access token expires in {} seconds.", credential.expires_in());

	tokio::time::sleep(WAIT).await;

	let credential = client.rotate(credential, &app_key).await?;

	println!("Rotated; new access token expires in {} seconds.", credential.expires_in());

	tokio::time::sleep(WAIT).await;

	if client.logout(&app_key, credential).await {
		println!("Access token revoked.");
	} else {
		println!("Revocation failed; the access token stays valid until it expires.");
	}

	Ok(())
}
