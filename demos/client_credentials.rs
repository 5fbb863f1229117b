//! Logs in twice with the client credentials grant.
//!
//! The v2 service issues no refresh token and has no revocation, so renewal is another login.
//! Reads `CLIENT_ID` and `CLIENT_SECRET` from the environment or a `.env` file.

// std
use std::time::Duration;
// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use rdp_auth::{auth::AuthRequest, config::ServiceConfig, flows::TokenLifecycleClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	color_eyre::install()?;
	dotenvy::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let client = TokenLifecycleClient::new(ServiceConfig::from_env()?)?;
	let first = client.login(AuthRequest::client_credentials_from_env()?).await?;

	println!("Service token expires in {} seconds.", first.expires_in());

	tokio::time::sleep(Duration::from_secs(5)).await;

	let second = client.login(AuthRequest::client_credentials_from_env()?).await?;

	println!("Renewed service token expires in {} seconds.", second.expires_in());

	Ok(())
}
