//! Calls a data endpoint with a bearer token obtained from a password login.
//!
//! Usage: `cargo run --example bearer_request -- [RIC]` (defaults to `TRI.N`).

// crates.io
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
// self
use rdp_auth::{
	auth::AuthRequest,
	config::{ENV_APP_KEY, ServiceConfig},
	ext::RequestSignerExt,
	flows::TokenLifecycleClient,
};

const INTERDAY_SUMMARIES_PATH: &str = "data/historical-pricing/v1/views/interday-summaries/";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	color_eyre::install()?;
	dotenvy::dotenv().ok();
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let ric = std::env::args().nth(1).unwrap_or_else(|| "TRI.N".into());
	let config = ServiceConfig::from_env()?;
	let url = config.host().join(INTERDAY_SUMMARIES_PATH)?.join(&ric)?;
	let client = TokenLifecycleClient::new(config)?;
	let app_key = std::env::var(ENV_APP_KEY)?;
	let credential = client.login(AuthRequest::password_from_env()?).await?;
	let response = client.http_client.0.get(url).with_credential(&credential).send().await?;
	let status = response.status();
	let body = response.text().await?;

	println!("GET interday summaries for {ric}: {status}.");
	println!("{body}");

	client.logout(&app_key, credential).await;

	Ok(())
}
