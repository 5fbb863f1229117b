//! Auth-domain models: grant types, validated requests, credentials, and redacted secrets.

pub mod credential;
pub mod grant;
pub mod request;
pub mod secret;

pub use credential::*;
pub use grant::*;
pub use request::*;
pub use secret::*;
