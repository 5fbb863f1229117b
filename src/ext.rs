//! Extension traits for consumers of issued credentials.

pub mod request_signer;

pub use request_signer::*;
