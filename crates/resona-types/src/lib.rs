//! Shared types and pure-logic utilities for the Resona protocol.
//! Zero NEAR SDK dependency — usable on-chain and off-chain (wallet tooling
//! builds the exact same signing message when producing artist signatures).

mod canonical;
mod crypto;
mod error;
mod message;

pub use canonical::canonicalize_json_value;
pub use crypto::{ed25519_public_key_bytes, ed25519_signature_bytes};
pub use error::AuthError;
pub use message::{build_mint_payload, build_signing_message};
