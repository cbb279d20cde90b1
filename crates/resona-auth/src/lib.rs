//! On-chain auth for Resona contracts: artist signature verification and
//! per-artist mint-nonce management via NEAR host functions.

pub mod nonce;
mod verify;

pub use verify::{MINT_DOMAIN_PREFIX, MintAuthorization, verify_mint_signature};
