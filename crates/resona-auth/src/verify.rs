//! Ed25519 verification of artist mint authorizations using NEAR host functions.

use near_sdk::{AccountId, CurveType, PublicKey, env};
use resona_types::AuthError;
use serde_json::Value;

/// Domain prefix for the mint-authorization scheme, versioned so a future
/// payload change cannot validate against signatures for the old layout.
pub const MINT_DOMAIN_PREFIX: &str = "resona:mint:v1";

/// A signed mint authorization as submitted for verification.
pub struct MintAuthorization<'a> {
    pub artist_id: &'a AccountId,
    pub recipient_id: &'a AccountId,
    pub public_key: &'a PublicKey,
    pub nonce: u64,
    pub signature: &'a [u8],
    pub metadata: &'a Value,
    pub royalty: Option<&'a Value>,
    pub stream_price: Option<u128>,
}

/// Verify an ed25519 signed mint authorization.
/// Uses `env::current_account_id()` for domain separation (cross-contract
/// replay prevention).
pub fn verify_mint_signature(auth: &MintAuthorization<'_>) -> Result<(), AuthError> {
    if auth.public_key.curve_type() != CurveType::ED25519 {
        return Err(AuthError::InvalidInput(
            "Only ed25519 public keys are supported".into(),
        ));
    }
    let pk_bytes = resona_types::ed25519_public_key_bytes(auth.public_key.as_bytes())?;
    let sig_bytes = resona_types::ed25519_signature_bytes(auth.signature)?;

    let stream_price = auth.stream_price.map(|price| price.to_string());
    let payload = resona_types::build_mint_payload(
        auth.artist_id.as_str(),
        auth.recipient_id.as_str(),
        auth.nonce,
        auth.metadata,
        auth.royalty,
        stream_price.as_deref(),
    );
    let contract_id = env::current_account_id();
    let message =
        resona_types::build_signing_message(MINT_DOMAIN_PREFIX, contract_id.as_str(), &payload);

    let message_hash = env::sha256_array(&message);
    if !env::ed25519_verify(&sig_bytes, &message_hash, &pk_bytes) {
        return Err(AuthError::SignatureInvalid);
    }

    Ok(())
}
