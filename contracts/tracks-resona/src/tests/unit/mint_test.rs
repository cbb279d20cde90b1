use crate::tests::test_utils::*;
use crate::*;
use ed25519_dalek::{Signer, SigningKey};
use near_sdk::json_types::{Base64VecU8, U64};
use near_sdk::{CurveType, PublicKey, testing_env};

// --- Signed-mint helpers ---

fn signing_key() -> SigningKey {
    SigningKey::from_bytes(&[7u8; 32])
}

fn near_public_key(key: &SigningKey) -> PublicKey {
    PublicKey::from_parts(CurveType::ED25519, key.verifying_key().to_bytes().to_vec()).unwrap()
}

/// Produce the exact signature the contract verifies: sha256 over the
/// domain-separated canonical payload, signed with the artist key.
fn signed_auth(args: &MintArgs, key: &SigningKey, nonce: u64) -> MintAuth {
    let metadata_json = near_sdk::serde_json::to_value(&args.metadata).unwrap();
    let royalty_json = args
        .royalty
        .as_ref()
        .map(|r| near_sdk::serde_json::to_value(r).unwrap());
    let stream_price = args.stream_price.map(|p| p.0.to_string());

    let payload = resona_types::build_mint_payload(
        args.artist_id.as_str(),
        args.receiver_id.as_str(),
        nonce,
        &metadata_json,
        royalty_json.as_ref(),
        stream_price.as_deref(),
    );
    let message = resona_types::build_signing_message(
        resona_auth::MINT_DOMAIN_PREFIX,
        contract_account().as_str(),
        &payload,
    );
    let hash = near_sdk::env::sha256_array(&message);

    MintAuth::SignedPayload {
        public_key: near_public_key(key),
        nonce: U64(nonce),
        signature: Base64VecU8(key.sign(&hash).to_bytes().to_vec()),
    }
}

fn register_key(contract: &mut Contract, key: &SigningKey) {
    testing_env!(context_with_deposit(artist(), 1).build());
    contract.register_artist_key(near_public_key(key)).unwrap();
}

// --- Direct Mint Tests ---

#[test]
fn test_direct_mint_by_artist() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(None, None));

    assert_eq!(track_id, 1);
    let track = contract.track_info(1).unwrap();
    assert_eq!(track.owner_id, fan());
    assert_eq!(track.artist_id, artist());
    assert_eq!(track.metadata, default_metadata());
    assert_eq!(contract.track_supply(), 1);
}

#[test]
fn test_direct_mint_by_authorized_minter() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(artist(), 1).build());
    contract.authorize_minter(gateway()).unwrap();

    testing_env!(context_with_deposit(gateway(), 1).build());
    let track_id = contract
        .mint_track(mint_args(None, None), MintAuth::Direct)
        .unwrap();
    assert_eq!(track_id, 1);
}

#[test]
fn test_direct_mint_by_stranger_fails() {
    let mut contract = new_contract();

    testing_env!(context_with_deposit(fan(), 1).build());
    let err = contract
        .mint_track(mint_args(None, None), MintAuth::Direct)
        .unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

#[test]
fn test_mint_requires_one_yocto() {
    let mut contract = new_contract();

    testing_env!(context(artist()).build());
    let err = contract
        .mint_track(mint_args(None, None), MintAuth::Direct)
        .unwrap_err();
    assert!(matches!(err, PlatformError::InsufficientDeposit(_)));
}

// --- Token ID Tests ---

#[test]
fn test_track_ids_strictly_increase() {
    let mut contract = new_contract();

    for expected_id in 1..=5u64 {
        let track_id = mint_direct(&mut contract, mint_args(None, None));
        assert_eq!(track_id, expected_id);
    }
    assert_eq!(contract.track_supply(), 5);
}

// --- Metadata Immutability Tests ---

#[test]
fn test_metadata_frozen_after_mint() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), Some(50)));

    let before = contract.track_metadata(track_id).unwrap();
    let royalty_before = contract.track_info(track_id).unwrap().royalty;

    // Unrelated operations in between.
    mint_direct(&mut contract, mint_args(None, None));
    testing_env!(context_with_deposit(fan(), 1).build());
    contract
        .track_transfer(gateway(), track_id, None)
        .unwrap();

    let after = contract.track_metadata(track_id).unwrap();
    assert_eq!(before, after);
    assert_eq!(royalty_before, contract.track_info(track_id).unwrap().royalty);
}

// --- Signed Mint Tests ---

#[test]
fn test_signed_mint_happy_path() {
    let mut contract = new_contract();
    let key = signing_key();
    register_key(&mut contract, &key);

    let args = mint_args(Some(1_000), None);
    let auth = signed_auth(&args, &key, 1);

    // Anyone can submit an artist-signed payload.
    testing_env!(context_with_deposit(fan(), 1).build());
    let track_id = contract.mint_track(args, auth).unwrap();

    assert_eq!(track_id, 1);
    assert_eq!(contract.track_info(1).unwrap().artist_id, artist());
    assert_eq!(contract.mint_nonce_of(artist()), 1);
}

#[test]
fn test_signed_mint_unregistered_key_fails() {
    let mut contract = new_contract();
    let key = signing_key();

    let args = mint_args(None, None);
    testing_env!(context_with_deposit(fan(), 1).build());
    let auth = signed_auth(&args, &key, 1);
    let err = contract.mint_track(args, auth).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

#[test]
fn test_signed_mint_wrong_key_fails() {
    let mut contract = new_contract();
    let key = signing_key();
    register_key(&mut contract, &key);

    let args = mint_args(None, None);
    testing_env!(context_with_deposit(fan(), 1).build());

    // Signature from a different key than the registered one it claims.
    let other = SigningKey::from_bytes(&[9u8; 32]);
    let auth = match signed_auth(&args, &other, 1) {
        MintAuth::SignedPayload {
            nonce, signature, ..
        } => MintAuth::SignedPayload {
            public_key: near_public_key(&key),
            nonce,
            signature,
        },
        MintAuth::Direct => unreachable!(),
    };

    let err = contract.mint_track(args, auth).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

#[test]
fn test_signed_mint_tampered_payload_fails() {
    let mut contract = new_contract();
    let key = signing_key();
    register_key(&mut contract, &key);

    let args = mint_args(None, None);
    testing_env!(context_with_deposit(fan(), 1).build());
    let auth = signed_auth(&args, &key, 1);

    let mut tampered = args;
    tampered.metadata.title = "Different Title".to_string();

    let err = contract.mint_track(tampered, auth).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

#[test]
fn test_signed_mint_replay_fails() {
    let mut contract = new_contract();
    let key = signing_key();
    register_key(&mut contract, &key);

    let args = mint_args(None, None);
    testing_env!(context_with_deposit(fan(), 1).build());
    let auth = signed_auth(&args, &key, 1);

    contract.mint_track(args.clone(), auth.clone()).unwrap();
    assert_eq!(contract.mint_nonce_of(artist()), 1);

    // Re-submitting the consumed payload must be rejected.
    testing_env!(context_with_deposit(fan(), 1).build());
    let err = contract.mint_track(args, auth).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
    assert_eq!(contract.mint_nonce_of(artist()), 1);
}

#[test]
fn test_signed_mint_skipped_nonce_fails() {
    let mut contract = new_contract();
    let key = signing_key();
    register_key(&mut contract, &key);

    let args = mint_args(None, None);
    testing_env!(context_with_deposit(fan(), 1).build());
    let auth = signed_auth(&args, &key, 3);

    let err = contract.mint_track(args, auth).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
}

#[test]
fn test_signed_mint_sequential_nonces() {
    let mut contract = new_contract();
    let key = signing_key();
    register_key(&mut contract, &key);

    for nonce in 1..=3u64 {
        let args = mint_args(None, None);
        testing_env!(context_with_deposit(fan(), 1).build());
        let auth = signed_auth(&args, &key, nonce);
        contract.mint_track(args, auth).unwrap();
    }
    assert_eq!(contract.mint_nonce_of(artist()), 3);
    assert_eq!(contract.track_supply(), 3);
}

// --- Mint Validation Tests ---

#[test]
fn test_mint_empty_title_fails() {
    let mut contract = new_contract();
    let mut args = mint_args(None, None);
    args.metadata.title = String::new();

    testing_env!(context_with_deposit(artist(), 1).build());
    let err = contract.mint_track(args, MintAuth::Direct).unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn test_mint_fee_overflow_fails() {
    let mut contract = new_contract();
    // Platform fee is 500 bps; 9_600 + 500 > 10_000.
    let args = mint_args(Some(9_600), None);

    testing_env!(context_with_deposit(artist(), 1).build());
    let err = contract.mint_track(args, MintAuth::Direct).unwrap_err();
    assert!(matches!(err, PlatformError::InvalidInput(_)));
}

#[test]
fn test_mint_max_allowed_royalty() {
    let mut contract = new_contract();
    // Exactly at the boundary: 9_500 + 500 == 10_000.
    let args = mint_args(Some(9_500), None);

    testing_env!(context_with_deposit(artist(), 1).build());
    contract.mint_track(args, MintAuth::Direct).unwrap();
}
