//! Per-artist mint-nonce management via NEAR storage.
//! Each contract chooses a unique `prefix` byte to avoid key collisions.
//! The counter must advance by exactly one per successful mint, so a signed
//! payload authorizes exactly one token.

use near_sdk::{AccountId, env};
use resona_types::AuthError;

/// Key format: `prefix | artist_account_bytes`.
#[inline]
pub fn nonce_storage_key(prefix: u8, artist: &AccountId) -> Vec<u8> {
    let artist_bytes = artist.as_bytes();
    let mut key = Vec::with_capacity(1 + artist_bytes.len());
    key.push(prefix);
    key.extend_from_slice(artist_bytes);
    key
}

/// Read the last consumed nonce, or 0 if the artist has never minted.
#[inline]
pub fn read_nonce(prefix: u8, artist: &AccountId) -> u64 {
    let key = nonce_storage_key(prefix, artist);
    env::storage_read(&key)
        .and_then(|bytes| bytes.try_into().ok().map(u64::from_le_bytes))
        .unwrap_or(0)
}

/// Returns `NonceStale` unless `nonce` is exactly `last + 1`.
/// Lower nonces are replays of consumed payloads; higher nonces would let a
/// later authorization burn the ones signed before it.
pub fn assert_next_nonce(prefix: u8, artist: &AccountId, nonce: u64) -> Result<(), AuthError> {
    let last = read_nonce(prefix, artist);
    if nonce != last.wrapping_add(1) {
        return Err(AuthError::NonceStale);
    }
    Ok(())
}

/// Persist `nonce` as the artist's last consumed value.
#[inline]
pub fn record_nonce(prefix: u8, artist: &AccountId, nonce: u64) {
    let key = nonce_storage_key(prefix, artist);
    env::storage_write(&key, &nonce.to_le_bytes());
}
