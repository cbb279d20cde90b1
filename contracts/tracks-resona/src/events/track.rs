use near_sdk::{AccountId, PublicKey};

use super::TRACK;
use super::builder::EventBuilder;

pub fn emit_track_mint(
    artist_id: &AccountId,
    owner_id: &AccountId,
    track_id: u64,
    auth_type: &str,
) {
    EventBuilder::new(TRACK, "mint", artist_id)
        .field("owner_id", owner_id)
        .field("track_id", track_id)
        .field("auth", auth_type)
        .emit();
}

pub fn emit_track_transfer(
    old_owner_id: &AccountId,
    new_owner_id: &AccountId,
    track_id: u64,
    memo: Option<&str>,
) {
    EventBuilder::new(TRACK, "transfer", old_owner_id)
        .field("new_owner_id", new_owner_id)
        .field("track_id", track_id)
        .field_opt("memo", memo)
        .emit();
}

pub fn emit_artist_key_added(artist_id: &AccountId, public_key: &PublicKey) {
    EventBuilder::new(TRACK, "artist_key_added", artist_id)
        .field("public_key", String::from(public_key))
        .emit();
}

pub fn emit_artist_key_removed(artist_id: &AccountId, public_key: &PublicKey) {
    EventBuilder::new(TRACK, "artist_key_removed", artist_id)
        .field("public_key", String::from(public_key))
        .emit();
}

pub fn emit_minter_authorized(artist_id: &AccountId, minter_id: &AccountId) {
    EventBuilder::new(TRACK, "minter_authorized", artist_id)
        .field("minter_id", minter_id)
        .emit();
}

pub fn emit_minter_revoked(artist_id: &AccountId, minter_id: &AccountId) {
    EventBuilder::new(TRACK, "minter_revoked", artist_id)
        .field("minter_id", minter_id)
        .emit();
}
