use near_sdk::json_types::{Base64VecU8, U64, U128};
use near_sdk::{AccountId, PublicKey, near};

/// On-chain track metadata. `media` points at the audio object, `reference`
/// at the off-chain metadata document. All fields are frozen at mint.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TrackMetadata {
    pub title: String,
    pub media: String,
    pub media_hash: Option<Base64VecU8>,
    pub duration_sec: Option<u32>,
    pub genre: Option<String>,
    pub reference: String,
    pub extra: Option<String>,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RoyaltyArgs {
    pub recipient: AccountId,
    pub bps: u16,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct Track {
    pub owner_id: AccountId,
    pub artist_id: AccountId,
    pub metadata: TrackMetadata,
    pub royalty: Option<RoyaltyArgs>,
    pub stream_price: Option<U128>,
    pub minted_at: u64,
}

#[near(serializers = [json])]
#[derive(Clone)]
pub struct MintArgs {
    pub artist_id: AccountId,
    pub receiver_id: AccountId,
    pub metadata: TrackMetadata,
    #[serde(default)]
    pub royalty: Option<RoyaltyArgs>,
    #[serde(default)]
    pub stream_price: Option<U128>,
}

/// Mint authorization scheme.
///
/// - `Direct` — the artist (or an account the artist authorized) submits the
///   transaction itself; identity comes from the predecessor.
/// - `SignedPayload` — anyone submits an off-chain artist-signed payload;
///   identity comes from a registered artist key.
#[near(serializers = [json])]
#[serde(tag = "type", rename_all = "snake_case")]
#[derive(Clone)]
pub enum MintAuth {
    Direct,
    SignedPayload {
        public_key: PublicKey,
        nonce: U64,
        signature: Base64VecU8,
    },
}

#[near(serializers = [json])]
pub struct TrackView {
    pub track_id: u64,
    pub owner_id: AccountId,
    pub artist_id: AccountId,
    pub metadata: TrackMetadata,
    pub royalty: Option<RoyaltyArgs>,
    pub stream_price: Option<U128>,
    pub minted_at: u64,
}

#[near(serializers = [json])]
#[derive(Debug, PartialEq)]
pub struct RoyaltyPayout {
    pub recipient: Option<AccountId>,
    pub amount: U128,
}
