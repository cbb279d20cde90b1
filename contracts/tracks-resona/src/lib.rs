//! Resona track ledger: signature-gated music-NFT minting, revenue splitting
//! into a pull-payment vault, subscriptions, and pay-per-stream purchases.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap};
use near_sdk::{AccountId, BorshStorageKey, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;
mod validation;

mod events;

mod revenue;
mod track;

mod admin;
mod artists;
mod ft_receiver;
mod streams;
mod subscription;


pub use constants::*;
pub use errors::PlatformError;
pub use revenue::types::{RevenueBreakdown, SubscriptionPlan};
pub use track::types::{MintArgs, MintAuth, RoyaltyArgs, RoyaltyPayout, Track, TrackMetadata, TrackView};

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    TracksById,
    TracksPerOwner,
    TracksPerOwnerInner { account_id_hash: Vec<u8> },
    ArtistKeys,
    ArtistMinters,
    RevenueSources,
    PendingWithdrawals,
    Subscriptions,
    StreamCredits,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub owner_id: AccountId,
    pub fee_recipient: AccountId,
    /// NEP-141 token all revenue flows are denominated in.
    pub token_id: AccountId,
    pub platform_fee_bps: u16,

    // Ledger invariant: ids are handed out by this counter and never reused.
    pub next_track_id: u64,
    pub tracks_by_id: IterableMap<u64, Track>,
    pub(crate) tracks_per_owner: LookupMap<AccountId, IterableSet<u64>>,

    pub(crate) artist_keys: LookupMap<AccountId, Vec<near_sdk::PublicKey>>,
    pub(crate) artist_minters: LookupMap<AccountId, Vec<AccountId>>,

    pub revenue_sources: IterableSet<AccountId>,

    // Vault invariant: total_pending equals the sum over pending_withdrawals
    // and the RESO reserve attributable to the vault.
    pub(crate) pending_withdrawals: LookupMap<AccountId, u128>,
    pub total_pending: u128,

    pub subscription_plan: SubscriptionPlan,
    pub(crate) subscriptions: LookupMap<AccountId, u64>,
    pub(crate) stream_credits: LookupMap<String, u64>,
}
