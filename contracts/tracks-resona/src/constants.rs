use near_sdk::{Gas, NearToken};

pub const BASIS_POINTS: u16 = 10_000; // 100%

pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 500;
pub const MAX_PLATFORM_FEE_BPS: u16 = 2_000; // 20%

pub const MAX_METADATA_LEN: usize = 16_384;
pub const MAX_TITLE_LEN: usize = 256;
pub const MAX_URI_LEN: usize = 2_048;

pub const MAX_ARTIST_KEYS: usize = 10;
pub const MAX_ARTIST_MINTERS: usize = 10;
pub const MAX_REVENUE_SOURCES: u32 = 50;

// Nonce storage isolation: single byte prefixes every per-artist nonce key.
pub const MINT_NONCE_PREFIX: u8 = b'n';

pub const DEFAULT_SUBSCRIPTION_PERIOD_NS: u64 = 30 * 24 * 60 * 60 * 1_000_000_000;

// Key delimiter invariant: ':' cannot appear in NEAR account IDs, preventing
// (account, track) stream-credit key collisions.
pub const STREAM_KEY_DELIMITER: &str = ":";

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);
pub const GAS_FOR_FT_TRANSFER: Gas = Gas::from_tgas(15);
pub const GAS_FOR_CALLBACK: Gas = Gas::from_tgas(10);
pub const GAS_MIGRATE_TGAS: u64 = 200;
