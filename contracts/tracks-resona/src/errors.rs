use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum PlatformError {
    Unauthorized(String),
    InvalidInput(String),
    NotFound(String),
    InvalidState(String),
    InsufficientDeposit(String),
    InternalError(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
            Self::InsufficientDeposit(msg) => write!(f, "Insufficient deposit: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl PlatformError {
    pub fn track_not_found(track_id: u64) -> Self {
        Self::NotFound(format!("Track {} not found", track_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn invalid_signature() -> Self {
        Self::Unauthorized("Invalid mint signature".into())
    }
    pub fn stale_nonce() -> Self {
        Self::Unauthorized("Mint nonce must increment the recorded value by 1".into())
    }
    pub fn fee_overflow(total_bps: u32) -> Self {
        Self::InvalidInput(format!(
            "Platform fee plus royalty is {} bps, exceeding 100%",
            total_bps
        ))
    }
    pub fn payment_mismatch(declared: u128, transferred: u128) -> Self {
        Self::InvalidInput(format!(
            "Declared amount {} does not match transferred amount {}",
            declared, transferred
        ))
    }
    pub fn unauthorized_source(source: &near_sdk::AccountId) -> Self {
        Self::Unauthorized(format!("{} is not an authorized revenue source", source))
    }
    pub fn no_pending_funds() -> Self {
        Self::InvalidState("No pending balance to withdraw".into())
    }
}
