use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{FunctionError, env};

#[derive(Debug, PartialEq, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StakingError {
    Unauthorized,
    ZeroAmount,
    InvalidLockPeriod,
    StakeNotFound,
    AlreadyExited,
    LockNotExpired,
    RewardsPoolExhausted,
    InsufficientPenaltyPool,
    InsufficientDeposit,
}

impl FunctionError for StakingError {
    fn panic(&self) -> ! {
        env::panic_str(match self {
            StakingError::Unauthorized => "Unauthorized access",
            StakingError::ZeroAmount => "Amount must be positive",
            StakingError::InvalidLockPeriod => "No reward rate configured for this lock period",
            StakingError::StakeNotFound => "Stake not found",
            StakingError::AlreadyExited => "Stake has already been exited early",
            StakingError::LockNotExpired => "Lock period not expired",
            StakingError::RewardsPoolExhausted => "Rewards pool cannot cover the accrued reward",
            StakingError::InsufficientPenaltyPool => "Insufficient penalty pool balance",
            StakingError::InsufficientDeposit => "Requires attached deposit of exactly 1 yoctoNEAR",
        })
    }
}
