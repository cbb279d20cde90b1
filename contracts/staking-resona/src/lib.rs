//! Time-locked staking escrow for the RESO token: per-position stable IDs,
//! fixed-rate linear reward accrual, and a 10% early-exit penalty.

use near_sdk::{
    AccountId, BorshStorageKey, Gas, NearToken, Promise, env, json_types::U128, near, require,
    serde_json, store::LookupMap,
};
use primitive_types::U256;

mod errors;
pub use errors::StakingError;


const DAY_NS: u64 = 24 * 60 * 60 * 1_000_000_000;
const NS_PER_SEC: u64 = 1_000_000_000;
const GAS_FOR_FT_TRANSFER: Gas = Gas::from_tgas(15);
const GAS_FOR_CALLBACK: Gas = Gas::from_tgas(10);
const PRECISION: u128 = 1_000_000_000_000_000_000; // 10^18

const BASIS_POINTS: u128 = 10_000;
const EARLY_EXIT_PENALTY_BPS: u128 = 1_000; // 10%

const EVENT_STANDARD: &str = "resona";
const EVENT_VERSION: &str = "1.0.0";
const EVENT_JSON_PREFIX: &str = "EVENT_JSON:";

const EVENT_STAKE_OPEN: &str = "STAKE_OPEN";
const EVENT_STAKE_EARLY_EXIT: &str = "STAKE_EARLY_EXIT";
const EVENT_STAKE_WITHDRAW: &str = "STAKE_WITHDRAW";
const EVENT_STAKE_WITHDRAW_FAILED: &str = "STAKE_WITHDRAW_FAILED";
const EVENT_REWARDS_FUND: &str = "REWARDS_FUND";
const EVENT_PENALTIES_SWEEP: &str = "PENALTIES_SWEEP";
const EVENT_PENALTIES_SWEEP_FAILED: &str = "PENALTIES_SWEEP_FAILED";
const EVENT_RATE_UPDATED: &str = "RATE_UPDATED";
const EVENT_OWNER_CHANGED: &str = "OWNER_CHANGED";
const EVENT_CONTRACT_UPGRADE: &str = "CONTRACT_UPGRADE";

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    Positions,
    RewardRates,
}

#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub enum StakeStatus {
    Active,
    EarlyExited,
}

/// One locked deposit. `id` is a permanent handle: positions are addressed
/// and removed by it, so no other withdrawal can invalidate a handle.
#[near(serializers = [json, borsh])]
#[derive(Clone)]
pub struct StakePosition {
    pub id: u64,
    pub amount: U128,
    /// Lock duration in nanoseconds.
    pub lock_period: u64,
    pub staked_at: u64,
    /// Reward per staked token per second, scaled by 10^18.
    pub reward_rate: U128,
    pub status: StakeStatus,
    pub exited_at: Option<u64>,
    pub penalty: U128,
}

#[near(contract_state)]
pub struct ResonaStaking {
    token_id: AccountId,
    owner_id: AccountId,
    positions: LookupMap<AccountId, Vec<StakePosition>>,
    /// Reward rate per configured lock period (in days).
    reward_rates: LookupMap<u64, u128>,
    next_stake_id: u64,
    total_staked: u128,
    rewards_pool: u128,
    penalty_pool: u128,
}

impl Default for ResonaStaking {
    fn default() -> Self {
        env::panic_str("Contract must be initialized")
    }
}

#[near]
impl ResonaStaking {
    #[init]
    pub fn new(token_id: AccountId, owner_id: AccountId) -> Self {
        Self {
            token_id,
            owner_id,
            positions: LookupMap::new(StorageKey::Positions),
            reward_rates: LookupMap::new(StorageKey::RewardRates),
            next_stake_id: 1,
            total_staked: 0,
            rewards_pool: 0,
            penalty_pool: 0,
        }
    }

    // --- FT Receiver ---

    /// Handles: `{"action":"stake","lock_days":D}`, `{"action":"rewards"}`
    /// (owner only).
    pub fn ft_on_transfer(&mut self, sender_id: AccountId, amount: U128, msg: String) -> U128 {
        require!(
            env::predecessor_account_id() == self.token_id,
            "Only accepts the RESO token"
        );

        let amount = amount.0;
        require!(amount > 0, "Amount must be positive");

        let parsed: serde_json::Value =
            serde_json::from_str(&msg).unwrap_or_else(|_| env::panic_str("Invalid JSON message"));

        let action = parsed["action"]
            .as_str()
            .unwrap_or_else(|| env::panic_str("Missing action field"));

        match action {
            "stake" => {
                let lock_days = parsed["lock_days"]
                    .as_u64()
                    .unwrap_or_else(|| env::panic_str("Missing lock_days field"));
                self.internal_stake(sender_id, amount, lock_days);
            }
            "rewards" => {
                require!(sender_id == self.owner_id, "Only owner can fund rewards");
                self.rewards_pool += amount;
                Self::emit_event(
                    EVENT_REWARDS_FUND,
                    &sender_id,
                    serde_json::json!({
                        "amount": amount.to_string(),
                        "rewards_pool": self.rewards_pool.to_string()
                    }),
                );
            }
            _ => env::panic_str("Unknown action"),
        }

        U128(0)
    }

    // --- User ---

    /// Mark a stake as exited early. Locks in a 10% principal penalty and
    /// stops reward accrual; the deposit stays locked until the original
    /// lock period elapses.
    #[handle_result]
    pub fn stop_early(&mut self, stake_id: u64) -> Result<(), StakingError> {
        let account_id = env::predecessor_account_id();
        let mut positions = self
            .positions
            .get(&account_id)
            .cloned()
            .ok_or(StakingError::StakeNotFound)?;

        let position = positions
            .iter_mut()
            .find(|p| p.id == stake_id)
            .ok_or(StakingError::StakeNotFound)?;
        if position.status != StakeStatus::Active {
            return Err(StakingError::AlreadyExited);
        }

        let penalty = position.amount.0 * EARLY_EXIT_PENALTY_BPS / BASIS_POINTS;
        position.status = StakeStatus::EarlyExited;
        position.exited_at = Some(env::block_timestamp());
        position.penalty = U128(penalty);
        self.positions.insert(account_id.clone(), positions);

        Self::emit_event(
            EVENT_STAKE_EARLY_EXIT,
            &account_id,
            serde_json::json!({
                "stake_id": stake_id,
                "penalty": penalty.to_string()
            }),
        );
        Ok(())
    }

    /// Withdraw a stake after its lock period elapsed. Pays principal minus
    /// any early-exit penalty plus the accrued reward. The position is
    /// removed before the transfer and restored by the callback on failure.
    #[handle_result]
    pub fn withdraw_stake(&mut self, stake_id: u64) -> Result<Promise, StakingError> {
        let account_id = env::predecessor_account_id();
        let now = env::block_timestamp();

        let mut positions = self
            .positions
            .get(&account_id)
            .cloned()
            .ok_or(StakingError::StakeNotFound)?;
        let index = positions
            .iter()
            .position(|p| p.id == stake_id)
            .ok_or(StakingError::StakeNotFound)?;

        // Time gate applies to active and early-exited stakes alike: early
        // exit forfeits principal, it does not shorten the wait.
        let position = &positions[index];
        if now < position.staked_at + position.lock_period {
            return Err(StakingError::LockNotExpired);
        }

        let reward = Self::calculate_reward(position, now);
        if reward > self.rewards_pool {
            return Err(StakingError::RewardsPoolExhausted);
        }

        let position = positions.remove(index);
        if positions.is_empty() {
            self.positions.remove(&account_id);
        } else {
            self.positions.insert(account_id.clone(), positions);
        }

        self.total_staked -= position.amount.0;
        self.rewards_pool -= reward;
        self.penalty_pool += position.penalty.0;

        let payout = position.amount.0 - position.penalty.0 + reward;

        Ok(self.ft_transfer_with_callback(
            account_id.clone(),
            payout,
            "on_withdraw_stake".to_string(),
            serde_json::json!({
                "account_id": account_id,
                "position": position,
                "payout": U128(payout),
                "reward": U128(reward)
            })
            .to_string(),
        ))
    }

    #[private]
    pub fn on_withdraw_stake(
        &mut self,
        account_id: AccountId,
        position: StakePosition,
        payout: U128,
        reward: U128,
    ) {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 0).is_ok() {
            Self::emit_event(
                EVENT_STAKE_WITHDRAW,
                &account_id,
                serde_json::json!({
                    "stake_id": position.id,
                    "payout": payout.0.to_string(),
                    "reward": reward.0.to_string(),
                    "penalty": position.penalty.0.to_string()
                }),
            );
            return;
        }

        // Transfer failed: put the position and pool accounting back.
        let stake_id = position.id;
        self.total_staked += position.amount.0;
        self.rewards_pool += reward.0;
        self.penalty_pool -= position.penalty.0;
        let mut positions = self.positions.get(&account_id).cloned().unwrap_or_default();
        positions.push(position);
        self.positions.insert(account_id.clone(), positions);

        Self::emit_event(
            EVENT_STAKE_WITHDRAW_FAILED,
            &account_id,
            serde_json::json!({
                "stake_id": stake_id,
                "payout": payout.0.to_string()
            }),
        );
    }

    // --- Owner ---

    /// Configure (or update) the reward rate for a lock period in days.
    /// `rate` is reward per staked token per second, scaled by 10^18.
    #[handle_result]
    pub fn set_reward_rate(&mut self, lock_days: u64, rate: U128) -> Result<(), StakingError> {
        self.check_owner()?;
        require!(lock_days > 0, "Lock period must be positive");
        self.reward_rates.insert(lock_days, rate.0);

        Self::emit_event(
            EVENT_RATE_UPDATED,
            &self.owner_id.clone(),
            serde_json::json!({
                "lock_days": lock_days,
                "rate": rate.0.to_string()
            }),
        );
        Ok(())
    }

    #[handle_result]
    pub fn remove_reward_rate(&mut self, lock_days: u64) -> Result<(), StakingError> {
        self.check_owner()?;
        self.reward_rates.remove(&lock_days);

        Self::emit_event(
            EVENT_RATE_UPDATED,
            &self.owner_id.clone(),
            serde_json::json!({
                "lock_days": lock_days,
                "rate": serde_json::Value::Null
            }),
        );
        Ok(())
    }

    /// Move forfeited penalties out of the contract. Owner only.
    #[handle_result]
    pub fn sweep_penalties(
        &mut self,
        amount: U128,
        receiver_id: AccountId,
    ) -> Result<Promise, StakingError> {
        self.check_owner()?;
        if amount.0 > self.penalty_pool {
            return Err(StakingError::InsufficientPenaltyPool);
        }

        self.penalty_pool -= amount.0;

        Ok(self.ft_transfer_with_callback(
            receiver_id.clone(),
            amount.0,
            "on_sweep_penalties".to_string(),
            serde_json::json!({
                "amount": amount,
                "receiver_id": receiver_id
            })
            .to_string(),
        ))
    }

    #[private]
    pub fn on_sweep_penalties(&mut self, amount: U128, receiver_id: AccountId) {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 0).is_ok() {
            Self::emit_event(
                EVENT_PENALTIES_SWEEP,
                &self.owner_id.clone(),
                serde_json::json!({
                    "amount": amount.0.to_string(),
                    "receiver_id": receiver_id.to_string()
                }),
            );
            return;
        }

        self.penalty_pool += amount.0;
        Self::emit_event(
            EVENT_PENALTIES_SWEEP_FAILED,
            &self.owner_id.clone(),
            serde_json::json!({
                "amount": amount.0.to_string()
            }),
        );
    }

    #[handle_result]
    pub fn set_owner(&mut self, new_owner: AccountId) -> Result<(), StakingError> {
        self.check_owner()?;
        let old_owner = self.owner_id.clone();
        self.owner_id = new_owner.clone();

        Self::emit_event(
            EVENT_OWNER_CHANGED,
            &old_owner,
            serde_json::json!({
                "old_owner": old_owner.to_string(),
                "new_owner": new_owner.to_string()
            }),
        );
        Ok(())
    }

    // --- Upgrade ---

    /// Deploys new contract code. Owner only.
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, StakingError> {
        self.check_owner()?;
        let code = env::input().expect("No input").to_vec();
        Self::emit_event(
            EVENT_CONTRACT_UPGRADE,
            &env::predecessor_account_id(),
            serde_json::json!({}),
        );
        Ok(Promise::new(env::current_account_id())
            .deploy_contract(code)
            .as_return())
    }

    // --- View ---

    pub fn get_stakes(&self, account_id: AccountId) -> Vec<StakePosition> {
        self.positions.get(&account_id).cloned().unwrap_or_default()
    }

    pub fn get_stake(&self, account_id: AccountId, stake_id: u64) -> Option<StakePosition> {
        self.positions
            .get(&account_id)?
            .iter()
            .find(|p| p.id == stake_id)
            .cloned()
    }

    /// Reward accrued so far, using the early-exit cutoff when applicable.
    pub fn pending_reward(&self, account_id: AccountId, stake_id: u64) -> U128 {
        match self.get_stake(account_id, stake_id) {
            Some(position) => U128(Self::calculate_reward(&position, env::block_timestamp())),
            None => U128(0),
        }
    }

    pub fn reward_rate_of(&self, lock_days: u64) -> Option<U128> {
        self.reward_rates.get(&lock_days).map(|rate| U128(*rate))
    }

    pub fn get_stats(&self) -> ContractStats {
        ContractStats {
            token_id: self.token_id.clone(),
            owner_id: self.owner_id.clone(),
            total_staked: U128(self.total_staked),
            rewards_pool: U128(self.rewards_pool),
            penalty_pool: U128(self.penalty_pool),
            next_stake_id: self.next_stake_id,
        }
    }

    // --- Internal ---

    fn internal_stake(&mut self, account_id: AccountId, amount: u128, lock_days: u64) {
        let rate = *self
            .reward_rates
            .get(&lock_days)
            .unwrap_or_else(|| StakingError::InvalidLockPeriod.panic_now());

        let stake_id = self.next_stake_id;
        self.next_stake_id += 1;

        let position = StakePosition {
            id: stake_id,
            amount: U128(amount),
            lock_period: lock_days * DAY_NS,
            staked_at: env::block_timestamp(),
            reward_rate: U128(rate),
            status: StakeStatus::Active,
            exited_at: None,
            penalty: U128(0),
        };

        let mut positions = self.positions.get(&account_id).cloned().unwrap_or_default();
        positions.push(position);
        self.positions.insert(account_id.clone(), positions);
        self.total_staked += amount;

        Self::emit_event(
            EVENT_STAKE_OPEN,
            &account_id,
            serde_json::json!({
                "stake_id": stake_id,
                "amount": amount.to_string(),
                "lock_days": lock_days,
                "rate": rate.to_string()
            }),
        );
    }

    /// `amount * rate * elapsed_seconds / 10^18`, with accrual cut off at
    /// the early-exit time for exited positions.
    fn calculate_reward(position: &StakePosition, now: u64) -> u128 {
        let accrual_end = position.exited_at.unwrap_or(now);
        let elapsed_sec = accrual_end.saturating_sub(position.staked_at) / NS_PER_SEC;

        (U256::from(position.amount.0) * U256::from(position.reward_rate.0)
            * U256::from(elapsed_sec)
            / U256::from(PRECISION))
        .as_u128()
    }

    fn check_owner(&self) -> Result<(), StakingError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(StakingError::Unauthorized);
        }
        Ok(())
    }

    fn emit_event(event_type: &str, account_id: &AccountId, data: serde_json::Value) {
        let event = serde_json::json!({
            "standard": EVENT_STANDARD,
            "version": EVENT_VERSION,
            "event": event_type,
            "data": [{
                "account_id": account_id.to_string(),
                "extra": data
            }]
        });
        env::log_str(&format!("{EVENT_JSON_PREFIX}{}", event));
    }

    fn ft_transfer_with_callback(
        &self,
        receiver_id: AccountId,
        amount: u128,
        callback_method: String,
        callback_args: String,
    ) -> Promise {
        Promise::new(self.token_id.clone())
            .function_call(
                "ft_transfer".to_string(),
                serde_json::json!({
                    "receiver_id": receiver_id,
                    "amount": U128(amount),
                })
                .to_string()
                .into_bytes(),
                NearToken::from_yoctonear(1),
                GAS_FOR_FT_TRANSFER,
            )
            .then(Promise::new(env::current_account_id()).function_call(
                callback_method,
                callback_args.into_bytes(),
                NearToken::from_yoctonear(0),
                GAS_FOR_CALLBACK,
            ))
    }
}

impl StakingError {
    fn panic_now(&self) -> ! {
        near_sdk::FunctionError::panic(self)
    }
}

#[near(serializers = [json])]
pub struct ContractStats {
    pub token_id: AccountId,
    pub owner_id: AccountId,
    pub total_staked: U128,
    pub rewards_pool: U128,
    pub penalty_pool: U128,
    pub next_stake_id: u64,
}
