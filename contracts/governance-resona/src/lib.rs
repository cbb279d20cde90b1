//! Token-weighted governance: owner-created proposals with a fixed 7-day
//! voting window, balance-weighted votes, and majority-of-supply execution.

use near_sdk::{
    AccountId, BorshStorageKey, Gas, NearToken, Promise, env, json_types::U128, near, serde_json,
    store::{IterableMap, LookupMap},
};

mod errors;
pub use errors::GovernanceError;


const VOTING_PERIOD_NS: u64 = 7 * 24 * 60 * 60 * 1_000_000_000;
const GAS_FOR_FT_QUERY: Gas = Gas::from_tgas(5);
const GAS_FOR_CALLBACK: Gas = Gas::from_tgas(10);

const EVENT_STANDARD: &str = "resona";
const EVENT_VERSION: &str = "1.0.0";
const EVENT_JSON_PREFIX: &str = "EVENT_JSON:";

const EVENT_PROPOSAL_CREATED: &str = "PROPOSAL_CREATED";
const EVENT_VOTE_CAST: &str = "VOTE_CAST";
const EVENT_VOTE_FAILED: &str = "VOTE_FAILED";
const EVENT_PROPOSAL_EXECUTED: &str = "PROPOSAL_EXECUTED";
const EVENT_PROPOSAL_FAILED: &str = "PROPOSAL_FAILED";
const EVENT_EXECUTION_ABORTED: &str = "EXECUTION_ABORTED";
const EVENT_OWNER_CHANGED: &str = "OWNER_CHANGED";
const EVENT_CONTRACT_UPGRADE: &str = "CONTRACT_UPGRADE";

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    Proposals,
    VotesCast,
}

#[near(serializers = [json, borsh])]
#[derive(Clone, Debug, PartialEq)]
pub enum ProposalStatus {
    Active,
    Executed,
    Failed,
}

#[near(serializers = [json, borsh])]
#[derive(Clone)]
pub struct Proposal {
    pub id: u64,
    pub description: String,
    /// Cumulative weight of votes in favor.
    pub votes: U128,
    pub start_time: u64,
    pub end_time: u64,
    pub status: ProposalStatus,
    pub execution_in_flight: bool,
}

#[near(contract_state)]
pub struct ResonaGovernance {
    token_id: AccountId,
    owner_id: AccountId,
    proposals: IterableMap<u64, Proposal>,
    // Double-vote guard: one entry per (proposal, voter) pair.
    votes_cast: LookupMap<String, bool>,
    next_proposal_id: u64,
}

impl Default for ResonaGovernance {
    fn default() -> Self {
        env::panic_str("Contract must be initialized")
    }
}

#[near]
impl ResonaGovernance {
    #[init]
    pub fn new(token_id: AccountId, owner_id: AccountId) -> Self {
        Self {
            token_id,
            owner_id,
            proposals: IterableMap::new(StorageKey::Proposals),
            votes_cast: LookupMap::new(StorageKey::VotesCast),
            next_proposal_id: 1,
        }
    }

    // --- Proposals ---

    /// Create a proposal with a 7-day voting window. Owner only.
    #[handle_result]
    pub fn create_proposal(&mut self, description: String) -> Result<u64, GovernanceError> {
        self.check_owner()?;
        if description.trim().is_empty() {
            return Err(GovernanceError::EmptyDescription);
        }

        let proposal_id = self.next_proposal_id;
        self.next_proposal_id += 1;

        let now = env::block_timestamp();
        let proposal = Proposal {
            id: proposal_id,
            description,
            votes: U128(0),
            start_time: now,
            end_time: now + VOTING_PERIOD_NS,
            status: ProposalStatus::Active,
            execution_in_flight: false,
        };
        self.proposals.insert(proposal_id, proposal);

        Self::emit_event(
            EVENT_PROPOSAL_CREATED,
            &self.owner_id.clone(),
            serde_json::json!({
                "proposal_id": proposal_id,
                "end_time": (now + VOTING_PERIOD_NS).to_string()
            }),
        );
        Ok(proposal_id)
    }

    /// Vote in favor of a proposal, weighted by the caller's RESO balance at
    /// voting time.
    ///
    /// The weight is *not* snapshotted at proposal creation: a holder who
    /// transfers tokens after voting enables the receiving account to vote
    /// with the same tokens. Changing that policy requires a balance
    /// snapshot, which is a governance decision in its own right.
    #[handle_result]
    pub fn vote(&mut self, proposal_id: u64) -> Result<Promise, GovernanceError> {
        let voter_id = env::predecessor_account_id();
        let now = env::block_timestamp();

        let proposal = self
            .proposals
            .get(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound)?;
        if proposal.status != ProposalStatus::Active {
            return Err(GovernanceError::AlreadyResolved);
        }
        if now < proposal.start_time || now > proposal.end_time {
            return Err(GovernanceError::VotingClosed);
        }

        let key = vote_key(proposal_id, &voter_id);
        if self.votes_cast.contains_key(&key) {
            return Err(GovernanceError::AlreadyVoted);
        }
        // Recorded before the balance fetch so a re-entering vote on the
        // same proposal is rejected; the callback erases it on failure.
        self.votes_cast.insert(key, true);

        Ok(Promise::new(self.token_id.clone())
            .function_call(
                "ft_balance_of".to_string(),
                serde_json::json!({ "account_id": voter_id })
                    .to_string()
                    .into_bytes(),
                NearToken::from_yoctonear(0),
                GAS_FOR_FT_QUERY,
            )
            .then(Promise::new(env::current_account_id()).function_call(
                "on_vote_weight".to_string(),
                serde_json::json!({
                    "proposal_id": proposal_id,
                    "voter_id": voter_id
                })
                .to_string()
                .into_bytes(),
                NearToken::from_yoctonear(0),
                GAS_FOR_CALLBACK,
            )))
    }

    #[private]
    pub fn on_vote_weight(&mut self, proposal_id: u64, voter_id: AccountId) {
        let balance = if env::promise_results_count() == 1 {
            env::promise_result_checked(0, 64)
                .ok()
                .and_then(|value| serde_json::from_slice::<U128>(&value).ok())
        } else {
            None
        };
        self.apply_vote_weight(proposal_id, voter_id, balance);
    }

    /// Resolve a proposal after its voting window closed. Owner only.
    /// Passes when the tally reaches 50% of the RESO total supply; marked
    /// `Failed` otherwise. Both outcomes are terminal.
    #[handle_result]
    pub fn execute_proposal(&mut self, proposal_id: u64) -> Result<Promise, GovernanceError> {
        self.check_owner()?;
        let now = env::block_timestamp();

        let proposal = self
            .proposals
            .get_mut(&proposal_id)
            .ok_or(GovernanceError::ProposalNotFound)?;
        if proposal.status != ProposalStatus::Active {
            return Err(GovernanceError::AlreadyResolved);
        }
        if now <= proposal.end_time {
            return Err(GovernanceError::VotingNotEnded);
        }
        if proposal.execution_in_flight {
            return Err(GovernanceError::ExecutionInFlight);
        }
        proposal.execution_in_flight = true;

        Ok(Promise::new(self.token_id.clone())
            .function_call(
                "ft_total_supply".to_string(),
                b"{}".to_vec(),
                NearToken::from_yoctonear(0),
                GAS_FOR_FT_QUERY,
            )
            .then(Promise::new(env::current_account_id()).function_call(
                "on_execute_proposal".to_string(),
                serde_json::json!({ "proposal_id": proposal_id })
                    .to_string()
                    .into_bytes(),
                NearToken::from_yoctonear(0),
                GAS_FOR_CALLBACK,
            )))
    }

    #[private]
    pub fn on_execute_proposal(&mut self, proposal_id: u64) {
        let supply = if env::promise_results_count() == 1 {
            env::promise_result_checked(0, 64)
                .ok()
                .and_then(|value| serde_json::from_slice::<U128>(&value).ok())
        } else {
            None
        };
        self.resolve_proposal(proposal_id, supply);
    }

    // --- Owner ---

    #[handle_result]
    pub fn set_owner(&mut self, new_owner: AccountId) -> Result<(), GovernanceError> {
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

    /// Deploys new contract code. Owner only.
    #[handle_result]
    pub fn update_contract(&self) -> Result<Promise, GovernanceError> {
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

    pub fn get_proposal(&self, proposal_id: u64) -> Option<Proposal> {
        self.proposals.get(&proposal_id).cloned()
    }

    pub fn get_proposals(&self, from_index: Option<u64>, limit: Option<u64>) -> Vec<Proposal> {
        let from = from_index.unwrap_or(0) as usize;
        let limit = limit.unwrap_or(50) as usize;
        self.proposals
            .iter()
            .skip(from)
            .take(limit)
            .map(|(_, proposal)| proposal.clone())
            .collect()
    }

    pub fn has_voted(&self, proposal_id: u64, account_id: AccountId) -> bool {
        self.votes_cast
            .contains_key(&vote_key(proposal_id, &account_id))
    }

    pub fn get_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    // --- Internal ---

    /// Apply the fetched vote weight, or release the vote record if the
    /// balance fetch failed so the voter can retry.
    fn apply_vote_weight(&mut self, proposal_id: u64, voter_id: AccountId, weight: Option<U128>) {
        match weight {
            Some(weight) => {
                if let Some(proposal) = self.proposals.get_mut(&proposal_id) {
                    proposal.votes = U128(proposal.votes.0 + weight.0);
                }
                Self::emit_event(
                    EVENT_VOTE_CAST,
                    &voter_id,
                    serde_json::json!({
                        "proposal_id": proposal_id,
                        "weight": weight.0.to_string()
                    }),
                );
            }
            None => {
                self.votes_cast.remove(&vote_key(proposal_id, &voter_id));
                Self::emit_event(
                    EVENT_VOTE_FAILED,
                    &voter_id,
                    serde_json::json!({ "proposal_id": proposal_id }),
                );
            }
        }
    }

    /// Settle a proposal against the fetched total supply. `None` means the
    /// supply fetch failed; the proposal stays `Active` for a retry.
    fn resolve_proposal(&mut self, proposal_id: u64, supply: Option<U128>) {
        let owner_id = self.owner_id.clone();
        let Some(proposal) = self.proposals.get_mut(&proposal_id) else {
            return;
        };
        proposal.execution_in_flight = false;

        let Some(supply) = supply else {
            Self::emit_event(
                EVENT_EXECUTION_ABORTED,
                &owner_id,
                serde_json::json!({ "proposal_id": proposal_id }),
            );
            return;
        };

        if proposal.votes.0 >= supply.0.div_ceil(2) {
            proposal.status = ProposalStatus::Executed;
            Self::emit_event(
                EVENT_PROPOSAL_EXECUTED,
                &owner_id,
                serde_json::json!({
                    "proposal_id": proposal_id,
                    "votes": proposal.votes.0.to_string(),
                    "total_supply": supply.0.to_string()
                }),
            );
        } else {
            proposal.status = ProposalStatus::Failed;
            Self::emit_event(
                EVENT_PROPOSAL_FAILED,
                &owner_id,
                serde_json::json!({
                    "proposal_id": proposal_id,
                    "votes": proposal.votes.0.to_string(),
                    "total_supply": supply.0.to_string()
                }),
            );
        }
    }

    fn check_owner(&self) -> Result<(), GovernanceError> {
        if env::predecessor_account_id() != self.owner_id {
            return Err(GovernanceError::Unauthorized);
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
}

// Key delimiter invariant: ':' cannot appear in NEAR account IDs.
fn vote_key(proposal_id: u64, voter_id: &AccountId) -> String {
    format!("{}:{}", proposal_id, voter_id)
}
