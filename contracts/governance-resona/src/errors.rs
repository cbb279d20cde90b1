use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::{FunctionError, env};

#[derive(Debug, PartialEq, BorshSerialize, BorshDeserialize)]
#[borsh(crate = "near_sdk::borsh")]
pub enum GovernanceError {
    Unauthorized,
    EmptyDescription,
    ProposalNotFound,
    VotingClosed,
    VotingNotEnded,
    AlreadyVoted,
    AlreadyResolved,
    ExecutionInFlight,
}

impl FunctionError for GovernanceError {
    fn panic(&self) -> ! {
        env::panic_str(match self {
            GovernanceError::Unauthorized => "Unauthorized access",
            GovernanceError::EmptyDescription => "Proposal description cannot be empty",
            GovernanceError::ProposalNotFound => "Proposal not found",
            GovernanceError::VotingClosed => "Voting window is not open",
            GovernanceError::VotingNotEnded => "Voting window has not ended",
            GovernanceError::AlreadyVoted => "Account has already voted on this proposal",
            GovernanceError::AlreadyResolved => "Proposal has already been resolved",
            GovernanceError::ExecutionInFlight => "Proposal execution already in progress",
        })
    }
}
