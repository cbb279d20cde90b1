use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

/// How a gross payment was split. The three amounts always sum to the gross.
pub struct RevenueBreakdown {
    pub platform_fee: u128,
    pub royalty_recipient: Option<AccountId>,
    pub royalty_amount: u128,
    pub seller_id: AccountId,
    pub seller_amount: u128,
}

/// Price of one subscription period. A zero price disables subscriptions.
#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct SubscriptionPlan {
    pub price: U128,
    pub duration_ns: u64,
}

impl Default for SubscriptionPlan {
    fn default() -> Self {
        Self {
            price: U128(0),
            duration_ns: crate::DEFAULT_SUBSCRIPTION_PERIOD_NS,
        }
    }
}
