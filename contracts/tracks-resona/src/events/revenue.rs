use near_sdk::AccountId;

use super::REVENUE;
use super::builder::EventBuilder;

// Audit record: every distribution logs who paid what to whom.
#[allow(clippy::too_many_arguments)]
pub fn emit_revenue_distributed(
    source_id: &AccountId,
    track_id: u64,
    amount: u128,
    platform_fee: u128,
    royalty_amount: u128,
    royalty_recipient: Option<&AccountId>,
    seller_id: &AccountId,
    seller_amount: u128,
) {
    EventBuilder::new(REVENUE, "distribute", source_id)
        .field("track_id", track_id)
        .field("amount", amount)
        .field("platform_fee", platform_fee)
        .field("royalty_amount", royalty_amount)
        .field_opt("royalty_recipient", royalty_recipient)
        .field("seller_id", seller_id)
        .field("seller_amount", seller_amount)
        .emit();
}

pub fn emit_withdrawal(account_id: &AccountId, amount: u128) {
    EventBuilder::new(REVENUE, "withdraw", account_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_withdrawal_failed(account_id: &AccountId, amount: u128) {
    EventBuilder::new(REVENUE, "withdraw_failed", account_id)
        .field("amount", amount)
        .emit();
}

pub fn emit_subscription(account_id: &AccountId, amount: u128, expires_at: u64) {
    EventBuilder::new(REVENUE, "subscribe", account_id)
        .field("amount", amount)
        .field("expires_at", expires_at)
        .emit();
}

pub fn emit_stream_purchase(payer_id: &AccountId, track_id: u64, amount: u128, credits: u64) {
    EventBuilder::new(REVENUE, "stream_purchase", payer_id)
        .field("track_id", track_id)
        .field("amount", amount)
        .field("credits", credits)
        .emit();
}

pub fn emit_stream_redeemed(
    gateway_id: &AccountId,
    account_id: &AccountId,
    track_id: u64,
    remaining: u64,
) {
    EventBuilder::new(REVENUE, "stream_redeemed", gateway_id)
        .field("account_id", account_id)
        .field("track_id", track_id)
        .field("remaining", remaining)
        .emit();
}
