use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;

pub fn emit_owner_transferred(old_owner: &AccountId, new_owner: &AccountId) {
    EventBuilder::new(CONTRACT, "owner_transferred", old_owner)
        .field("new_owner", new_owner)
        .emit();
}

pub fn emit_fee_recipient_changed(
    owner_id: &AccountId,
    old_recipient: &AccountId,
    new_recipient: &AccountId,
) {
    EventBuilder::new(CONTRACT, "fee_recipient_changed", owner_id)
        .field("old_recipient", old_recipient)
        .field("new_recipient", new_recipient)
        .emit();
}

pub fn emit_platform_fee_updated(owner_id: &AccountId, old_bps: u16, new_bps: u16) {
    EventBuilder::new(CONTRACT, "platform_fee_updated", owner_id)
        .field("old_bps", old_bps)
        .field("new_bps", new_bps)
        .emit();
}

pub fn emit_revenue_source_added(owner_id: &AccountId, source_id: &AccountId) {
    EventBuilder::new(CONTRACT, "revenue_source_added", owner_id)
        .field("source_id", source_id)
        .emit();
}

pub fn emit_revenue_source_removed(owner_id: &AccountId, source_id: &AccountId) {
    EventBuilder::new(CONTRACT, "revenue_source_removed", owner_id)
        .field("source_id", source_id)
        .emit();
}

pub fn emit_subscription_plan_updated(owner_id: &AccountId, price: u128, duration_ns: u64) {
    EventBuilder::new(CONTRACT, "subscription_plan_updated", owner_id)
        .field("price", price)
        .field("duration_ns", duration_ns)
        .emit();
}

pub fn emit_contract_upgrade(owner_id: &AccountId) {
    EventBuilder::new(CONTRACT, "upgrade", owner_id).emit();
}
