use crate::*;

impl Contract {
    /// Extend the payer's subscription by one period. The payment must match
    /// the configured plan price exactly; proceeds are platform revenue and
    /// flow through the vault like any other credit.
    pub(crate) fn internal_subscribe(
        &mut self,
        account_id: &AccountId,
        amount: u128,
    ) -> Result<u64, PlatformError> {
        let plan = self.subscription_plan.clone();
        if plan.price.0 == 0 {
            return Err(PlatformError::InvalidState(
                "Subscriptions are not enabled".into(),
            ));
        }
        if amount != plan.price.0 {
            return Err(PlatformError::InvalidInput(format!(
                "Subscription costs {} per period, got {}",
                plan.price.0, amount
            )));
        }

        let now = env::block_timestamp();
        let base = self
            .subscriptions
            .get(account_id)
            .copied()
            .unwrap_or(0)
            .max(now);
        let expires_at = base + plan.duration_ns;
        self.subscriptions.insert(account_id.clone(), expires_at);

        let fee_recipient = self.fee_recipient.clone();
        self.credit_pending(&fee_recipient, amount);

        events::emit_subscription(account_id, amount, expires_at);
        Ok(expires_at)
    }
}

#[near]
impl Contract {
    /// Subscription expiry timestamp in nanoseconds, if any.
    pub fn subscription_of(&self, account_id: AccountId) -> Option<u64> {
        self.subscriptions.get(&account_id).copied()
    }

    pub fn is_subscribed(&self, account_id: AccountId) -> bool {
        self.subscriptions
            .get(&account_id)
            .map(|expires_at| *expires_at > env::block_timestamp())
            .unwrap_or(false)
    }
}
