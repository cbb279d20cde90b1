use crate::*;

impl Contract {
    /// Pay-per-stream purchase: the payment is split through the revenue
    /// splitter (platform fee, artist royalty, owner proceeds) and one stream
    /// credit is granted to the payer for this track.
    pub(crate) fn internal_stream_purchase(
        &mut self,
        payer_id: &AccountId,
        track_id: u64,
        amount: u128,
    ) -> Result<(), PlatformError> {
        let track = self
            .tracks_by_id
            .get(&track_id)
            .ok_or_else(|| PlatformError::track_not_found(track_id))?;

        let price = track
            .stream_price
            .ok_or_else(|| PlatformError::InvalidState("Track is not priced for streaming".into()))?;
        if amount != price.0 {
            return Err(PlatformError::InvalidInput(format!(
                "Streaming {} costs {}, got {}",
                track_id, price.0, amount
            )));
        }

        self.internal_split(track_id, amount)?;

        let key = stream_credit_key(payer_id, track_id);
        let credits = self.stream_credits.get(&key).copied().unwrap_or(0) + 1;
        self.stream_credits.insert(key, credits);

        events::emit_stream_purchase(payer_id, track_id, amount, credits);
        Ok(())
    }
}

#[near]
impl Contract {
    /// Consume one stream credit for playback. Callable only by authorized
    /// revenue sources (the streaming gateways). Returns false when the
    /// account has no credits left for this track.
    #[handle_result]
    pub fn redeem_stream(
        &mut self,
        account_id: AccountId,
        track_id: u64,
    ) -> Result<bool, PlatformError> {
        let gateway_id = env::predecessor_account_id();
        self.check_revenue_source(&gateway_id)?;

        let key = stream_credit_key(&account_id, track_id);
        let credits = self.stream_credits.get(&key).copied().unwrap_or(0);
        if credits == 0 {
            return Ok(false);
        }

        let remaining = credits - 1;
        if remaining == 0 {
            self.stream_credits.remove(&key);
        } else {
            self.stream_credits.insert(key, remaining);
        }

        events::emit_stream_redeemed(&gateway_id, &account_id, track_id, remaining);
        Ok(true)
    }

    pub fn stream_credits_of(&self, account_id: AccountId, track_id: u64) -> u64 {
        self.stream_credits
            .get(&stream_credit_key(&account_id, track_id))
            .copied()
            .unwrap_or(0)
    }
}

pub(crate) fn stream_credit_key(account_id: &AccountId, track_id: u64) -> String {
    format!("{}{}{}", account_id, STREAM_KEY_DELIMITER, track_id)
}
