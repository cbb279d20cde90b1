use crate::*;

impl Contract {
    /// Distribution entry point for authorized revenue sources. The payment
    /// arrived as a RESO transfer; `amount` is the transferred value.
    pub(crate) fn internal_distribute(
        &mut self,
        source_id: &AccountId,
        track_id: u64,
        amount: u128,
    ) -> Result<(), PlatformError> {
        self.check_revenue_source(source_id)?;

        let breakdown = self.internal_split(track_id, amount)?;

        events::emit_revenue_distributed(
            source_id,
            track_id,
            amount,
            breakdown.platform_fee,
            breakdown.royalty_amount,
            breakdown.royalty_recipient.as_ref(),
            &breakdown.seller_id,
            breakdown.seller_amount,
        );
        Ok(())
    }

    /// Split `amount` into platform fee, artist royalty, and seller proceeds,
    /// crediting each into the pull-payment vault. Never pays out directly.
    pub(crate) fn internal_split(
        &mut self,
        track_id: u64,
        amount: u128,
    ) -> Result<RevenueBreakdown, PlatformError> {
        if amount == 0 {
            return Err(PlatformError::InvalidInput(
                "Amount must be greater than zero".into(),
            ));
        }

        let track = self
            .tracks_by_id
            .get(&track_id)
            .ok_or_else(|| PlatformError::track_not_found(track_id))?;

        let platform_fee = crate::track::bps_share(amount, self.platform_fee_bps);

        let (royalty_recipient, royalty_amount) = match &track.royalty {
            Some(royalty) => (
                Some(royalty.recipient.clone()),
                crate::track::bps_share(amount, royalty.bps),
            ),
            None => (None, 0),
        };

        if platform_fee + royalty_amount > amount {
            return Err(PlatformError::InvalidState(format!(
                "Fees ({} + {}) exceed payment amount {}",
                platform_fee, royalty_amount, amount
            )));
        }

        let seller_id = track.owner_id.clone();
        // Accounting invariant: the three credits reconstruct the gross exactly.
        let seller_amount = amount - platform_fee - royalty_amount;

        let fee_recipient = self.fee_recipient.clone();
        self.credit_pending(&fee_recipient, platform_fee);
        if let Some(recipient) = &royalty_recipient {
            self.credit_pending(recipient, royalty_amount);
        }
        self.credit_pending(&seller_id, seller_amount);

        Ok(RevenueBreakdown {
            platform_fee,
            royalty_recipient,
            royalty_amount,
            seller_id,
            seller_amount,
        })
    }

    pub(crate) fn credit_pending(&mut self, account_id: &AccountId, amount: u128) {
        if amount == 0 {
            return;
        }
        let balance = self
            .pending_withdrawals
            .get(account_id)
            .copied()
            .unwrap_or(0);
        self.pending_withdrawals
            .insert(account_id.clone(), balance + amount);
        self.total_pending += amount;
    }
}
