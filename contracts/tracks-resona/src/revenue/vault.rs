use crate::*;
use near_sdk::serde_json;

#[near]
impl Contract {
    /// Withdraw the caller's entire pending balance.
    ///
    /// The balance is zeroed before the token transfer leaves the contract;
    /// the resolving callback restores it if the transfer fails, so a
    /// re-entering caller can never double-withdraw and a failed transfer
    /// never strands funds.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<Promise, PlatformError> {
        let account_id = env::predecessor_account_id();
        let balance = self
            .pending_withdrawals
            .get(&account_id)
            .copied()
            .unwrap_or(0);
        if balance == 0 {
            return Err(PlatformError::no_pending_funds());
        }

        self.pending_withdrawals.remove(&account_id);
        self.total_pending -= balance;

        Ok(self.ft_transfer_with_callback(
            account_id.clone(),
            balance,
            "on_withdraw".to_string(),
            serde_json::json!({
                "account_id": account_id,
                "amount": U128(balance)
            })
            .to_string(),
        ))
    }

    #[private]
    pub fn on_withdraw(&mut self, account_id: AccountId, amount: U128) {
        if env::promise_results_count() == 1 && env::promise_result_checked(0, 0).is_ok() {
            events::emit_withdrawal(&account_id, amount.0);
            return;
        }

        // Transfer failed: the whole withdrawal rolls back.
        let balance = self
            .pending_withdrawals
            .get(&account_id)
            .copied()
            .unwrap_or(0);
        self.pending_withdrawals
            .insert(account_id.clone(), balance + amount.0);
        self.total_pending += amount.0;
        events::emit_withdrawal_failed(&account_id, amount.0);
    }

    pub fn pending_withdrawal_of(&self, account_id: AccountId) -> U128 {
        U128(
            self.pending_withdrawals
                .get(&account_id)
                .copied()
                .unwrap_or(0),
        )
    }

    pub fn total_pending_withdrawals(&self) -> U128 {
        U128(self.total_pending)
    }
}

impl Contract {
    pub(crate) fn ft_transfer_with_callback(
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
                ONE_YOCTO,
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
