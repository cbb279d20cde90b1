use crate::*;
use near_sdk::serde_json;

/// Payment instructions carried in the NEP-141 `ft_transfer_call` msg.
#[near(serializers = [json])]
#[serde(tag = "action", rename_all = "snake_case")]
enum TransferMsg {
    /// Revenue distribution from an authorized source. `amount` is the
    /// declared gross; it must equal the transferred amount.
    Distribute { track_id: u64, amount: U128 },
    Subscribe,
    Stream { track_id: u64 },
}

#[near]
impl Contract {
    /// Handles `{"action":"distribute","track_id":N,"amount":"A"}`,
    /// `{"action":"subscribe"}`, and `{"action":"stream","track_id":N}`.
    ///
    /// Any rejection panics, so the token contract refunds the sender in
    /// full; partial consumption is never reported.
    pub fn ft_on_transfer(&mut self, sender_id: AccountId, amount: U128, msg: String) -> U128 {
        near_sdk::require!(
            env::predecessor_account_id() == self.token_id,
            "Only accepts the RESO token"
        );
        near_sdk::require!(amount.0 > 0, "Amount must be positive");

        let parsed: TransferMsg = serde_json::from_str(&msg)
            .unwrap_or_else(|_| env::panic_str("Invalid transfer message"));

        let result = match parsed {
            TransferMsg::Distribute { track_id, amount: declared } => {
                if declared.0 != amount.0 {
                    Err(PlatformError::payment_mismatch(declared.0, amount.0))
                } else {
                    self.internal_distribute(&sender_id, track_id, amount.0)
                }
            }
            TransferMsg::Subscribe => self.internal_subscribe(&sender_id, amount.0).map(|_| ()),
            TransferMsg::Stream { track_id } => {
                self.internal_stream_purchase(&sender_id, track_id, amount.0)
            }
        };

        match result {
            Ok(()) => U128(0),
            Err(e) => near_sdk::FunctionError::panic(&e),
        }
    }
}
