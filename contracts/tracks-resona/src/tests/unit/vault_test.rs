use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

fn funded_contract() -> Contract {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), None));
    add_source(&mut contract, gateway());
    call_ft_on_transfer(&mut contract, gateway(), 10_000, &distribute_msg(track_id, 10_000));
    contract
}

// --- Withdraw Tests ---

#[test]
fn test_withdraw_no_funds_fails() {
    let mut contract = new_contract();

    testing_env!(context(fan()).build());
    let err = match contract.withdraw() {
        Ok(_) => panic!("expected withdraw to fail"),
        Err(e) => e,
    };
    assert!(matches!(err, PlatformError::InvalidState(_)));
}

#[test]
fn test_withdraw_zeroes_balance_before_transfer() {
    let mut contract = funded_contract();
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 8_500);
    let total_before = contract.total_pending_withdrawals().0;

    testing_env!(context(fan()).build());
    let _ = contract.withdraw().unwrap();

    // State is already settled before the transfer resolves: a re-entering
    // call sees a zero balance.
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 0);
    assert_eq!(contract.total_pending_withdrawals().0, total_before - 8_500);

    testing_env!(context(fan()).build());
    let err = match contract.withdraw() {
        Ok(_) => panic!("expected withdraw to fail"),
        Err(e) => e,
    };
    assert!(matches!(err, PlatformError::InvalidState(_)));
}

#[test]
fn test_withdraw_failure_restores_balance() {
    let mut contract = funded_contract();
    let total_before = contract.total_pending_withdrawals().0;

    testing_env!(context(fan()).build());
    let _ = contract.withdraw().unwrap();
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 0);

    // Resolve the callback with no promise result: the transfer failed and
    // the whole withdrawal must roll back.
    testing_env!(context(contract_account()).build());
    contract.on_withdraw(fan(), U128(8_500));

    assert_eq!(contract.pending_withdrawal_of(fan()).0, 8_500);
    assert_eq!(contract.total_pending_withdrawals().0, total_before);
}

#[test]
fn test_withdraw_failure_merges_with_new_credits() {
    let mut contract = funded_contract();

    testing_env!(context(fan()).build());
    let _ = contract.withdraw().unwrap();

    // A distribution lands between the transfer and its resolution.
    call_ft_on_transfer(&mut contract, gateway(), 10_000, &distribute_msg(1, 10_000));
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 8_500);

    testing_env!(context(contract_account()).build());
    contract.on_withdraw(fan(), U128(8_500));

    assert_eq!(contract.pending_withdrawal_of(fan()).0, 17_000);
}

#[test]
fn test_each_recipient_withdraws_own_balance() {
    let mut contract = funded_contract();

    testing_env!(context(artist()).build());
    let _ = contract.withdraw().unwrap();
    assert_eq!(contract.pending_withdrawal_of(artist()).0, 0);

    // Other balances are untouched.
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 8_500);
    assert_eq!(contract.pending_withdrawal_of(owner()).0, 500);
}
