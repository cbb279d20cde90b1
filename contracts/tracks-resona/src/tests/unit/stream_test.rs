use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

const STREAM_PRICE: u128 = 5_000;

fn contract_with_streamable_track() -> (Contract, u64) {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), Some(STREAM_PRICE)));
    add_source(&mut contract, gateway());
    (contract, track_id)
}

// --- Purchase Tests ---

#[test]
fn test_stream_purchase_grants_credit_and_splits_revenue() {
    let (mut contract, track_id) = contract_with_streamable_track();

    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));

    assert_eq!(contract.stream_credits_of(fan(), track_id), 1);

    // The stream payment went through the revenue splitter.
    assert_eq!(contract.pending_withdrawal_of(owner()).0, STREAM_PRICE * 500 / 10_000);
    assert_eq!(contract.pending_withdrawal_of(artist()).0, STREAM_PRICE * 1_000 / 10_000);
    assert_eq!(
        contract.pending_withdrawal_of(fan()).0,
        STREAM_PRICE - STREAM_PRICE * 500 / 10_000 - STREAM_PRICE * 1_000 / 10_000
    );
    assert_eq!(contract.total_pending_withdrawals().0, STREAM_PRICE);
}

#[test]
fn test_stream_purchases_accumulate() {
    let (mut contract, track_id) = contract_with_streamable_track();

    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));
    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));

    assert_eq!(contract.stream_credits_of(fan(), track_id), 2);
}

#[test]
#[should_panic(expected = "costs")]
fn test_stream_wrong_amount_panics() {
    let (mut contract, track_id) = contract_with_streamable_track();
    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE - 1, &stream_msg(track_id));
}

#[test]
#[should_panic(expected = "not priced for streaming")]
fn test_stream_unpriced_track_panics() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(None, None));
    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));
}

#[test]
#[should_panic(expected = "not found")]
fn test_stream_unknown_track_panics() {
    let (mut contract, _) = contract_with_streamable_track();
    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(404));
}

// --- Redeem Tests ---

#[test]
fn test_redeem_consumes_one_credit() {
    let (mut contract, track_id) = contract_with_streamable_track();
    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));
    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));

    testing_env!(context(gateway()).build());
    assert!(contract.redeem_stream(fan(), track_id).unwrap());
    assert_eq!(contract.stream_credits_of(fan(), track_id), 1);

    assert!(contract.redeem_stream(fan(), track_id).unwrap());
    assert_eq!(contract.stream_credits_of(fan(), track_id), 0);
}

#[test]
fn test_redeem_without_credits_returns_false() {
    let (mut contract, track_id) = contract_with_streamable_track();

    testing_env!(context(gateway()).build());
    assert!(!contract.redeem_stream(fan(), track_id).unwrap());
}

#[test]
fn test_redeem_by_non_gateway_fails() {
    let (mut contract, track_id) = contract_with_streamable_track();
    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));

    testing_env!(context(fan()).build());
    let err = contract.redeem_stream(fan(), track_id).unwrap_err();
    assert!(matches!(err, PlatformError::Unauthorized(_)));
    assert_eq!(contract.stream_credits_of(fan(), track_id), 1);
}

#[test]
fn test_credits_are_per_account_and_track() {
    let (mut contract, track_id) = contract_with_streamable_track();
    let other_track = mint_direct(&mut contract, mint_args(None, Some(STREAM_PRICE)));

    call_ft_on_transfer(&mut contract, fan(), STREAM_PRICE, &stream_msg(track_id));

    assert_eq!(contract.stream_credits_of(fan(), other_track), 0);
    assert_eq!(contract.stream_credits_of(gateway(), track_id), 0);
}
