use crate::tests::test_utils::*;
use crate::*;

const ONE_RESO: u128 = 1_000_000_000_000_000_000_000_000; // 10^24

// --- Authorization Tests ---

#[test]
#[should_panic(expected = "not an authorized revenue source")]
fn test_distribute_unauthorized_source_panics() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), None));

    call_ft_on_transfer(&mut contract, fan(), ONE_RESO, &distribute_msg(track_id, ONE_RESO));
}

#[test]
#[should_panic(expected = "Only accepts the RESO token")]
fn test_distribute_wrong_token_panics() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), None));
    add_source(&mut contract, gateway());

    // Predecessor is some other token contract, not reso.near.
    near_sdk::testing_env!(context("other.tkn.near".parse().unwrap()).build());
    contract.ft_on_transfer(gateway(), U128(ONE_RESO), distribute_msg(track_id, ONE_RESO));
}

// --- Input Validation Tests ---

#[test]
#[should_panic(expected = "Amount must be positive")]
fn test_distribute_zero_amount_panics() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), None));
    add_source(&mut contract, gateway());

    call_ft_on_transfer(&mut contract, gateway(), 0, &distribute_msg(track_id, 0));
}

#[test]
#[should_panic(expected = "Declared amount")]
fn test_distribute_payment_mismatch_panics() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), None));
    add_source(&mut contract, gateway());

    // Declares one RESO but transfers half of it.
    call_ft_on_transfer(
        &mut contract,
        gateway(),
        ONE_RESO / 2,
        &distribute_msg(track_id, ONE_RESO),
    );
}

#[test]
#[should_panic(expected = "Track 99 not found")]
fn test_distribute_unknown_track_panics() {
    let mut contract = new_contract();
    add_source(&mut contract, gateway());

    call_ft_on_transfer(&mut contract, gateway(), ONE_RESO, &distribute_msg(99, ONE_RESO));
}

#[test]
#[should_panic(expected = "Invalid transfer message")]
fn test_distribute_malformed_msg_panics() {
    let mut contract = new_contract();
    call_ft_on_transfer(&mut contract, gateway(), ONE_RESO, "not json");
}

// --- Split Arithmetic Tests ---

#[test]
fn test_distribute_worked_example() {
    // Royalty 1000 bps, platform fee 500 bps, amount 1 RESO:
    // fee = 0.05, royalty = 0.10, seller = 0.85.
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), None));
    add_source(&mut contract, gateway());

    let consumed =
        call_ft_on_transfer(&mut contract, gateway(), ONE_RESO, &distribute_msg(track_id, ONE_RESO));
    assert_eq!(consumed.0, 0);

    let fee = contract.pending_withdrawal_of(owner()).0;
    let royalty = contract.pending_withdrawal_of(artist()).0;
    let seller = contract.pending_withdrawal_of(fan()).0;

    assert_eq!(fee, ONE_RESO / 20); // 0.05 RESO
    assert_eq!(royalty, ONE_RESO / 10); // 0.10 RESO
    assert_eq!(seller, ONE_RESO * 85 / 100); // 0.85 RESO
    assert_eq!(fee + royalty + seller, ONE_RESO);
    assert_eq!(contract.total_pending_withdrawals().0, ONE_RESO);
}

#[test]
fn test_distribute_exact_split_with_truncation() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(333), None));
    add_source(&mut contract, gateway());

    // Awkward amount: both fee and royalty truncate; seller absorbs the dust.
    let amount = 9_999u128;
    call_ft_on_transfer(&mut contract, gateway(), amount, &distribute_msg(track_id, amount));

    let fee = contract.pending_withdrawal_of(owner()).0;
    let royalty = contract.pending_withdrawal_of(artist()).0;
    let seller = contract.pending_withdrawal_of(fan()).0;

    assert_eq!(fee, amount * 500 / 10_000);
    assert_eq!(royalty, amount * 333 / 10_000);
    assert_eq!(fee + royalty + seller, amount);
}

#[test]
fn test_distribute_no_royalty_splits_two_ways() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(None, None));
    add_source(&mut contract, gateway());

    call_ft_on_transfer(&mut contract, gateway(), 10_000, &distribute_msg(track_id, 10_000));

    assert_eq!(contract.pending_withdrawal_of(owner()).0, 500);
    assert_eq!(contract.pending_withdrawal_of(artist()).0, 0);
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 9_500);
}

#[test]
fn test_distribute_credits_are_additive() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(Some(1_000), None));
    add_source(&mut contract, gateway());

    call_ft_on_transfer(&mut contract, gateway(), 10_000, &distribute_msg(track_id, 10_000));
    call_ft_on_transfer(&mut contract, gateway(), 10_000, &distribute_msg(track_id, 10_000));

    assert_eq!(contract.pending_withdrawal_of(artist()).0, 2_000);
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 17_000);
    assert_eq!(contract.total_pending_withdrawals().0, 20_000);
}

#[test]
fn test_distribute_pays_current_owner_after_transfer() {
    let mut contract = new_contract();
    let track_id = mint_direct(&mut contract, mint_args(None, None));
    add_source(&mut contract, gateway());

    near_sdk::testing_env!(context_with_deposit(fan(), 1).build());
    contract.track_transfer(artist(), track_id, None).unwrap();

    call_ft_on_transfer(&mut contract, gateway(), 10_000, &distribute_msg(track_id, 10_000));

    // Seller proceeds follow ownership; the original receiver gets nothing.
    assert_eq!(contract.pending_withdrawal_of(fan()).0, 0);
    assert_eq!(contract.pending_withdrawal_of(artist()).0, 9_500);
}

#[test]
#[should_panic(expected = "exceed payment amount")]
fn test_distribute_excessive_fees_panics() {
    let mut contract = new_contract();
    // 9_500 royalty + 500 fee passes at mint (exactly 100%), then the fee
    // is raised so the combined take exceeds the payment.
    let track_id = mint_direct(&mut contract, mint_args(Some(9_500), None));
    add_source(&mut contract, gateway());

    near_sdk::testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_platform_fee_bps(1_000).unwrap();

    call_ft_on_transfer(&mut contract, gateway(), 10_000, &distribute_msg(track_id, 10_000));
}
