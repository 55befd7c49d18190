use common_errors::*;
use common_proxies::proxy_vault;
use common_structs::BackingKind;
use multiversx_sc::types::BigUint;
use multiversx_sc_scenario::imports::{ExpectMessage, ReturnsResult, ScenarioTxRun};
pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

#[test]
fn test_first_deposit_mints_one_to_one() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);

    state
        .world
        .check_account(LENDER_ADDRESS)
        .esdt_balance(IB_TOKEN, big(ONE))
        .esdt_balance(BASE_TOKEN, big(9) * big(ONE));
    assert_eq!(state.pool_share_supply(), big(ONE));
    assert_eq!(state.total_token(), big(ONE));
}

#[test]
fn test_deposit_withdraw_round_trip() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    state.deposit(BOB_ADDRESS, ONE / 2);
    assert_eq!(state.pool_share_supply(), big(ONE + ONE / 2));

    state.withdraw(BOB_ADDRESS, &big(ONE / 2));
    state.withdraw(LENDER_ADDRESS, &big(ONE));

    state
        .world
        .check_account(LENDER_ADDRESS)
        .esdt_balance(BASE_TOKEN, big(10) * big(ONE));
    state
        .world
        .check_account(BOB_ADDRESS)
        .esdt_balance(BASE_TOKEN, big(10) * big(ONE));
    assert_eq!(state.pool_share_supply(), big(0));
    assert_eq!(state.total_token(), big(0));
}

#[test]
fn test_deposit_wrong_token_fails() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .deposit()
        .single_esdt(&FARM_TOKEN.to_token_identifier(), 0, &big(ONE))
        .returns(ExpectMessage(core::str::from_utf8(ERROR_INVALID_ASSET).unwrap()))
        .run();
}

#[test]
fn test_interest_accrual_splits_reserve() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    state.open_position(ALICE_ADDRESS, ONE / 10, ONE / 10);
    assert_eq!(state.total_debt_value(), big(ONE / 10));

    state.change_timestamp(SECONDS_PER_YEAR);
    let pending = state.pending_interest();
    assert!(pending > 0u64);

    // Views already include the interest not booked yet
    let total_before = state.total_token();
    let reserve_cut = &pending * RESERVE_POOL_BPS / 10_000u64;
    assert_eq!(total_before, big(ONE) + &pending - &reserve_cut);

    state.accrue_interest();

    assert_eq!(state.total_debt_value(), big(ONE / 10) + &pending);
    assert_eq!(state.reserve_pool(), reserve_cut);
    assert_eq!(state.pending_interest(), big(0));
    assert_eq!(state.total_token(), total_before);
}

#[test]
fn test_accrual_is_idle_within_same_block() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    state.open_position(ALICE_ADDRESS, ONE / 10, ONE / 10);

    state.accrue_interest();
    state.accrue_interest();

    assert_eq!(state.total_debt_value(), big(ONE / 10));
    assert_eq!(state.reserve_pool(), big(0));
}

#[test]
fn test_lender_earns_interest_on_withdraw() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    let position_id = state.open_position(ALICE_ADDRESS, ONE / 10, ONE / 10);

    state.change_timestamp(SECONDS_PER_YEAR);
    state.accrue_interest();
    let debt = state.position_debt(position_id);

    // Close the position so the vault holds enough cash again
    let strategy = state.strategies.liquidate.clone();
    state.work(
        ALICE_ADDRESS,
        position_id,
        0,
        0,
        repay_all(),
        &strategy,
        params(0, &big(0), &big(0)),
    );
    assert_eq!(state.total_debt_value(), big(0));

    let total = state.total_token();
    let reserve = state.reserve_pool();
    assert_eq!(total, big(ONE) + &debt - big(ONE / 10) - &reserve);

    state.withdraw(LENDER_ADDRESS, &big(ONE));
    state
        .world
        .check_account(LENDER_ADDRESS)
        .esdt_balance(BASE_TOKEN, big(9) * big(ONE) + &total);
    state
        .world
        .check_account(state.vault.clone())
        .esdt_balance(BASE_TOKEN, &reserve);
}

#[test]
fn test_debt_ledger_unchanged_by_deposit_and_withdraw() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    state.open_position(ALICE_ADDRESS, ONE / 10, ONE / 10);

    let debt_value = state.total_debt_value();
    let debt_share = state.total_debt_share();

    state.deposit(BOB_ADDRESS, ONE);
    assert_eq!(state.total_debt_value(), debt_value);
    assert_eq!(state.total_debt_share(), debt_share);

    state.withdraw(BOB_ADDRESS, &big(ONE / 2));
    assert_eq!(state.total_debt_value(), debt_value);
    assert_eq!(state.total_debt_share(), debt_share);
}

#[test]
fn test_withdraw_above_cash_fails() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    state.open_position(ALICE_ADDRESS, ONE / 2, ONE / 2);

    state.withdraw_error(LENDER_ADDRESS, &big(ONE), ERROR_INSUFFICIENT_FUNDS);
}

#[test]
fn test_withdraw_reserve() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    state.open_position(ALICE_ADDRESS, ONE / 10, ONE / 10);
    state.change_timestamp(SECONDS_PER_YEAR);
    state.accrue_interest();

    let reserve = state.reserve_pool();
    assert!(reserve > 0u64);

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .withdraw_reserve(TREASURY_ADDRESS.to_managed_address(), &reserve + 1u64)
        .returns(ExpectMessage(core::str::from_utf8(ERROR_INSUFFICIENT_RESERVE).unwrap()))
        .run();

    let total_before = state.total_token();
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .withdraw_reserve(TREASURY_ADDRESS.to_managed_address(), reserve.clone())
        .run();

    state
        .world
        .check_account(TREASURY_ADDRESS)
        .esdt_balance(BASE_TOKEN, &reserve);
    assert_eq!(state.reserve_pool(), big(0));
    assert_eq!(state.total_token(), total_before);
}

#[test]
fn test_config_validation() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);
    let worker = state.worker.clone();

    // Work factor above kill factor
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .set_worker_risk(worker.clone(), true, 8_000u64, 7_000u64)
        .returns(ExpectMessage(core::str::from_utf8(ERROR_INVALID_FACTORS).unwrap()))
        .run();

    // Prize and treasury fee eat the whole health
    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .set_vault_config(
            big(MIN_DEBT_SIZE),
            RESERVE_POOL_BPS,
            9_000u64,
            1_000u64,
            TREASURY_ADDRESS.to_managed_address(),
        )
        .returns(ExpectMessage(core::str::from_utf8(ERROR_INVALID_KILL_FEES).unwrap()))
        .run();

    state
        .world
        .tx()
        .from(OWNER_ADDRESS)
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .remove_worker(LIQUIDATOR_ADDRESS.to_managed_address())
        .returns(ExpectMessage(core::str::from_utf8(ERROR_NOT_A_WORKER).unwrap()))
        .run();
}

#[test]
fn test_rates_follow_utilization() {
    let mut state = VaultTestState::new(BackingKind::SingleAsset);

    state.deposit(LENDER_ADDRESS, ONE);
    let idle_rate = state
        .world
        .query()
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .borrow_rate()
        .returns(ReturnsResult)
        .run();
    assert_eq!(idle_rate.into_raw_units(), &BigUint::from(BASE_RATE));

    state.open_position(ALICE_ADDRESS, ONE / 2, ONE / 2);

    let utilization = state
        .world
        .query()
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .utilization()
        .returns(ReturnsResult)
        .run();
    assert_eq!(utilization.into_raw_units(), &BigUint::from(MID_UTILIZATION));

    // At the first kink the curve sits exactly on base + slope1
    let borrow_rate = state
        .world
        .query()
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .borrow_rate()
        .returns(ReturnsResult)
        .run();
    assert_eq!(borrow_rate.into_raw_units(), &BigUint::from(BASE_RATE + SLOPE1));

    let deposit_rate = state
        .world
        .query()
        .to(state.vault.clone())
        .typed(proxy_vault::VaultProxy)
        .deposit_rate()
        .returns(ReturnsResult)
        .run();
    assert!(deposit_rate.into_raw_units() < borrow_rate.into_raw_units());
    assert!(deposit_rate.into_raw_units() > &BigUint::from(0u64));
}
