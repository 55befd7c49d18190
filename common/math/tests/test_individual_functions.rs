// Standalone tests for the shared math helpers
// Run with: cargo test --test test_individual_functions test_name

use multiversx_sc::types::{BigUint, ManagedDecimal};
use multiversx_sc_scenario::api::StaticApi;

use common_math::SharedMathModule;

pub struct MathTester;

impl multiversx_sc::contract_base::ContractBase for MathTester {
    type Api = StaticApi;
}

impl SharedMathModule for MathTester {}

fn big(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

#[test]
fn test_mul_div_floor_truncates() {
    let tester = MathTester;

    // 10 * 7 / 3 = 23.33
    assert_eq!(tester.mul_div_floor(&big(10), &big(7), &big(3)), big(23));
    assert_eq!(tester.mul_div_floor(&big(9), &big(2), &big(3)), big(6));
}

#[test]
fn test_mul_div_ceil_rounds_up_only_on_remainder() {
    let tester = MathTester;

    assert_eq!(tester.mul_div_ceil(&big(10), &big(7), &big(3)), big(24));
    // exact division must not be bumped
    assert_eq!(tester.mul_div_ceil(&big(9), &big(2), &big(3)), big(6));
    assert_eq!(tester.mul_div_ceil(&big(0), &big(5), &big(3)), big(0));
}

#[test]
fn test_apply_bps() {
    let tester = MathTester;

    assert_eq!(tester.apply_bps(&big(1_000_000), 1_000), big(100_000));
    assert_eq!(tester.apply_bps(&big(999), 100), big(9));
    assert_eq!(tester.apply_bps(&big(12_345), 10_000), big(12_345));
}

#[test]
fn test_min_amount() {
    let tester = MathTester;

    assert_eq!(tester.min_amount(big(3), big(5)), big(3));
    assert_eq!(tester.min_amount(big(5), big(3)), big(3));
}

#[test]
fn test_ray_zero() {
    let tester = MathTester;

    let result = tester.ray_zero();
    assert_eq!(result.into_raw_units(), &BigUint::<StaticApi>::zero());
    assert_eq!(result.scale(), 27);
}

#[test]
fn test_mul_half_up() {
    let tester = MathTester;

    // 1.5 * 2.0 = 3.0 with WAD precision
    let a = ManagedDecimal::<StaticApi, usize>::from_raw_units(
        BigUint::from(1_500_000_000_000_000_000u64),
        18,
    );
    let b = ManagedDecimal::<StaticApi, usize>::from_raw_units(
        BigUint::from(2_000_000_000_000_000_000u64),
        18,
    );

    let result = tester.mul_half_up(&a, &b, 18);

    assert_eq!(
        result.into_raw_units(),
        &BigUint::<StaticApi>::from(3_000_000_000_000_000_000u64)
    );
}

#[test]
fn test_div_half_up_rounds_to_nearest() {
    let tester = MathTester;

    // 2 / 3 at 2 decimals = 0.666.. -> 0.67
    let a = tester.to_decimal(big(2), 0);
    let b = tester.to_decimal(big(3), 0);

    let result = tester.div_half_up(&a, &b, 2);
    assert_eq!(result.into_raw_units(), &big(67));
}
