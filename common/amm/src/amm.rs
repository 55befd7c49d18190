#![no_std]

use common_constants::FEE_DENOMINATOR;
use common_errors::{ERROR_INSUFFICIENT_OUTPUT, ERROR_INSUFFICIENT_RESERVES};

multiversx_sc::imports!();

pub mod calls;

/// Constant-product pair math shared by the pair, the worker and the strategies.
///
/// Every function is integer math on `BigUint` rounded down, so that a value
/// computed off-pair matches what the pair pays out to the wei. `fee_numerator`
/// is the part of the input the pair keeps working with, over `FEE_DENOMINATOR`
/// (9975 means a 0.25% fee).
#[multiversx_sc::module]
pub trait AmmMathModule {
    /// Output of a fixed-input swap.
    ///
    /// `out = in * fee * reserve_out / (reserve_in * denom + in * fee)`
    fn get_amount_out(
        &self,
        amount_in: &BigUint,
        reserve_in: &BigUint,
        reserve_out: &BigUint,
        fee_numerator: u64,
    ) -> BigUint {
        if *amount_in == 0u64 {
            return BigUint::zero();
        }
        require!(
            *reserve_in > 0u64 && *reserve_out > 0u64,
            ERROR_INSUFFICIENT_RESERVES
        );

        let amount_in_with_fee = amount_in * fee_numerator;
        let numerator = &amount_in_with_fee * reserve_out;
        let denominator = reserve_in * FEE_DENOMINATOR + amount_in_with_fee;

        numerator / denominator
    }

    /// Input needed for a fixed-output swap, rounded up by one unit.
    ///
    /// `in = reserve_in * out * denom / ((reserve_out - out) * fee) + 1`
    fn get_amount_in(
        &self,
        amount_out: &BigUint,
        reserve_in: &BigUint,
        reserve_out: &BigUint,
        fee_numerator: u64,
    ) -> BigUint {
        require!(*amount_out > 0u64, ERROR_INSUFFICIENT_OUTPUT);
        require!(
            *reserve_in > 0u64 && reserve_out > amount_out,
            ERROR_INSUFFICIENT_RESERVES
        );

        let numerator = reserve_in * amount_out * FEE_DENOMINATOR;
        let denominator = (reserve_out - amount_out) * fee_numerator;

        numerator / denominator + 1u64
    }

    /// Amount of B matching `amount_a` at the current price, without fee.
    fn quote(&self, amount_a: &BigUint, reserve_a: &BigUint, reserve_b: &BigUint) -> BigUint {
        require!(*reserve_a > 0u64, ERROR_INSUFFICIENT_RESERVES);

        amount_a * reserve_b / reserve_a
    }

    /// Part of a single-token `amount` to swap so that the remainder and the
    /// swap output match the post-swap pool ratio.
    ///
    /// Root of `fee * s^2 + (denom + fee) * R * s - amount * denom * R = 0`,
    /// clamped to `amount`.
    fn optimal_one_sided_swap(
        &self,
        amount: &BigUint,
        reserve_in: &BigUint,
        fee_numerator: u64,
    ) -> BigUint {
        if *amount == 0u64 || *reserve_in == 0u64 {
            return BigUint::zero();
        }

        let a = BigUint::from(fee_numerator);
        let b = reserve_in * (FEE_DENOMINATOR + fee_numerator);
        let c = amount * FEE_DENOMINATOR * reserve_in;

        let swap_amount = self.solve_swap_quadratic(&a, &b, &c);
        if &swap_amount > amount {
            amount.clone()
        } else {
            swap_amount
        }
    }

    /// Swap needed to add `amount_a` and `amount_b` at the pool ratio.
    ///
    /// Returns `(swap_amount, is_reversed)`. When `is_reversed` is false A is in
    /// excess and `swap_amount` of A goes in for B, otherwise B is swapped for A.
    fn optimal_two_sided_swap(
        &self,
        amount_a: &BigUint,
        amount_b: &BigUint,
        reserve_a: &BigUint,
        reserve_b: &BigUint,
        fee_numerator: u64,
    ) -> (BigUint, bool) {
        if amount_a * reserve_b >= amount_b * reserve_a {
            let swap = self.excess_swap_amount(amount_a, amount_b, reserve_a, reserve_b, fee_numerator);
            (swap, false)
        } else {
            let swap = self.excess_swap_amount(amount_b, amount_a, reserve_b, reserve_a, fee_numerator);
            (swap, true)
        }
    }

    /// Assumes `amount_a` is the side in excess.
    fn excess_swap_amount(
        &self,
        amount_a: &BigUint,
        amount_b: &BigUint,
        reserve_a: &BigUint,
        reserve_b: &BigUint,
        fee_numerator: u64,
    ) -> BigUint {
        if *reserve_a == 0u64 || *reserve_b == 0u64 {
            return BigUint::zero();
        }

        let imbalance = amount_a * reserve_b - amount_b * reserve_a;
        if imbalance == 0u64 {
            return BigUint::zero();
        }

        let a = BigUint::from(fee_numerator);
        let b = reserve_a * (FEE_DENOMINATOR + fee_numerator);
        let c = imbalance * FEE_DENOMINATOR / (amount_b + reserve_b) * reserve_a;

        self.solve_swap_quadratic(&a, &b, &c)
    }

    /// Positive root of `a*x^2 + b*x - c = 0`, floored.
    fn solve_swap_quadratic(&self, a: &BigUint, b: &BigUint, c: &BigUint) -> BigUint {
        let discriminant = b * b + a * c * 4u64;
        let root = discriminant.sqrt();
        if &root <= b {
            return BigUint::zero();
        }

        (root - b) / (a * 2u64)
    }
}
