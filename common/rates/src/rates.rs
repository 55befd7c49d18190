#![no_std]
use common_constants::{BPS, RAY, RAY_PRECISION, SECONDS_PER_YEAR};
use common_structs::RateModel;

multiversx_sc::imports!();

/// The InterestRates module prices vault debt from pool utilization and splits
/// the accrued interest between depositors and the reserve pool.
///
/// **Scope**: Pure functions, no storage. The vault feeds in its ledgers and applies the results.
///
/// **Goal**: A continuous, monotone borrow curve and floor-rounded interest so accrual never
/// credits depositors more than borrowers owe.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the per-second borrow rate for a given utilization.
    ///
    /// **Formula**:
    /// - If `utilization < mid_utilization`: `base_rate + (utilization * slope1 / mid_utilization)`.
    /// - If `mid_utilization <= utilization < optimal_utilization`: `base_rate + slope1 + ((utilization - mid_utilization) * slope2 / (optimal_utilization - mid_utilization))`.
    /// - If `utilization >= optimal_utilization`: `base_rate + slope1 + slope2 + ((utilization - optimal_utilization) * slope3 / (RAY - optimal_utilization))`.
    /// - The annual rate is capped at `max_rate` and divided by `SECONDS_PER_YEAR`.
    ///
    /// # Arguments
    /// - `utilization`: Current pool utilization ratio, RAY-based.
    /// - `model`: The vault's rate model.
    ///
    /// # Returns
    /// - `ManagedDecimal<Self::Api, NumDecimals>`: Per-second borrow rate (RAY-based).
    fn calc_borrow_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        model: RateModel<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let annual_rate = self.calc_annual_borrow_rate(utilization, model);

        self.div_half_up(
            &annual_rate,
            &self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0),
            RAY_PRECISION,
        )
    }

    /// Annualised, capped form of [`calc_borrow_rate`], exposed for views.
    fn calc_annual_borrow_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        model: RateModel<Self::Api>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let annual_rate = if utilization < model.mid_utilization {
            // Region 1: utilization < mid_utilization
            let utilization_ratio = utilization.mul(model.slope1).div(model.mid_utilization);
            model.base_rate.add(utilization_ratio)
        } else if utilization < model.optimal_utilization {
            // Region 2: mid_utilization <= utilization < optimal_utilization
            let excess_utilization = utilization.sub(model.mid_utilization.clone());
            let slope_contribution = excess_utilization
                .mul(model.slope2)
                .div(model.optimal_utilization.sub(model.mid_utilization));
            model.base_rate.add(model.slope1).add(slope_contribution)
        } else {
            // Region 3: utilization >= optimal_utilization
            let base_rate = model.base_rate.add(model.slope1).add(model.slope2);
            let excess_utilization = utilization.sub(model.optimal_utilization.clone());
            let slope_contribution = excess_utilization
                .mul(model.slope3)
                .div(self.ray().sub(model.optimal_utilization));
            base_rate.add(slope_contribution)
        };

        if annual_rate > model.max_rate {
            model.max_rate
        } else {
            annual_rate
        }
    }

    /// Calculates the rate depositors earn after the reserve cut.
    ///
    /// **Formula**: `deposit_rate = utilization * borrow_rate * (1 - reserve_pool_bps / 10000)`.
    fn calc_deposit_rate(
        &self,
        utilization: ManagedDecimal<Self::Api, NumDecimals>,
        borrow_rate: ManagedDecimal<Self::Api, NumDecimals>,
        reserve_pool_bps: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if utilization == self.ray_zero() {
            return self.ray_zero();
        }

        let depositor_share = self
            .bps()
            .sub(self.to_decimal_bps(BigUint::from(reserve_pool_bps)));

        self.mul_half_up(
            &self.mul_half_up(&utilization, &borrow_rate, RAY_PRECISION),
            &depositor_share,
            RAY_PRECISION,
        )
    }

    /// Interest owed on `debt` for `elapsed` seconds at a per-second RAY `rate`.
    ///
    /// Rounded down: `debt * rate * elapsed / RAY`.
    fn calc_interest(
        &self,
        debt: &BigUint,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        elapsed: u64,
    ) -> BigUint {
        let rate_ray = rate.rescale(RAY_PRECISION);
        debt * rate_ray.into_raw_units() * elapsed / BigUint::from(RAY)
    }

    fn calc_reserve_cut(&self, interest: &BigUint, reserve_pool_bps: u64) -> BigUint {
        interest * reserve_pool_bps / BPS
    }

    /// `debt / (debt + floating)` in RAY. Zero when the pool is empty.
    fn get_utilization(
        &self,
        debt: &BigUint,
        floating: &BigUint,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let total = debt + floating;
        if total == 0u64 {
            return self.ray_zero();
        }

        self.to_decimal_ray(debt * &BigUint::from(RAY) / total)
    }

    fn is_valid_rate_model(&self, model: &RateModel<Self::Api>) -> bool {
        let zero = self.ray_zero();

        model.mid_utilization > zero
            && model.mid_utilization < model.optimal_utilization
            && model.optimal_utilization < self.ray()
            && model.max_rate >= model.base_rate
    }
}
