multiversx_sc::imports!();

use common_constants::RAY_PRECISION;

use crate::{storage, utils};

/// Read-only figures for depositors, borrowers and keepers.
///
/// Views price interest up to the current block without writing it, so they
/// match what the next state-changing call would see.
#[multiversx_sc::module]
pub trait ViewModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Base token owed to ib token holders: `cash + total_debt_value - reserve_pool`,
    /// pending interest included.
    #[view(getTotalToken)]
    fn get_total_token(&self) -> BigUint {
        let cash = self.cash();
        let (debt, reserve) = self.accrued_ledgers(&cash);

        let gross = cash + debt;
        if gross > reserve {
            gross - reserve
        } else {
            BigUint::zero()
        }
    }

    /// `(health, debt)` of a position at the current block.
    #[view(getPositionInfo)]
    fn get_position_info(&self, position_id: u64) -> MultiValue2<BigUint, BigUint> {
        let position = self.require_existing_position(position_id);
        let health = self.worker_health(&position.worker, position_id);
        let debt = self.debt_share_to_value(position.debt_share);

        (health, debt).into()
    }

    #[view(debtShareToValue)]
    fn debt_share_to_value(&self, share: BigUint) -> BigUint {
        let (debt, _) = self.accrued_ledgers(&self.cash());
        self.share_to_debt_value(&share, &debt, &self.total_debt_share().get())
    }

    #[view(debtValueToShare)]
    fn debt_value_to_share(&self, value: BigUint) -> BigUint {
        let (debt, _) = self.accrued_ledgers(&self.cash());
        self.debt_value_to_debt_share(&value, &debt, &self.total_debt_share().get())
    }

    /// Interest accrued since the last accrual and not yet booked.
    #[view(pendingInterest)]
    fn pending_interest(&self) -> BigUint {
        let elapsed = self.blockchain().get_block_timestamp() - self.last_accrual_time().get();
        self.interest_for(
            &self.total_debt_value().get(),
            &self.cash(),
            &self.rate_model().get(),
            elapsed,
        )
    }

    #[view(getUtilization)]
    fn utilization(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.get_utilization(&self.total_debt_value().get(), &self.cash())
    }

    /// Annual borrow rate, RAY-scaled.
    #[view(getBorrowRate)]
    fn borrow_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.calc_annual_borrow_rate(self.utilization(), self.rate_model().get())
    }

    /// Annual rate earned by depositors after the reserve cut, RAY-scaled.
    #[view(getDepositRate)]
    fn deposit_rate(&self) -> ManagedDecimal<Self::Api, NumDecimals> {
        let utilization = self.utilization();
        let borrow_rate = self.borrow_rate();
        let deposit_rate = self.calc_deposit_rate(
            utilization,
            borrow_rate,
            self.vault_config().get().reserve_pool_bps,
        );

        deposit_rate.rescale(RAY_PRECISION)
    }

    fn cash(&self) -> BigUint {
        self.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(self.base_token().get()),
            0,
        )
    }

    /// `(total_debt_value, reserve_pool)` as they would be after accruing now.
    fn accrued_ledgers(&self, cash: &BigUint) -> (BigUint, BigUint) {
        let mut debt = self.total_debt_value().get();
        let mut reserve = self.reserve_pool().get();

        let elapsed = self.blockchain().get_block_timestamp() - self.last_accrual_time().get();
        if elapsed > 0 {
            let interest = self.interest_for(&debt, cash, &self.rate_model().get(), elapsed);
            reserve += self.calc_reserve_cut(&interest, self.vault_config().get().reserve_pool_bps);
            debt += interest;
        }

        (debt, reserve)
    }
}
