multiversx_sc::imports!();

use common_errors::*;
use common_proxies::proxy_worker;
use common_structs::{Position, RateModel};

use crate::{cache::Cache, storage};

/// Helpers shared by the vault endpoints: interest accrual, the debt share
/// ledger, caller and position checks, and the calls into workers.
#[multiversx_sc::module]
pub trait UtilsModule:
    storage::Storage
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Brings `total_debt_value` up to the current block.
    ///
    /// The interest is priced off utilization at the start of the period and
    /// rounded down; `reserve_pool_bps` of it is set aside in the reserve pool
    /// and the rest raises `total_token` for depositors.
    fn accrue_interest(&self, cache: &mut Cache<Self>) {
        let elapsed = cache.timestamp - cache.last_accrual_time;
        if elapsed == 0 {
            return;
        }

        let interest = self.interest_for(
            &cache.total_debt_value,
            &cache.cash,
            &cache.rate_model,
            elapsed,
        );
        if interest > 0 {
            let reserve_cut = self.calc_reserve_cut(&interest, cache.config.reserve_pool_bps);
            cache.total_debt_value += &interest;
            cache.reserve_pool += &reserve_cut;

            self.accrue_interest_event(elapsed, &interest, &reserve_cut);
        }

        cache.last_accrual_time = cache.timestamp;
    }

    fn interest_for(
        &self,
        debt: &BigUint,
        cash: &BigUint,
        model: &RateModel<Self::Api>,
        elapsed: u64,
    ) -> BigUint {
        if *debt == 0 {
            return BigUint::zero();
        }

        let utilization = self.get_utilization(debt, cash);
        let rate = self.calc_borrow_rate(utilization, model.clone());
        self.calc_interest(debt, &rate, elapsed)
    }

    /// Debt value of `share`, rounded up and capped at the total.
    fn share_to_debt_value(
        &self,
        share: &BigUint,
        total_value: &BigUint,
        total_share: &BigUint,
    ) -> BigUint {
        if *total_share == 0 {
            return share.clone();
        }
        if share == total_share {
            return total_value.clone();
        }

        let value = self.mul_div_ceil(share, total_value, total_share);
        if &value > total_value {
            total_value.clone()
        } else {
            value
        }
    }

    /// Debt shares for `value`, rounded up.
    fn debt_value_to_debt_share(
        &self,
        value: &BigUint,
        total_value: &BigUint,
        total_share: &BigUint,
    ) -> BigUint {
        if *total_share == 0 || *total_value == 0 {
            return value.clone();
        }

        self.mul_div_ceil(value, total_share, total_value)
    }

    fn add_debt(&self, position: &mut Position<Self::Api>, value: &BigUint, cache: &mut Cache<Self>) {
        if *value == 0 {
            return;
        }

        let share =
            self.debt_value_to_debt_share(value, &cache.total_debt_value, &cache.total_debt_share);
        position.debt_share += &share;
        cache.total_debt_share += share;
        cache.total_debt_value += value;
    }

    /// Takes the whole debt off `position` and returns its value.
    fn remove_debt(&self, position: &mut Position<Self::Api>, cache: &mut Cache<Self>) -> BigUint {
        if position.debt_share == 0 {
            return BigUint::zero();
        }

        let value = self.share_to_debt_value(
            &position.debt_share,
            &cache.total_debt_value,
            &cache.total_debt_share,
        );
        cache.total_debt_share -= &position.debt_share;
        cache.total_debt_value -= &value;
        position.debt_share = BigUint::zero();

        value
    }

    fn require_not_in_progress(&self) {
        require!(!self.in_progress().get(), ERROR_REENTRANT_CALL);
    }

    /// Wallets are always welcome; contracts must be whitelisted.
    fn require_eligible_caller(&self, caller: &ManagedAddress) {
        if self.blockchain().is_smart_contract(caller) {
            require!(
                self.whitelisted_callers().contains(caller),
                ERROR_NOT_ELIGIBLE_CALLER
            );
        }
    }

    fn require_existing_position(&self, position_id: u64) -> Position<Self::Api> {
        require!(
            position_id > 0 && position_id < self.next_position_id().get(),
            ERROR_BAD_POSITION_ID
        );
        self.positions(position_id).get()
    }

    /// Runs `worker.work` with the in-progress flag raised and returns the base
    /// token sent back.
    fn call_worker_work(
        &self,
        worker: &ManagedAddress,
        position_id: u64,
        user: &ManagedAddress,
        debt: &BigUint,
        strategy: &ManagedAddress,
        strategy_params: &ManagedBuffer,
        payments: ManagedVec<EsdtTokenPayment>,
        base_token: &TokenIdentifier,
    ) -> BigUint {
        self.in_progress().set(true);
        let back_transfers = self
            .tx()
            .to(worker)
            .typed(proxy_worker::WorkerProxy)
            .work(position_id, user, debt, strategy, strategy_params)
            .payment(payments)
            .returns(ReturnsBackTransfersLegacyReset)
            .sync_call();
        self.in_progress().clear();

        self.sum_base_returned(&back_transfers, base_token)
    }

    fn call_worker_liquidate(
        &self,
        worker: &ManagedAddress,
        position_id: u64,
        base_token: &TokenIdentifier,
    ) -> BigUint {
        self.in_progress().set(true);
        let back_transfers = self
            .tx()
            .to(worker)
            .typed(proxy_worker::WorkerProxy)
            .liquidate(position_id)
            .returns(ReturnsBackTransfersLegacyReset)
            .sync_call();
        self.in_progress().clear();

        self.sum_base_returned(&back_transfers, base_token)
    }

    fn sum_base_returned(
        &self,
        back_transfers: &BackTransfersLegacy<Self::Api>,
        base_token: &TokenIdentifier,
    ) -> BigUint {
        let mut amount = BigUint::zero();
        for payment in back_transfers.esdt_payments.iter() {
            if &payment.token_identifier == base_token {
                amount += &payment.amount;
            }
        }

        amount
    }

    fn worker_health(&self, worker: &ManagedAddress, position_id: u64) -> BigUint {
        self.tx()
            .to(worker)
            .typed(proxy_worker::WorkerProxy)
            .health(position_id)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn worker_is_stable(&self, worker: &ManagedAddress) -> bool {
        self.tx()
            .to(worker)
            .typed(proxy_worker::WorkerProxy)
            .is_stable()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    /// Incoming payments as plain ESDT transfers, ready to forward.
    fn received_payments(&self) -> ManagedVec<EsdtTokenPayment> {
        let mut payments = ManagedVec::new();
        for payment in self.call_value().all_transfers().iter() {
            payments.push(EsdtTokenPayment::new(
                payment.token_identifier.clone().unwrap_esdt(),
                payment.token_nonce,
                payment.amount.clone(),
            ));
        }

        payments
    }

    fn emit_vault_state(&self, cache: &Cache<Self>) {
        self.update_vault_state_event(
            cache.timestamp,
            &cache.total_debt_value,
            &cache.total_debt_share,
            &cache.reserve_pool,
            &cache.pool_share_supply,
        );
    }
}
