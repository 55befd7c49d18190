multiversx_sc::imports!();

use common_constants::NEW_POSITION_ID;
use common_errors::*;
use common_structs::Position;

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait PositionsModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Opens or adjusts a leveraged position.
    ///
    /// **Process**:
    /// 1. Resolves the position (`position_id == 0` opens a new one owned by the caller).
    /// 2. Takes the position's whole debt off the ledger and adds `borrow_amount` to it.
    /// 3. Sends the payment plus the borrowed base token to `worker.work`.
    /// 4. Repays `min(debt, returned, max_return)` out of the base token the worker sent back.
    /// 5. Re-records any remaining debt, which must meet the minimum size and the
    ///    worker's work factor, and hands the rest of the returned base token to the caller.
    ///
    /// # Returns
    /// - `u64`: The position id, fresh or unchanged.
    #[payable]
    #[endpoint(work)]
    fn work(
        &self,
        position_id: u64,
        worker: ManagedAddress,
        borrow_amount: BigUint,
        max_return: BigUint,
        strategy: ManagedAddress,
        strategy_params: ManagedBuffer,
    ) -> u64 {
        self.require_not_in_progress();
        let caller = self.blockchain().get_caller();
        self.require_eligible_caller(&caller);

        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        let (position_id, mut position) = if position_id == NEW_POSITION_ID {
            let id = self.next_position_id().get();
            self.next_position_id().set(id + 1);
            (
                id,
                Position {
                    worker: worker.clone(),
                    owner: caller.clone(),
                    debt_share: BigUint::zero(),
                },
            )
        } else {
            let position = self.require_existing_position(position_id);
            require!(position.worker == worker, ERROR_BAD_POSITION_WORKER);
            require!(position.owner == caller, ERROR_NOT_POSITION_OWNER);
            (position_id, position)
        };

        require!(self.workers().contains(&worker), ERROR_NOT_A_WORKER);
        let risk = self.worker_risk(&worker).get();
        require!(
            borrow_amount == 0 || risk.accept_debt,
            ERROR_WORKER_NOT_ACCEPT_DEBT
        );

        let mut debt = self.remove_debt(&mut position, &mut cache) + &borrow_amount;
        require!(
            borrow_amount <= cache.available_cash(),
            ERROR_INSUFFICIENT_FUNDS
        );

        let mut payments = self.received_payments();
        if borrow_amount > 0 {
            payments.push(EsdtTokenPayment::new(
                cache.base_token.clone(),
                0,
                borrow_amount.clone(),
            ));
        }

        let back = self.call_worker_work(
            &worker,
            position_id,
            &caller,
            &debt,
            &strategy,
            &strategy_params,
            payments,
            &cache.base_token,
        );

        let repaid = self.min_amount(self.min_amount(debt.clone(), back.clone()), max_return);
        debt -= &repaid;

        if debt > 0 {
            require!(
                debt >= cache.config.min_debt_size,
                ERROR_TOO_SMALL_DEBT_SIZE
            );
            require!(self.worker_is_stable(&worker), ERROR_WORKER_UNSTABLE);

            let health = self.worker_health(&worker, position_id);
            require!(
                risk.within_work_factor(&health, &debt),
                ERROR_BAD_WORK_FACTOR
            );

            self.add_debt(&mut position, &debt, &mut cache);
        }
        self.positions(position_id).set(&position);

        self.tx()
            .to(&caller)
            .single_esdt(&cache.base_token, 0, &(&back - &repaid))
            .transfer_if_not_empty();
        cache.refresh_cash();

        self.work_event(position_id, &worker, &caller, &borrow_amount, &repaid, &debt);
        self.emit_vault_state(&cache);

        position_id
    }

    /// Tops up a position through an approved add strategy without borrowing.
    ///
    /// Without `go_rogue` the usual stability and work-factor checks apply to
    /// the result. With it only an improvement in health is required, which
    /// lets owners rescue positions while the price gate is closed.
    #[payable]
    #[endpoint(addCollateral)]
    fn add_collateral(
        &self,
        position_id: u64,
        go_rogue: bool,
        strategy: ManagedAddress,
        strategy_params: ManagedBuffer,
    ) {
        self.require_not_in_progress();
        let caller = self.blockchain().get_caller();
        self.require_eligible_caller(&caller);

        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        let position = self.require_existing_position(position_id);
        require!(position.owner == caller, ERROR_NOT_POSITION_OWNER);
        require!(
            self.approved_add_strategies().contains(&strategy),
            ERROR_UNAPPROVED_ADD_STRATEGY
        );

        let worker = position.worker.clone();
        let debt = self.share_to_debt_value(
            &position.debt_share,
            &cache.total_debt_value,
            &cache.total_debt_share,
        );

        let health_before = self.worker_health(&worker, position_id);
        let back = self.call_worker_work(
            &worker,
            position_id,
            &caller,
            &debt,
            &strategy,
            &strategy_params,
            self.received_payments(),
            &cache.base_token,
        );
        let health_after = self.worker_health(&worker, position_id);

        if go_rogue {
            require!(health_after > health_before, ERROR_HEALTH_NOT_IMPROVED);
        } else {
            require!(self.worker_is_stable(&worker), ERROR_WORKER_UNSTABLE);
            let risk = self.worker_risk(&worker).get();
            require!(
                risk.within_work_factor(&health_after, &debt),
                ERROR_BAD_WORK_FACTOR
            );
        }

        self.tx()
            .to(&caller)
            .single_esdt(&cache.base_token, 0, &back)
            .transfer_if_not_empty();
        cache.refresh_cash();

        self.add_collateral_event(position_id, &caller, go_rogue, &health_before, &health_after);
        self.emit_vault_state(&cache);
    }
}
