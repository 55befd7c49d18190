multiversx_sc::imports!();

use common_errors::*;

use crate::{cache::Cache, storage, utils};

#[multiversx_sc::module]
pub trait LiquidationModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Liquidates a position whose debt crossed the worker's kill factor.
    ///
    /// **Process**:
    /// 1. Takes the whole debt off the ledger and reads the position health.
    /// 2. Has the worker unwind the position into base token.
    /// 3. Pays the liquidator prize, then the treasury fee, both computed on
    ///    health and capped by what came back.
    /// 4. Repays as much debt as the rest covers and sends any surplus to the owner.
    /// 5. A shortfall is covered from the reserve pool first; whatever the
    ///    reserve cannot cover is written off against depositors.
    ///
    /// # Returns
    /// - `BigUint`: The liquidator prize.
    #[endpoint(kill)]
    fn kill(&self, position_id: u64) -> BigUint {
        self.require_not_in_progress();
        let caller = self.blockchain().get_caller();
        require!(
            self.whitelisted_liquidators().contains(&caller),
            ERROR_NOT_WHITELISTED_LIQUIDATOR
        );

        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        let mut position = self.require_existing_position(position_id);
        require!(position.debt_share > 0, ERROR_NO_DEBT);

        let worker = position.worker.clone();
        let debt = self.remove_debt(&mut position, &mut cache);
        let health = self.worker_health(&worker, position_id);
        require!(self.worker_is_stable(&worker), ERROR_WORKER_UNSTABLE);

        let risk = self.worker_risk(&worker).get();
        require!(risk.is_killable(&health, &debt), ERROR_CANNOT_LIQUIDATE);

        self.positions(position_id).set(&position);
        let back = self.call_worker_liquidate(&worker, position_id, &cache.base_token);

        let prize = self.min_amount(
            self.apply_bps(&health, cache.config.kill_prize_bps),
            back.clone(),
        );
        let after_prize = &back - &prize;
        let treasury_fee = self.min_amount(
            self.apply_bps(&health, cache.config.kill_treasury_bps),
            after_prize.clone(),
        );
        let rest = &after_prize - &treasury_fee;
        let repaid = self.min_amount(debt.clone(), rest.clone());
        let left = &rest - &repaid;

        self.tx()
            .to(&caller)
            .single_esdt(&cache.base_token, 0, &prize)
            .transfer_if_not_empty();
        self.tx()
            .to(&cache.config.treasury)
            .single_esdt(&cache.base_token, 0, &treasury_fee)
            .transfer_if_not_empty();
        self.tx()
            .to(&position.owner)
            .single_esdt(&cache.base_token, 0, &left)
            .transfer_if_not_empty();
        cache.refresh_cash();

        if repaid < debt {
            let shortfall = &debt - &repaid;
            let covered = self.min_amount(shortfall.clone(), cache.reserve_pool.clone());
            let socialized = &shortfall - &covered;
            cache.reserve_pool -= &covered;
            cache.bad_debt += &socialized;

            self.bad_debt_event(position_id, &shortfall, &covered, &socialized);
        }

        self.kill_event(
            position_id,
            &caller,
            &position.owner,
            &health,
            &debt,
            &prize,
            &treasury_fee,
            &left,
        );
        self.emit_vault_state(&cache);

        prize
    }
}
