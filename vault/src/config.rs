multiversx_sc::imports!();

use common_constants::BPS;
use common_errors::*;
use common_structs::{RateModel, VaultConfig, WorkerRisk};

use crate::{cache::Cache, storage, utils};

/// Owner-only governance of the vault: policy parameters, the rate curve,
/// per-worker risk and the whitelists, plus reserve pool withdrawals.
#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + utils::UtilsModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
{
    /// Issues the interest-bearing share token and grants the vault its
    /// mint and burn roles.
    ///
    /// # Payment Required
    /// - EGLD for the ESDT issuance fee.
    #[only_owner]
    #[payable("EGLD")]
    #[endpoint(registerIbToken)]
    fn register_ib_token(
        &self,
        token_display_name: ManagedBuffer,
        token_ticker: ManagedBuffer,
        num_decimals: usize,
    ) {
        let payment_amount = self.call_value().egld();
        self.ib_token().issue_and_set_all_roles(
            payment_amount.clone_value(),
            token_display_name,
            token_ticker,
            num_decimals,
            None,
        );
    }

    #[only_owner]
    #[endpoint(setVaultConfig)]
    fn set_vault_config(
        &self,
        min_debt_size: BigUint,
        reserve_pool_bps: u64,
        kill_prize_bps: u64,
        kill_treasury_bps: u64,
        treasury: ManagedAddress,
    ) {
        let config = VaultConfig {
            min_debt_size,
            reserve_pool_bps,
            kill_prize_bps,
            kill_treasury_bps,
            treasury,
        };
        self.require_valid_vault_config(&config);

        // settle accrued interest under the old reserve cut
        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        self.vault_config().set(&config);
        self.update_vault_config_event(&config);
    }

    /// Replaces the borrow rate curve. Every argument is a RAY-scaled annual figure.
    #[only_owner]
    #[endpoint(setRateModel)]
    fn set_rate_model(
        &self,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
    ) {
        let model = self.rate_model_from_raw(
            base_rate,
            slope1,
            slope2,
            slope3,
            mid_utilization,
            optimal_utilization,
            max_rate,
        );
        require!(self.is_valid_rate_model(&model), ERROR_INVALID_RATE_MODEL);

        // the elapsed period is priced with the curve that was in force
        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        self.rate_model().set(&model);
        self.update_rate_model_event(&model);
    }

    /// Registers or updates a worker. `work_factor_bps <= kill_factor_bps <= 10000`.
    #[only_owner]
    #[endpoint(setWorkerRisk)]
    fn set_worker_risk(
        &self,
        worker: ManagedAddress,
        accept_debt: bool,
        work_factor_bps: u64,
        kill_factor_bps: u64,
    ) {
        require!(
            work_factor_bps <= kill_factor_bps && kill_factor_bps <= BPS,
            ERROR_INVALID_FACTORS
        );

        let risk = WorkerRisk {
            accept_debt,
            work_factor_bps,
            kill_factor_bps,
        };
        self.workers().insert(worker.clone());
        self.worker_risk(&worker).set(risk);

        self.update_worker_risk_event(&worker, &risk);
    }

    /// Stops new positions on `worker`. Existing positions keep their risk
    /// parameters so they can still be liquidated.
    #[only_owner]
    #[endpoint(removeWorker)]
    fn remove_worker(&self, worker: ManagedAddress) {
        require!(self.workers().swap_remove(&worker), ERROR_NOT_A_WORKER);
    }

    #[only_owner]
    #[endpoint(setWhitelistedLiquidators)]
    fn set_whitelisted_liquidators(&self, ok: bool, liquidators: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.whitelisted_liquidators();
        for liquidator in liquidators {
            if ok {
                mapper.insert(liquidator);
            } else {
                mapper.swap_remove(&liquidator);
            }
        }
    }

    #[only_owner]
    #[endpoint(setWhitelistedCallers)]
    fn set_whitelisted_callers(&self, ok: bool, callers: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.whitelisted_callers();
        for caller in callers {
            if ok {
                mapper.insert(caller);
            } else {
                mapper.swap_remove(&caller);
            }
        }
    }

    #[only_owner]
    #[endpoint(setApprovedAddStrategies)]
    fn set_approved_add_strategies(&self, ok: bool, strategies: MultiValueEncoded<ManagedAddress>) {
        let mut mapper = self.approved_add_strategies();
        for strategy in strategies {
            if ok {
                mapper.insert(strategy);
            } else {
                mapper.swap_remove(&strategy);
            }
        }
    }

    /// Sends `amount` of the reserve pool to `to`.
    #[only_owner]
    #[endpoint(withdrawReserve)]
    fn withdraw_reserve(&self, to: ManagedAddress, amount: BigUint) {
        self.require_not_in_progress();

        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        require!(amount <= cache.reserve_pool, ERROR_INSUFFICIENT_RESERVE);
        require!(amount <= cache.cash, ERROR_INSUFFICIENT_FUNDS);
        cache.reserve_pool -= &amount;

        self.tx()
            .to(&to)
            .single_esdt(&cache.base_token, 0, &amount)
            .transfer_if_not_empty();
        cache.refresh_cash();

        self.reserve_withdrawn_event(&to, &amount, &cache.reserve_pool);
        self.emit_vault_state(&cache);
    }

    /// Releases `amount` of the reserve pool to depositors.
    #[only_owner]
    #[endpoint(reduceReserve)]
    fn reduce_reserve(&self, amount: BigUint) {
        self.require_not_in_progress();

        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        require!(amount <= cache.reserve_pool, ERROR_INSUFFICIENT_RESERVE);
        cache.reserve_pool -= &amount;

        self.emit_vault_state(&cache);
    }

    fn require_valid_vault_config(&self, config: &VaultConfig<Self::Api>) {
        require!(config.reserve_pool_bps <= BPS, ERROR_INVALID_BPS);
        require!(
            config.kill_prize_bps + config.kill_treasury_bps < BPS,
            ERROR_INVALID_KILL_FEES
        );
    }

    fn rate_model_from_raw(
        &self,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
    ) -> RateModel<Self::Api> {
        RateModel {
            base_rate: self.to_decimal_ray(base_rate),
            slope1: self.to_decimal_ray(slope1),
            slope2: self.to_decimal_ray(slope2),
            slope3: self.to_decimal_ray(slope3),
            mid_utilization: self.to_decimal_ray(mid_utilization),
            optimal_utilization: self.to_decimal_ray(optimal_utilization),
            max_rate: self.to_decimal_ray(max_rate),
        }
    }
}
