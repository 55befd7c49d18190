#![no_std]

multiversx_sc::imports!();

pub mod cache;
pub mod config;
pub mod liquidation;
pub mod positions;
pub mod storage;
pub mod utils;
pub mod view;
pub use common_events::*;

use common_errors::*;
use common_structs::VaultConfig;

use crate::cache::Cache;

/// Lending vault behind leveraged farming positions.
///
/// Depositors supply the base token against ib token shares. Whitelisted
/// workers borrow it on behalf of positions, and the debt grows with the
/// utilization-priced borrow rate until it is repaid or liquidated.
#[multiversx_sc::contract]
pub trait Vault:
    storage::Storage
    + utils::UtilsModule
    + positions::PositionsModule
    + liquidation::LiquidationModule
    + config::ConfigModule
    + view::ViewModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_rates::InterestRates
    + multiversx_sc_modules::default_issue_callbacks::DefaultIssueCallbacksModule
{
    /// Initializes the vault for `base_token`.
    ///
    /// Rate arguments are RAY-scaled annual figures; fee arguments are bps.
    /// The ib token is issued afterwards through `registerIbToken`.
    #[init]
    fn init(
        &self,
        base_token: TokenIdentifier,
        base_rate: BigUint,
        slope1: BigUint,
        slope2: BigUint,
        slope3: BigUint,
        mid_utilization: BigUint,
        optimal_utilization: BigUint,
        max_rate: BigUint,
        min_debt_size: BigUint,
        reserve_pool_bps: u64,
        kill_prize_bps: u64,
        kill_treasury_bps: u64,
        treasury: ManagedAddress,
    ) {
        require!(base_token.is_valid_esdt_identifier(), ERROR_INVALID_ASSET);

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

        let config = VaultConfig {
            min_debt_size,
            reserve_pool_bps,
            kill_prize_bps,
            kill_treasury_bps,
            treasury,
        };
        self.require_valid_vault_config(&config);

        self.base_token().set(&base_token);
        self.rate_model().set(&model);
        self.vault_config().set(&config);
        self.next_position_id().set(1);
        self.last_accrual_time()
            .set(self.blockchain().get_block_timestamp());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies base token and mints ib token to the caller.
    ///
    /// The first deposit, or any deposit into an emptied vault, mints 1:1.
    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self) {
        self.require_not_in_progress();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();

        let mut cache = Cache::new(self);
        require!(
            payment.token_identifier == cache.base_token,
            ERROR_INVALID_ASSET
        );
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        self.accrue_interest(&mut cache);

        let total_token = cache.total_token();
        let shares = if cache.pool_share_supply == 0 || total_token == 0 {
            payment.amount.clone()
        } else {
            &payment.amount * &cache.pool_share_supply / &total_token
        };
        require!(shares > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        cache.pool_share_supply += &shares;
        cache.refresh_cash();
        self.ib_token().mint_and_send(&caller, shares.clone());

        self.deposit_event(&caller, &payment.amount, &shares);
        self.emit_vault_state(&cache);
    }

    /// Burns ib token and pays out its share of `getTotalToken`.
    #[payable]
    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.require_not_in_progress();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();
        self.ib_token().require_same_token(&payment.token_identifier);
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);

        let amount = &payment.amount * &cache.total_token() / &cache.pool_share_supply;
        require!(amount <= cache.available_cash(), ERROR_INSUFFICIENT_FUNDS);

        cache.pool_share_supply -= &payment.amount;
        self.ib_token().burn(&payment.amount);
        self.tx()
            .to(&caller)
            .single_esdt(&cache.base_token, 0, &amount)
            .transfer_if_not_empty();
        cache.refresh_cash();

        self.withdraw_event(&caller, &payment.amount, &amount);
        self.emit_vault_state(&cache);
    }

    /// Donates base token to depositors. Workers route reinvest cuts here.
    #[payable]
    #[endpoint(addRewards)]
    fn add_rewards(&self) {
        self.require_not_in_progress();
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().single_esdt();

        let mut cache = Cache::new(self);
        require!(
            payment.token_identifier == cache.base_token,
            ERROR_INVALID_ASSET
        );
        self.accrue_interest(&mut cache);
        cache.refresh_cash();

        self.add_rewards_event(&caller, &payment.amount);
        self.emit_vault_state(&cache);
    }

    /// Books pending interest. Anyone may call it.
    #[endpoint(accrueInterest)]
    fn accrue_interest_endpoint(&self) {
        self.require_not_in_progress();

        let mut cache = Cache::new(self);
        self.accrue_interest(&mut cache);
        self.emit_vault_state(&cache);
    }
}
