#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] shares: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] shares: &BigUint,
        #[indexed] amount: &BigUint,
    );

    // Emitted after every ledger change on the pool: deposits, withdrawals, accrual,
    // borrows, repayments and liquidations.
    #[event("update_vault_state")]
    fn update_vault_state_event(
        &self,
        #[indexed] timestamp: u64,
        #[indexed] total_debt_value: &BigUint,
        #[indexed] total_debt_share: &BigUint,
        #[indexed] reserve_pool: &BigUint,
        #[indexed] pool_share_supply: &BigUint,
    );

    #[event("accrue_interest")]
    fn accrue_interest_event(
        &self,
        #[indexed] elapsed: u64,
        #[indexed] interest: &BigUint,
        #[indexed] reserve_cut: &BigUint,
    );

    #[event("work")]
    fn work_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] worker: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
        #[indexed] borrow_amount: &BigUint,
        #[indexed] repaid_amount: &BigUint,
        #[indexed] debt: &BigUint,
    );

    #[event("add_collateral")]
    fn add_collateral_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] owner: &ManagedAddress,
        #[indexed] go_rogue: bool,
        #[indexed] health_before: &BigUint,
        #[indexed] health_after: &BigUint,
    );

    #[event("kill")]
    fn kill_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] liquidator: &ManagedAddress,
        #[indexed] owner: &ManagedAddress,
        #[indexed] health: &BigUint,
        #[indexed] debt: &BigUint,
        #[indexed] prize: &BigUint,
        #[indexed] treasury_fee: &BigUint,
        #[indexed] left: &BigUint,
    );

    #[event("bad_debt")]
    fn bad_debt_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] shortfall: &BigUint,
        #[indexed] covered_by_reserve: &BigUint,
        #[indexed] socialized: &BigUint,
    );

    #[event("add_rewards")]
    fn add_rewards_event(&self, #[indexed] caller: &ManagedAddress, #[indexed] amount: &BigUint);

    #[event("reserve_withdrawn")]
    fn reserve_withdrawn_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: &BigUint,
        #[indexed] remaining: &BigUint,
    );

    #[event("update_vault_config")]
    fn update_vault_config_event(&self, #[indexed] config: &VaultConfig<Self::Api>);

    #[event("update_worker_risk")]
    fn update_worker_risk_event(
        &self,
        #[indexed] worker: &ManagedAddress,
        #[indexed] risk: &WorkerRisk,
    );

    #[event("update_rate_model")]
    fn update_rate_model_event(&self, #[indexed] model: &RateModel<Self::Api>);

    // Worker

    #[event("worker_work")]
    fn worker_work_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] user: &ManagedAddress,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] debt: &BigUint,
        #[indexed] shares: &BigUint,
        #[indexed] base_returned: &BigUint,
    );

    #[event("reinvest")]
    fn reinvest_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] reward: &BigUint,
        #[indexed] treasury_bounty: &BigUint,
        #[indexed] beneficial_cut: &BigUint,
        #[indexed] restaked: &BigUint,
    );

    #[event("worker_liquidate")]
    fn worker_liquidate_event(
        &self,
        #[indexed] position_id: u64,
        #[indexed] backing_released: &BigUint,
        #[indexed] base_returned: &BigUint,
    );

    #[event("beneficial_vault_transfer")]
    fn beneficial_vault_transfer_event(
        &self,
        #[indexed] vault: &ManagedAddress,
        #[indexed] reward_amount: &BigUint,
        #[indexed] base_amount: &BigUint,
    );

    #[event("update_reinvest_config")]
    fn update_reinvest_config_event(&self, #[indexed] config: &ReinvestConfig<Self::Api>);

    #[event("update_beneficial_vault")]
    fn update_beneficial_vault_event(&self, #[indexed] config: &BeneficialVaultConfig<Self::Api>);

    #[event("update_strategy_approval")]
    fn update_strategy_approval_event(
        &self,
        #[indexed] strategy: &ManagedAddress,
        #[indexed] approved: bool,
    );
}
