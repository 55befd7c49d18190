multiversx_sc::imports!();

use common_structs::{Position, RateModel, VaultConfig, WorkerRisk};

/// The Storage trait holds the vault's ledgers, its configuration and the
/// whitelists that gate who may borrow, liquidate and add collateral.
#[multiversx_sc::module]
pub trait Storage {
    /// Token lent out by the vault.
    #[view(getBaseToken)]
    #[storage_mapper("base_token")]
    fn base_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// Interest-bearing share token minted to depositors.
    #[view(getIbToken)]
    #[storage_mapper("ib_token")]
    fn ib_token(&self) -> FungibleTokenMapper;

    /// Outstanding ib token supply.
    #[view(getPoolShareSupply)]
    #[storage_mapper("pool_share_supply")]
    fn pool_share_supply(&self) -> SingleValueMapper<BigUint>;

    /// Base token owed by all positions, accrued interest included.
    #[view(getTotalDebtValue)]
    #[storage_mapper("total_debt_value")]
    fn total_debt_value(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalDebtShare)]
    #[storage_mapper("total_debt_share")]
    fn total_debt_share(&self) -> SingleValueMapper<BigUint>;

    /// Part of the vault's cash that belongs to the protocol, not to depositors.
    #[view(getReservePool)]
    #[storage_mapper("reserve_pool")]
    fn reserve_pool(&self) -> SingleValueMapper<BigUint>;

    /// Cumulative liquidation shortfall the reserve pool could not cover.
    #[view(getBadDebt)]
    #[storage_mapper("bad_debt")]
    fn bad_debt(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastAccrualTime)]
    #[storage_mapper("last_accrual_time")]
    fn last_accrual_time(&self) -> SingleValueMapper<u64>;

    #[view(getNextPositionId)]
    #[storage_mapper("next_position_id")]
    fn next_position_id(&self) -> SingleValueMapper<u64>;

    #[view(getPosition)]
    #[storage_mapper("positions")]
    fn positions(&self, position_id: u64) -> SingleValueMapper<Position<Self::Api>>;

    #[view(getVaultConfig)]
    #[storage_mapper("vault_config")]
    fn vault_config(&self) -> SingleValueMapper<VaultConfig<Self::Api>>;

    #[view(getRateModel)]
    #[storage_mapper("rate_model")]
    fn rate_model(&self) -> SingleValueMapper<RateModel<Self::Api>>;

    #[view(getWorkers)]
    #[storage_mapper("workers")]
    fn workers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getWorkerRisk)]
    #[storage_mapper("worker_risk")]
    fn worker_risk(&self, worker: &ManagedAddress) -> SingleValueMapper<WorkerRisk>;

    #[view(getWhitelistedLiquidators)]
    #[storage_mapper("whitelisted_liquidators")]
    fn whitelisted_liquidators(&self) -> UnorderedSetMapper<ManagedAddress>;

    /// Smart contracts allowed to open and manage positions.
    #[view(getWhitelistedCallers)]
    #[storage_mapper("whitelisted_callers")]
    fn whitelisted_callers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getApprovedAddStrategies)]
    #[storage_mapper("approved_add_strategies")]
    fn approved_add_strategies(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("in_progress")]
    fn in_progress(&self) -> SingleValueMapper<bool>;
}
