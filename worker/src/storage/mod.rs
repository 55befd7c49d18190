multiversx_sc::imports!();

use common_structs::{BackingKind, BeneficialVaultConfig, PriceFeed, PriceSource, ReinvestConfig};

/// On-chain state of a worker plus the collaborator storage it reads directly.
#[multiversx_sc::module]
pub trait Storage {
    /// The vault allowed to open, adjust and liquidate positions.
    #[view(getOperator)]
    #[storage_mapper("operator")]
    fn operator(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBaseToken)]
    #[storage_mapper("base_token")]
    fn base_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getFarmingToken)]
    #[storage_mapper("farming_token")]
    fn farming_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getBackingKind)]
    #[storage_mapper("backing_kind")]
    fn backing_kind(&self) -> SingleValueMapper<BackingKind>;

    /// Token staked in the farm: the pair's LP token or the farming token.
    #[view(getBackingToken)]
    #[storage_mapper("backing_token")]
    fn backing_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getRewardToken)]
    #[storage_mapper("reward_token")]
    fn reward_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getPair)]
    #[storage_mapper("pair")]
    fn pair(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getFarm)]
    #[storage_mapper("farm")]
    fn farm(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPoolId)]
    #[storage_mapper("pool_id")]
    fn pool_id(&self) -> SingleValueMapper<u64>;

    /// Position shares keyed by the vault's position id.
    #[view(getShares)]
    #[storage_mapper("shares")]
    fn shares(&self, position_id: u64) -> SingleValueMapper<BigUint>;

    #[view(getTotalShare)]
    #[storage_mapper("total_share")]
    fn total_share(&self) -> SingleValueMapper<BigUint>;

    #[view(getAddStrategy)]
    #[storage_mapper("add_strategy")]
    fn add_strategy(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getLiquidateStrategy)]
    #[storage_mapper("liquidate_strategy")]
    fn liquidate_strategy(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getOkStrategies)]
    #[storage_mapper("ok_strategies")]
    fn ok_strategies(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(getOkReinvestors)]
    #[storage_mapper("ok_reinvestors")]
    fn ok_reinvestors(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[view(isPermissionlessReinvest)]
    #[storage_mapper("permissionless_reinvest")]
    fn permissionless_reinvest(&self) -> SingleValueMapper<bool>;

    #[view(getReinvestConfig)]
    #[storage_mapper("reinvest_config")]
    fn reinvest_config(&self) -> SingleValueMapper<ReinvestConfig<Self::Api>>;

    /// Pairs the reward token hops through before it is re-staked.
    #[view(getReinvestPath)]
    #[storage_mapper("reward_path")]
    fn reward_path(&self) -> SingleValueMapper<ManagedVec<ManagedAddress>>;

    #[view(getTreasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getBeneficialVault)]
    #[storage_mapper("beneficial_vault")]
    fn beneficial_vault(&self) -> SingleValueMapper<BeneficialVaultConfig<Self::Api>>;

    /// Reward token owed to the beneficial vault, single-asset workers only.
    #[view(getBuybackAmount)]
    #[storage_mapper("buyback_amount")]
    fn buyback_amount(&self) -> SingleValueMapper<BigUint>;

    /// Harvested reward held back until it reaches the reinvest threshold.
    #[view(getRewardBalance)]
    #[storage_mapper("reward_balance")]
    fn reward_balance(&self) -> SingleValueMapper<BigUint>;

    /// Tokens left on the worker by a swap too small to quote or by the
    /// excess side of an add-liquidity. Folded into the next reinvest.
    #[view(getIdleBalance)]
    #[storage_mapper("idle_balance")]
    fn idle_balance(&self, token: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getPriceSource)]
    #[storage_mapper("price_source")]
    fn price_source(&self) -> SingleValueMapper<PriceSource<Self::Api>>;

    #[view(getMaxPriceDiffBps)]
    #[storage_mapper("max_price_diff_bps")]
    fn max_price_diff_bps(&self) -> SingleValueMapper<u64>;

    #[view(getMaxPriceAge)]
    #[storage_mapper("max_price_age")]
    fn max_price_age(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("in_progress")]
    fn in_progress(&self) -> SingleValueMapper<bool>;

    #[storage_mapper_from_address("user_stake")]
    fn farm_user_stake(
        &self,
        farm_address: ManagedAddress,
        pool_id: u64,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("pending_reward")]
    fn farm_pending_reward(
        &self,
        farm_address: ManagedAddress,
        pool_id: u64,
        user: &ManagedAddress,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("price_feed")]
    fn oracle_price_feed(
        &self,
        oracle_address: ManagedAddress,
        base: &TokenIdentifier,
        quote: &TokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>, ManagedAddress>;
}
