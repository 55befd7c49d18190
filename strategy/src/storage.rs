use common_structs::{BackingKind, StrategyKind};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    #[view(getKind)]
    #[storage_mapper("kind")]
    fn kind(&self) -> SingleValueMapper<StrategyKind>;

    #[view(getBacking)]
    #[storage_mapper("backing")]
    fn backing(&self) -> SingleValueMapper<BackingKind>;

    #[view(getBaseToken)]
    #[storage_mapper("base_token")]
    fn base_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getFarmingToken)]
    #[storage_mapper("farming_token")]
    fn farming_token(&self) -> SingleValueMapper<TokenIdentifier>;

    /// LP token of the pair, or the farming token for single-asset workers.
    #[view(getBackingToken)]
    #[storage_mapper("backing_token")]
    fn backing_token(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getPair)]
    #[storage_mapper("pair")]
    fn pair(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("ok_workers")]
    fn ok_workers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
