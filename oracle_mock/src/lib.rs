#![no_std]

use common_errors::ERROR_PRICE_NOT_SET;
use common_structs::PriceFeed;

multiversx_sc::imports!();

/// Owner-fed price source. Prices are WAD-scaled: quote units per one base unit.
///
/// Workers read `price_feed` straight from storage.
#[multiversx_sc::contract]
pub trait OracleMock {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, base: TokenIdentifier, quote: TokenIdentifier, price: BigUint) {
        let timestamp = self.blockchain().get_block_timestamp();
        self.price_feed(&base, &quote)
            .set(PriceFeed { price, timestamp });
    }

    #[view(getPrice)]
    fn get_price(&self, base: TokenIdentifier, quote: TokenIdentifier) -> MultiValue2<BigUint, u64> {
        let mapper = self.price_feed(&base, &quote);
        require!(!mapper.is_empty(), ERROR_PRICE_NOT_SET);

        let feed = mapper.get();
        (feed.price, feed.timestamp).into()
    }

    #[storage_mapper("price_feed")]
    fn price_feed(
        &self,
        base: &TokenIdentifier,
        quote: &TokenIdentifier,
    ) -> SingleValueMapper<PriceFeed<Self::Api>>;
}
