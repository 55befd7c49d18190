use common_constants::{BPS, WAD};
use common_structs::{BackingKind, PriceSource};

use crate::{ledger, storage};

multiversx_sc::imports!();

/// Position valuation in base token and the price sanity gate used before the
/// vault trusts that valuation.
#[multiversx_sc::module]
pub trait HealthModule:
    storage::Storage
    + ledger::LedgerModule
    + common_amm::AmmMathModule
    + common_amm::calls::PairCallsModule
{
    /// Base token the position would fetch if closed now.
    ///
    /// LP backing is split into its base and farming sides by the pair's
    /// reserves; the farming side is priced either by selling it into what is
    /// left of the pool or by the oracle.
    #[view(health)]
    fn health(&self, position_id: u64) -> BigUint {
        let balance = self.share_to_balance(self.shares(position_id).get());
        if balance == 0 {
            return BigUint::zero();
        }

        let pair = self.pair().get();
        let base_token = self.base_token().get();
        let fee = self.pair_fee_numerator(pair.clone()).get();
        let (reserve_base, reserve_farming, lp_supply) = self.pair_reserves(&pair, &base_token);

        match self.backing_kind().get() {
            BackingKind::LpToken => {
                if lp_supply == 0 {
                    return BigUint::zero();
                }
                let user_base = &balance * &reserve_base / &lp_supply;
                let user_farming = &balance * &reserve_farming / &lp_supply;

                let farming_value = match self.price_source().get() {
                    PriceSource::Reserves => self.get_amount_out(
                        &user_farming,
                        &(&reserve_farming - &user_farming),
                        &(&reserve_base - &user_base),
                        fee,
                    ),
                    PriceSource::Oracle(oracle) => {
                        &user_farming * &self.oracle_price(oracle) / BigUint::from(WAD)
                    },
                };

                user_base + farming_value
            },
            BackingKind::SingleAsset => match self.price_source().get() {
                PriceSource::Reserves => {
                    self.get_amount_out(&balance, &reserve_farming, &reserve_base, fee)
                },
                PriceSource::Oracle(oracle) => {
                    balance * self.oracle_price(oracle) / BigUint::from(WAD)
                },
            },
        }
    }

    /// Whether the pool price can be trusted for valuation.
    ///
    /// Always true when valuing off reserves. With an oracle, the feed must be
    /// fresh and the pool's spot price must sit inside
    /// `[oracle * 10000 / max_diff, oracle * max_diff / 10000]`.
    #[view(isStable)]
    fn is_stable(&self) -> bool {
        let oracle = match self.price_source().get() {
            PriceSource::Reserves => return true,
            PriceSource::Oracle(oracle) => oracle,
        };

        let feed_mapper = self.oracle_price_feed(
            oracle,
            &self.farming_token().get(),
            &self.base_token().get(),
        );
        if feed_mapper.is_empty() {
            return false;
        }
        let feed = feed_mapper.get();

        let now = self.blockchain().get_block_timestamp();
        if now > feed.timestamp + self.max_price_age().get() {
            return false;
        }

        let pair = self.pair().get();
        let (reserve_farming, reserve_base, _) =
            self.pair_reserves(&pair, &self.farming_token().get());
        if reserve_farming == 0 || feed.price == 0 {
            return false;
        }

        let spot_price = reserve_base * BigUint::from(WAD) / reserve_farming;
        let max_diff = self.max_price_diff_bps().get();
        let lower = &feed.price * BPS / max_diff;
        let upper = &feed.price * max_diff / BPS;

        spot_price >= lower && spot_price <= upper
    }

    fn oracle_price(&self, oracle: ManagedAddress) -> BigUint {
        self.oracle_price_feed(oracle, &self.farming_token().get(), &self.base_token().get())
            .get()
            .price
    }
}
