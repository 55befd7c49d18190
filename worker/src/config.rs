use common_constants::BPS;
use common_errors::*;
use common_structs::{BackingKind, BeneficialVaultConfig, PriceSource, ReinvestConfig};

use crate::{ledger, reinvest, storage, strategies};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ConfigModule:
    storage::Storage
    + ledger::LedgerModule
    + strategies::StrategiesModule
    + reinvest::ReinvestModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_amm::AmmMathModule
    + common_amm::calls::PairCallsModule
{
    #[only_owner]
    #[endpoint(setStrategyOk)]
    fn set_strategy_ok(&self, ok: bool, strategies: MultiValueEncoded<ManagedAddress>) {
        for strategy in strategies {
            if ok {
                self.ok_strategies().insert(strategy.clone());
            } else {
                self.ok_strategies().swap_remove(&strategy);
            }
            self.update_strategy_approval_event(&strategy, ok);
        }
    }

    #[only_owner]
    #[endpoint(setReinvestorOk)]
    fn set_reinvestor_ok(&self, ok: bool, reinvestors: MultiValueEncoded<ManagedAddress>) {
        for reinvestor in reinvestors {
            if ok {
                self.ok_reinvestors().insert(reinvestor);
            } else {
                self.ok_reinvestors().swap_remove(&reinvestor);
            }
        }
    }

    #[only_owner]
    #[endpoint(setPermissionlessReinvest)]
    fn set_permissionless_reinvest(&self, permissionless: bool) {
        self.permissionless_reinvest().set(permissionless);
    }

    /// Sets the reinvest bounty, its cap, the harvest threshold and the path
    /// that turns the reward token into what the worker restakes.
    #[only_owner]
    #[endpoint(setReinvestConfig)]
    fn set_reinvest_config(
        &self,
        bounty_bps: u64,
        max_bounty_bps: u64,
        threshold: BigUint,
        reward_path: MultiValueEncoded<ManagedAddress>,
    ) {
        self.require_valid_reinvest_bounty(bounty_bps, max_bounty_bps);
        if !self.beneficial_vault().is_empty() {
            self.require_valid_bounty_total(bounty_bps, self.beneficial_vault().get().bounty_bps);
        }

        let path = reward_path.to_vec();
        self.require_valid_reward_path(&path);

        let config = ReinvestConfig {
            bounty_bps,
            max_bounty_bps,
            threshold,
        };
        self.reinvest_config().set(&config);
        self.reward_path().set(&path);
        self.update_reinvest_config_event(&config);
    }

    #[only_owner]
    #[endpoint(setTreasury)]
    fn set_treasury(&self, treasury: ManagedAddress) {
        self.treasury().set(&treasury);
    }

    /// Strategies the worker itself uses: the add strategy for reinvesting LP
    /// rewards and the liquidate strategy for `liquidate`.
    #[only_owner]
    #[endpoint(setCriticalStrategies)]
    fn set_critical_strategies(&self, add_strategy: ManagedAddress, liquidate_strategy: ManagedAddress) {
        self.add_strategy().set(&add_strategy);
        self.liquidate_strategy().set(&liquidate_strategy);
    }

    /// Routes `bounty_bps` of every reinvested reward to `vault` as a donation,
    /// converted along `path` into the vault's base token.
    #[only_owner]
    #[endpoint(setBeneficialVault)]
    fn set_beneficial_vault(
        &self,
        vault: ManagedAddress,
        bounty_bps: u64,
        path: MultiValueEncoded<ManagedAddress>,
    ) {
        require!(bounty_bps <= BPS, ERROR_INVALID_BPS);
        self.require_valid_bounty_total(self.reinvest_config().get().bounty_bps, bounty_bps);

        let path = path.to_vec();
        let output_token = self.path_output_token(&path, &self.reward_token().get());
        require!(
            output_token == self.vault_base_token(vault.clone()).get(),
            ERROR_INVALID_PATH
        );

        let config = BeneficialVaultConfig {
            vault,
            bounty_bps,
            path,
        };
        self.beneficial_vault().set(&config);
        self.update_beneficial_vault_event(&config);
    }

    #[only_owner]
    #[endpoint(setPriceSource)]
    fn set_price_source(&self, source: PriceSource<Self::Api>) {
        if let PriceSource::Oracle(_) = source {
            require!(
                self.max_price_diff_bps().get() >= BPS,
                ERROR_INVALID_PRICE_DIFF
            );
        }
        self.price_source().set(source);
    }

    /// `max_price_diff_bps` is an upper ratio, so 10500 tolerates a 5% gap
    /// between pool and oracle in either direction.
    #[only_owner]
    #[endpoint(setStabilityParams)]
    fn set_stability_params(&self, max_price_diff_bps: u64, max_price_age: u64) {
        require!(max_price_diff_bps >= BPS, ERROR_INVALID_PRICE_DIFF);

        self.max_price_diff_bps().set(max_price_diff_bps);
        self.max_price_age().set(max_price_age);
    }

    fn require_valid_reward_path(&self, path: &ManagedVec<ManagedAddress>) {
        let expected = match self.backing_kind().get() {
            BackingKind::LpToken => self.base_token().get(),
            BackingKind::SingleAsset => self.farming_token().get(),
        };
        let output_token = self.path_output_token(path, &self.reward_token().get());

        require!(output_token == expected, ERROR_INVALID_PATH);
    }

    #[storage_mapper_from_address("base_token")]
    fn vault_base_token(
        &self,
        vault_address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;
}
