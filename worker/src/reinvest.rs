use common_constants::BPS;
use common_errors::*;
use common_proxies::{proxy_farm, proxy_vault};
use common_structs::BackingKind;

use crate::{ledger, storage, strategies};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait ReinvestModule:
    storage::Storage
    + ledger::LedgerModule
    + strategies::StrategiesModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_amm::AmmMathModule
    + common_amm::calls::PairCallsModule
{
    /// Harvests farm rewards and compounds them into the stake.
    ///
    /// Rewards below the configured threshold are carried over to the next
    /// round, and so is everything harvested while no position holds shares.
    /// Otherwise the treasury bounty is paid first, then the beneficial vault
    /// cut, and the rest is converted to the backing token together with the
    /// idle balances and staked without minting shares.
    fn reinvest_rewards(&self, caller: &ManagedAddress) {
        let harvested = self.harvest();
        let reward = self.reward_balance().take() + harvested;

        let config = self.reinvest_config().get();
        if reward == 0 || reward < config.threshold || self.total_share().get() == 0 {
            self.reward_balance().set(&reward);
            return;
        }

        let reward_token = self.reward_token().get();

        let treasury_bounty = self.apply_bps(&reward, config.bounty_bps);
        self.tx()
            .to(self.treasury().get())
            .single_esdt(&reward_token, 0, &treasury_bounty)
            .transfer_if_not_empty();

        let beneficial_cut = if self.beneficial_vault().is_empty() {
            BigUint::zero()
        } else {
            self.apply_bps(&reward, self.beneficial_vault().get().bounty_bps)
        };
        if beneficial_cut > 0 {
            match self.backing_kind().get() {
                BackingKind::LpToken => self.send_to_beneficial_vault(&beneficial_cut),
                BackingKind::SingleAsset => self
                    .buyback_amount()
                    .update(|amount| *amount += &beneficial_cut),
            }
        }

        let remaining = &reward - &treasury_bounty - &beneficial_cut;
        let restaked = self.restake_reward(&remaining);

        self.reinvest_event(caller, &reward, &treasury_bounty, &beneficial_cut, &restaked);
    }

    /// True when the harvestable reward plus what is carried over reaches the
    /// threshold, a treasury is set and some position holds shares.
    fn should_reinvest(&self) -> bool {
        if self.treasury().is_empty() || self.total_share().get() == 0 {
            return false;
        }

        let farm = self.farm().get();
        let pending = self
            .farm_pending_reward(farm, self.pool_id().get(), &self.blockchain().get_sc_address())
            .get();
        let available = pending + self.reward_balance().get();

        available > 0 && available >= self.reinvest_config().get().threshold
    }

    /// Converts the accumulated buyback amount and sends it to the beneficial
    /// vault.
    fn flush_buyback(&self) {
        if self.beneficial_vault().is_empty() {
            return;
        }

        let amount = self.buyback_amount().take();
        if amount > 0 {
            self.send_to_beneficial_vault(&amount);
        }
    }

    fn send_to_beneficial_vault(&self, reward_amount: &BigUint) {
        let config = self.beneficial_vault().get();
        let converted = self.swap_along_path(&config.path, &self.reward_token().get(), reward_amount);

        if converted.amount > 0 {
            self.tx()
                .to(&config.vault)
                .typed(proxy_vault::VaultProxy)
                .add_rewards()
                .single_esdt(&converted.token_identifier, 0, &converted.amount)
                .sync_call();
        }

        self.beneficial_vault_transfer_event(&config.vault, reward_amount, &converted.amount);
    }

    /// Turns `reward_amount` plus the idle balances into backing token and
    /// stakes it. Returns the backing amount staked.
    fn restake_reward(&self, reward_amount: &BigUint) -> BigUint {
        let converted = self.convert_with_idle(
            &self.reward_path().get(),
            &self.reward_token().get(),
            reward_amount,
        );

        let mut backing = match self.backing_kind().get() {
            BackingKind::LpToken => self.add_liquidity_with_idle(converted),
            BackingKind::SingleAsset => converted.amount,
        };
        backing += self.idle_balance(&self.backing_token().get()).take();

        self.stake(&backing);
        backing
    }

    /// Hops `amount_in` along `path`, picking up the idle balance of every
    /// token it passes. A hop too small to quote parks its input instead.
    fn convert_with_idle(
        &self,
        path: &ManagedVec<ManagedAddress>,
        token_in: &TokenIdentifier,
        amount_in: &BigUint,
    ) -> EsdtTokenPayment {
        let mut token = token_in.clone();
        let mut amount = amount_in + &self.idle_balance(&token).take();

        for pair in path.iter() {
            let next_token = self.pair_counterpart(&pair, &token);
            let amount_out = self.swap_exact_in(&pair, &token, &amount, &next_token);
            if amount_out == 0 {
                self.park_idle(&token, &amount);
            }

            token = next_token;
            amount = amount_out + self.idle_balance(&token).take();
        }

        EsdtTokenPayment::new(token, 0, amount)
    }

    /// Runs the add strategy on `base` plus the idle farming token, sold to
    /// base first. Whatever the strategy hands back besides LP is parked.
    fn add_liquidity_with_idle(&self, base: EsdtTokenPayment) -> BigUint {
        let pair = self.pair().get();
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();

        let farming_idle = self.idle_balance(&farming_token).take();
        let base_from_farming =
            self.swap_exact_in(&pair, &farming_token, &farming_idle, &base_token);
        if base_from_farming == 0 {
            self.park_idle(&farming_token, &farming_idle);
        }

        let base_amount = base.amount + base_from_farming;
        if base_amount == 0 {
            return BigUint::zero();
        }

        let mut payments = ManagedVec::new();
        payments.push(EsdtTokenPayment::new(base_token, 0, base_amount));

        let output = self.run_strategy(
            &self.add_strategy().get(),
            &self.blockchain().get_sc_address(),
            &BigUint::zero(),
            &ManagedBuffer::new(),
            payments,
        );

        self.park_idle(&self.base_token().get(), &output.base);
        for payment in output.other.iter() {
            self.park_idle(&payment.token_identifier, &payment.amount);
        }

        output.backing
    }

    fn park_idle(&self, token: &TokenIdentifier, amount: &BigUint) {
        if *amount > 0 {
            self.idle_balance(token).update(|idle| *idle += amount);
        }
    }

    /// Claims pending farm rewards, counted from the back-transfers so they
    /// never leak into a later reconciliation in the same call.
    fn harvest(&self) -> BigUint {
        let back_transfers = self
            .tx()
            .to(self.farm().get())
            .typed(proxy_farm::FarmMockProxy)
            .harvest(self.pool_id().get())
            .returns(ReturnsBackTransfersLegacyReset)
            .sync_call();

        let reward_token = self.reward_token().get();
        let mut harvested = BigUint::zero();
        for payment in back_transfers.esdt_payments.iter() {
            if payment.token_identifier == reward_token {
                harvested += &payment.amount;
            }
        }

        harvested
    }

    fn require_valid_reinvest_bounty(&self, bounty_bps: u64, max_bounty_bps: u64) {
        require!(
            max_bounty_bps <= common_constants::MAX_REINVEST_BOUNTY_BPS,
            ERROR_MAX_BOUNTY_TOO_HIGH
        );
        require!(bounty_bps <= max_bounty_bps, ERROR_BOUNTY_EXCEEDS_MAX);
    }

    fn require_valid_bounty_total(&self, reinvest_bps: u64, beneficial_bps: u64) {
        require!(reinvest_bps + beneficial_bps <= BPS, ERROR_INVALID_BPS);
    }
}
