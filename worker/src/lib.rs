#![no_std]

multiversx_sc::imports!();

pub mod config;
pub mod health;
pub mod ledger;
pub mod reinvest;
pub mod storage;
pub mod strategies;

use common_errors::*;
use common_structs::{BackingKind, PriceSource, ReinvestConfig};

/// Holds the farm stake behind every leveraged position of one vault on one
/// pair, and accounts for it in position shares.
///
/// The owning vault (the operator) drives `work` and `liquidate`; the actual
/// token transformations are delegated to whitelisted strategies.
#[multiversx_sc::contract]
pub trait Worker:
    storage::Storage
    + ledger::LedgerModule
    + strategies::StrategiesModule
    + reinvest::ReinvestModule
    + health::HealthModule
    + config::ConfigModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + common_amm::AmmMathModule
    + common_amm::calls::PairCallsModule
{
    /// Binds the worker to its vault, pair and farm pool.
    ///
    /// The reward path starts empty, which only works when the reward token
    /// already is what the worker restakes; otherwise the owner sets it with
    /// `setReinvestConfig`.
    #[init]
    fn init(
        &self,
        operator: ManagedAddress,
        base_token: TokenIdentifier,
        farming_token: TokenIdentifier,
        backing_kind: BackingKind,
        reward_token: TokenIdentifier,
        pair: ManagedAddress,
        farm: ManagedAddress,
        pool_id: u64,
        add_strategy: ManagedAddress,
        liquidate_strategy: ManagedAddress,
        reinvest_bounty_bps: u64,
        max_reinvest_bounty_bps: u64,
        reinvest_threshold: BigUint,
        treasury: ManagedAddress,
    ) {
        require!(
            self.pair_counterpart(&pair, &base_token) == farming_token,
            ERROR_UNSUPPORTED_TOKEN
        );
        self.require_valid_reinvest_bounty(reinvest_bounty_bps, max_reinvest_bounty_bps);

        let backing_token = match backing_kind {
            BackingKind::LpToken => self.pair_lp_token(pair.clone()).get(),
            BackingKind::SingleAsset => farming_token.clone(),
        };

        self.operator().set(&operator);
        self.base_token().set(&base_token);
        self.farming_token().set(&farming_token);
        self.backing_kind().set(backing_kind);
        self.backing_token().set(&backing_token);
        self.reward_token().set(&reward_token);
        self.pair().set(&pair);
        self.farm().set(&farm);
        self.pool_id().set(pool_id);

        self.add_strategy().set(&add_strategy);
        self.liquidate_strategy().set(&liquidate_strategy);
        self.ok_strategies().insert(add_strategy);
        self.ok_strategies().insert(liquidate_strategy);

        self.reinvest_config().set(ReinvestConfig {
            bounty_bps: reinvest_bounty_bps,
            max_bounty_bps: max_reinvest_bounty_bps,
            threshold: reinvest_threshold,
        });
        self.reward_path().set(ManagedVec::new());
        self.treasury().set(&treasury);
        self.price_source().set(PriceSource::Reserves);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Runs `strategy` on a position and re-stakes what it returns.
    ///
    /// The position's whole stake is unstaked and sent to the strategy with the
    /// tokens the vault forwarded. Backing token coming back is staked again and
    /// credited as fresh shares; base token goes back to the vault and anything
    /// else to `user`.
    #[payable]
    #[endpoint(work)]
    fn work(
        &self,
        position_id: u64,
        user: ManagedAddress,
        debt: BigUint,
        strategy: ManagedAddress,
        params: ManagedBuffer,
    ) {
        let caller = self.require_operator();
        require!(
            self.ok_strategies().contains(&strategy),
            ERROR_UNAPPROVED_WORK_STRATEGY
        );
        self.enter();

        if self.should_reinvest() {
            self.reinvest_rewards(&caller);
        }
        self.flush_buyback();

        let released = self.remove_share(position_id);

        let mut payments = ManagedVec::new();
        for payment in self.call_value().all_transfers().iter() {
            payments.push(EsdtTokenPayment::new(
                payment.token_identifier.clone().unwrap_esdt(),
                payment.token_nonce,
                payment.amount.clone(),
            ));
        }
        if released > 0 {
            payments.push(EsdtTokenPayment::new(self.backing_token().get(), 0, released));
        }

        let output = self.run_strategy(&strategy, &user, &debt, &params, payments);
        let shares = self.add_share(position_id, &output.backing);

        self.tx()
            .to(&caller)
            .single_esdt(&self.base_token().get(), 0, &output.base)
            .transfer_if_not_empty();
        self.tx()
            .to(&user)
            .payment(output.other)
            .transfer_if_not_empty();

        self.worker_work_event(position_id, &user, &strategy, &debt, &shares, &output.base);
        self.exit();
    }

    /// Closes the whole position through the liquidate strategy and returns
    /// the base token received to the vault.
    ///
    /// Anything the strategy could not sell stays on the worker as an idle
    /// balance for the next reinvest.
    #[endpoint(liquidate)]
    fn liquidate(&self, position_id: u64) -> BigUint {
        let caller = self.require_operator();
        self.enter();

        self.flush_buyback();

        let released = self.remove_share(position_id);
        if released == 0 {
            self.exit();
            return BigUint::zero();
        }

        let mut payments = ManagedVec::new();
        payments.push(EsdtTokenPayment::new(self.backing_token().get(), 0, released.clone()));
        let output = self.run_strategy(
            &self.liquidate_strategy().get(),
            &caller,
            &BigUint::zero(),
            &ManagedBuffer::new(),
            payments,
        );

        self.tx()
            .to(&caller)
            .single_esdt(&self.base_token().get(), 0, &output.base)
            .transfer_if_not_empty();

        for payment in output.other.iter() {
            self.park_idle(&payment.token_identifier, &payment.amount);
        }
        self.park_idle(&self.backing_token().get(), &output.backing);

        self.worker_liquidate_event(position_id, &released, &output.base);
        self.exit();

        output.base
    }

    /// Compounds farm rewards. Open to whitelisted reinvestors, or to anyone
    /// once permissionless reinvest is switched on.
    #[endpoint(reinvest)]
    fn reinvest(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            self.permissionless_reinvest().get() || self.ok_reinvestors().contains(&caller),
            ERROR_NOT_REINVESTOR
        );
        self.enter();

        self.reinvest_rewards(&caller);

        self.exit();
    }

    fn require_operator(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(caller == self.operator().get(), ERROR_NOT_OPERATOR);
        caller
    }

    fn enter(&self) {
        require!(!self.in_progress().get(), ERROR_REENTRANT_CALL);
        self.in_progress().set(true);
    }

    fn exit(&self) {
        self.in_progress().clear();
    }
}
