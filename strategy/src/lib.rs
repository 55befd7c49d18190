#![no_std]

multiversx_sc::imports!();

pub mod helpers;
pub mod lp;
pub mod single;
pub mod storage;

use common_errors::*;
use common_structs::{BackingKind, StrategyKind, StrategyParams};
use multiversx_sc::codec::TopDecode;

/// A stateless token transformation a worker runs on a position.
///
/// The worker sends every token it holds for the position along with the call
/// and gets the result back in the same transaction. Nothing stays on the
/// strategy between calls.
#[multiversx_sc::contract]
pub trait Strategy:
    storage::Storage
    + helpers::HelpersModule
    + lp::LpStrategyModule
    + single::SingleAssetStrategyModule
    + common_amm::AmmMathModule
    + common_amm::calls::PairCallsModule
    + common_math::SharedMathModule
{
    #[init]
    fn init(
        &self,
        kind: StrategyKind,
        backing: BackingKind,
        base_token: TokenIdentifier,
        farming_token: TokenIdentifier,
        pair: ManagedAddress,
    ) {
        let first = self.pair_first_token(pair.clone()).get();
        let second = self.pair_second_token(pair.clone()).get();
        require!(
            (first == base_token && second == farming_token)
                || (first == farming_token && second == base_token),
            ERROR_UNSUPPORTED_TOKEN
        );

        let backing_token = match backing {
            BackingKind::LpToken => self.pair_lp_token(pair.clone()).get(),
            BackingKind::SingleAsset => farming_token.clone(),
        };

        self.kind().set(kind);
        self.backing().set(backing);
        self.base_token().set(&base_token);
        self.farming_token().set(&farming_token);
        self.backing_token().set(&backing_token);
        self.pair().set(&pair);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setWorkersOk)]
    fn set_workers_ok(&self, ok: bool, workers: MultiValueEncoded<ManagedAddress>) {
        for worker in workers {
            if ok {
                self.ok_workers().insert(worker);
            } else {
                self.ok_workers().swap_remove(&worker);
            }
        }
    }

    #[view(isWorkerOk)]
    fn is_worker_ok(&self, worker: ManagedAddress) -> bool {
        self.ok_workers().contains(&worker)
    }

    /// Runs the strategy on the tokens sent along and returns the result to
    /// the calling worker.
    ///
    /// `params` is a top-encoded `StrategyParams`; an empty buffer means no
    /// slippage bound, no exit and no repayment.
    #[payable]
    #[endpoint(execute)]
    fn execute(&self, user: ManagedAddress, debt: BigUint, params: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        require!(
            self.ok_workers().contains(&caller),
            ERROR_NOT_WHITELISTED_WORKER
        );

        let params = self.decode_params(params);
        let inflow = self.collect_inflow();

        let outflow = match self.backing().get() {
            BackingKind::LpToken => match self.kind().get() {
                StrategyKind::AddBaseTokenOnly => self.lp_add_base_token_only(&inflow, &params),
                StrategyKind::AddTwoSidesOptimal => {
                    self.lp_add_two_sides_optimal(&inflow, &params)
                },
                StrategyKind::Liquidate => self.lp_liquidate(&inflow, &params),
                StrategyKind::PartialCloseLiquidate => {
                    self.lp_partial_close_liquidate(&inflow, &params)
                },
                StrategyKind::PartialCloseMinimizeTrading => {
                    self.lp_partial_close_minimize_trading(&user, &debt, &inflow, &params)
                },
            },
            BackingKind::SingleAsset => match self.kind().get() {
                StrategyKind::AddBaseTokenOnly | StrategyKind::AddTwoSidesOptimal => {
                    self.single_add(&inflow, &params)
                },
                StrategyKind::Liquidate => self.single_liquidate(&inflow, &params),
                StrategyKind::PartialCloseLiquidate => {
                    self.single_partial_close_liquidate(&inflow, &params)
                },
                StrategyKind::PartialCloseMinimizeTrading => {
                    self.single_partial_close_minimize_trading(&user, &debt, &inflow, &params)
                },
            },
        };

        self.tx().to(&caller).payment(outflow).transfer_if_not_empty();
    }

    fn decode_params(&self, params: ManagedBuffer) -> StrategyParams<Self::Api> {
        if params.is_empty() {
            return StrategyParams::none();
        }

        StrategyParams::top_decode(params)
            .unwrap_or_else(|_| sc_panic!(ERROR_INVALID_STRATEGY_PARAMS))
    }
}
