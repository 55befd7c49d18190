use common_errors::*;
use common_structs::StrategyParams;

use crate::helpers::{self, Inflow};
use crate::storage;

multiversx_sc::imports!();

/// Strategies for workers that stake the farming token itself.
#[multiversx_sc::module]
pub trait SingleAssetStrategyModule:
    storage::Storage
    + helpers::HelpersModule
    + common_amm::AmmMathModule
    + common_amm::calls::PairCallsModule
    + common_math::SharedMathModule
{
    /// Buys the farming token with all base received. Both add kinds behave
    /// the same here since there is no second side to balance.
    fn single_add(
        &self,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        let pair = self.pair().get();
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();

        let farming_out = self.swap_exact_in(&pair, &base_token, &inflow.base, &farming_token);
        require!(
            farming_out >= params.min_out,
            ERROR_INSUFFICIENT_FARMING_RECEIVED
        );

        let base_left = if farming_out == 0 {
            inflow.base.clone()
        } else {
            BigUint::zero()
        };

        self.outflow(base_left, BigUint::zero(), farming_out + &inflow.backing)
    }

    fn single_liquidate(
        &self,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        let (base_amount, unsold) = self.sell_farming(&inflow.backing);
        let base_amount = base_amount + &inflow.base;
        require!(base_amount >= params.min_out, ERROR_INSUFFICIENT_BASE_RECEIVED);

        self.outflow(base_amount, BigUint::zero(), unsold)
    }

    fn single_partial_close_liquidate(
        &self,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        require!(
            params.exit_amount <= inflow.backing,
            ERROR_EXIT_EXCEEDS_POSITION
        );

        let (base_amount, unsold) = self.sell_farming(&params.exit_amount);
        let base_amount = base_amount + &inflow.base;
        require!(base_amount >= params.min_out, ERROR_INSUFFICIENT_BASE_RECEIVED);

        self.outflow(
            base_amount,
            BigUint::zero(),
            &inflow.backing - &params.exit_amount + unsold,
        )
    }

    /// Sells only what the debt repayment needs out of `exit_amount`; the rest
    /// of the exited farming token goes to `user`.
    fn single_partial_close_minimize_trading(
        &self,
        user: &ManagedAddress,
        debt: &BigUint,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        require!(
            params.exit_amount <= inflow.backing,
            ERROR_EXIT_EXCEEDS_POSITION
        );

        let pair = self.pair().get();
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();

        let mut base_amount = inflow.base.clone();
        let mut exited = params.exit_amount.clone();

        let repay_target = self.min_amount(debt.clone(), params.max_debt_repayment.clone());
        if base_amount < repay_target {
            let shortfall = &repay_target - &base_amount;
            let (reserve_farming, reserve_base, _) = self.pair_reserves(&pair, &farming_token);
            let farming_needed = self.get_amount_in(
                &shortfall,
                &reserve_farming,
                &reserve_base,
                self.pair_fee_numerator(pair.clone()).get(),
            );
            require!(farming_needed <= exited, ERROR_INSUFFICIENT_FARMING_RECEIVED);

            base_amount += self.swap_exact_in(&pair, &farming_token, &farming_needed, &base_token);
            exited -= &farming_needed;
        }

        require!(exited >= params.min_out, ERROR_INSUFFICIENT_FARMING_RECEIVED);
        self.tx()
            .to(user)
            .single_esdt(&farming_token, 0, &exited)
            .transfer_if_not_empty();

        self.outflow(
            base_amount,
            BigUint::zero(),
            &inflow.backing - &params.exit_amount,
        )
    }

    /// `(base_received, farming_left_unsold)`
    fn sell_farming(&self, amount: &BigUint) -> (BigUint, BigUint) {
        let pair = self.pair().get();
        let base_out = self.swap_exact_in(
            &pair,
            &self.farming_token().get(),
            amount,
            &self.base_token().get(),
        );

        if base_out == 0 {
            (base_out, amount.clone())
        } else {
            (base_out, BigUint::zero())
        }
    }
}
