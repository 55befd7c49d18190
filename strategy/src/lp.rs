use common_errors::*;
use common_structs::StrategyParams;

use crate::helpers::{self, Inflow};
use crate::storage;

multiversx_sc::imports!();

/// Strategies for workers whose backing is the pair's LP token.
#[multiversx_sc::module]
pub trait LpStrategyModule:
    storage::Storage
    + helpers::HelpersModule
    + common_amm::AmmMathModule
    + common_amm::calls::PairCallsModule
    + common_math::SharedMathModule
{
    /// Swaps the optimal part of the base token into the farming token and
    /// adds both sides as liquidity.
    fn lp_add_base_token_only(
        &self,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        require!(inflow.farming == 0, ERROR_UNSUPPORTED_TOKEN);

        let pair = self.pair().get();
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();
        let fee = self.pair_fee_numerator(pair.clone()).get();

        let (reserve_base, _, _) = self.pair_reserves(&pair, &base_token);
        let swap_amount = self.optimal_one_sided_swap(&inflow.base, &reserve_base, fee);
        let farming_out = self.swap_exact_in(&pair, &base_token, &swap_amount, &farming_token);
        let base_left = if farming_out == 0 {
            inflow.base.clone()
        } else {
            &inflow.base - &swap_amount
        };

        self.add_liquidity_and_return(&pair, base_left, farming_out, &inflow.backing, params)
    }

    /// Balances whatever base and farming tokens came in, then adds liquidity.
    fn lp_add_two_sides_optimal(
        &self,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        let pair = self.pair().get();
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();
        let fee = self.pair_fee_numerator(pair.clone()).get();

        let (reserve_base, reserve_farming, _) = self.pair_reserves(&pair, &base_token);
        let (swap_amount, is_reversed) = self.optimal_two_sided_swap(
            &inflow.base,
            &inflow.farming,
            &reserve_base,
            &reserve_farming,
            fee,
        );

        let (base_amount, farming_amount) = if is_reversed {
            let base_out = self.swap_exact_in(&pair, &farming_token, &swap_amount, &base_token);
            if base_out == 0 {
                (inflow.base.clone(), inflow.farming.clone())
            } else {
                (&inflow.base + &base_out, &inflow.farming - &swap_amount)
            }
        } else {
            let farming_out = self.swap_exact_in(&pair, &base_token, &swap_amount, &farming_token);
            if farming_out == 0 {
                (inflow.base.clone(), inflow.farming.clone())
            } else {
                (&inflow.base - &swap_amount, &inflow.farming + &farming_out)
            }
        };

        self.add_liquidity_and_return(&pair, base_amount, farming_amount, &inflow.backing, params)
    }

    /// Removes all liquidity and converts everything to the base token.
    fn lp_liquidate(
        &self,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        let (base_amount, farming_dust) =
            self.remove_and_sell(&inflow.backing, &inflow.base, &inflow.farming);
        require!(base_amount >= params.min_out, ERROR_INSUFFICIENT_BASE_RECEIVED);

        self.outflow(base_amount, farming_dust, BigUint::zero())
    }

    /// Closes `exit_amount` of LP into base and hands the rest of the LP back.
    fn lp_partial_close_liquidate(
        &self,
        inflow: &Inflow<Self::Api>,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        require!(
            params.exit_amount <= inflow.backing,
            ERROR_EXIT_EXCEEDS_POSITION
        );

        let (base_amount, farming_dust) =
            self.remove_and_sell(&params.exit_amount, &inflow.base, &inflow.farming);
        require!(base_amount >= params.min_out, ERROR_INSUFFICIENT_BASE_RECEIVED);

        self.outflow(
            base_amount,
            farming_dust,
            &inflow.backing - &params.exit_amount,
        )
    }

    /// Closes `exit_amount` of LP and sells only as much farming token as the
    /// debt repayment needs. The farming token left goes straight to `user`.
    fn lp_partial_close_minimize_trading(
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

        let (base_removed, farming_removed) =
            self.remove_liquidity_from_pair(&pair, &params.exit_amount, &base_token);
        let mut base_amount = base_removed + &inflow.base;
        let mut farming_amount = farming_removed + &inflow.farming;

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
            require!(
                farming_needed <= farming_amount,
                ERROR_INSUFFICIENT_FARMING_RECEIVED
            );

            base_amount += self.swap_exact_in(&pair, &farming_token, &farming_needed, &base_token);
            farming_amount -= &farming_needed;
        }

        require!(
            farming_amount >= params.min_out,
            ERROR_INSUFFICIENT_FARMING_RECEIVED
        );
        self.tx()
            .to(user)
            .single_esdt(&farming_token, 0, &farming_amount)
            .transfer_if_not_empty();

        self.outflow(
            base_amount,
            BigUint::zero(),
            &inflow.backing - &params.exit_amount,
        )
    }

    fn add_liquidity_and_return(
        &self,
        pair: &ManagedAddress,
        base_amount: BigUint,
        farming_amount: BigUint,
        backing_in: &BigUint,
        params: &StrategyParams<Self::Api>,
    ) -> ManagedVec<EsdtTokenPayment> {
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();

        let (lp_minted, base_refund, farming_refund) = self.add_liquidity_to_pair(
            pair,
            &base_token,
            &base_amount,
            &farming_token,
            &farming_amount,
        );
        require!(lp_minted >= params.min_out, ERROR_INSUFFICIENT_LP_RECEIVED);

        self.outflow(base_refund, farming_refund, lp_minted + backing_in)
    }

    /// Burns `lp_amount` and sells the farming side, returning
    /// `(base, unsold_farming)`.
    fn remove_and_sell(
        &self,
        lp_amount: &BigUint,
        extra_base: &BigUint,
        extra_farming: &BigUint,
    ) -> (BigUint, BigUint) {
        let pair = self.pair().get();
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();

        let (base_removed, farming_removed) =
            self.remove_liquidity_from_pair(&pair, lp_amount, &base_token);
        let farming_total = farming_removed + extra_farming;
        let base_out = self.swap_exact_in(&pair, &farming_token, &farming_total, &base_token);

        let farming_dust = if base_out == 0 {
            farming_total
        } else {
            BigUint::zero()
        };

        (base_removed + extra_base + base_out, farming_dust)
    }
}
