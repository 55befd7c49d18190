#![no_std]

use common_constants::{FEE_DENOMINATOR, MINIMUM_LIQUIDITY};
use common_errors::*;

multiversx_sc::imports!();

/// Constant-product pair used as the AMM collaborator of workers and strategies.
///
/// Reserves are tracked in storage, never read from the balance, so donations
/// do not move the price. The LP token needs local mint and burn roles.
#[multiversx_sc::contract]
pub trait PairMock: common_amm::AmmMathModule {
    #[init]
    fn init(
        &self,
        first_token_id: TokenIdentifier,
        second_token_id: TokenIdentifier,
        lp_token_id: TokenIdentifier,
        fee_numerator: u64,
    ) {
        require!(first_token_id != second_token_id, ERROR_INVALID_PAYMENTS);
        require!(
            fee_numerator > 0 && fee_numerator <= FEE_DENOMINATOR,
            ERROR_INVALID_BPS
        );

        self.first_token_id().set(&first_token_id);
        self.second_token_id().set(&second_token_id);
        self.lp_token_identifier().set(&lp_token_id);
        self.fee_numerator().set(fee_numerator);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Adds both tokens at the current ratio and refunds the side in excess.
    ///
    /// The first deposit mints `sqrt(first * second)` units, of which
    /// `MINIMUM_LIQUIDITY` stay locked in the supply forever.
    #[payable]
    #[endpoint(addLiquidity)]
    fn add_liquidity(
        &self,
        first_token_amount_min: BigUint,
        second_token_amount_min: BigUint,
    ) -> EsdtTokenPayment {
        let [first_payment, second_payment] = self.call_value().multi_esdt();
        let first_payment = first_payment.clone();
        let second_payment = second_payment.clone();

        let first_token_id = self.first_token_id().get();
        let second_token_id = self.second_token_id().get();
        require!(
            first_payment.token_identifier == first_token_id
                && second_payment.token_identifier == second_token_id,
            ERROR_INVALID_PAYMENTS
        );
        require!(
            first_payment.amount > 0 && second_payment.amount > 0,
            ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO
        );

        let first_reserve = self.pair_reserve(&first_token_id).get();
        let second_reserve = self.pair_reserve(&second_token_id).get();
        let lp_supply = self.lp_token_supply().get();

        let (first_amount, second_amount, liquidity, locked) = if lp_supply == 0 {
            let liquidity = (&first_payment.amount * &second_payment.amount).sqrt();
            require!(
                liquidity > MINIMUM_LIQUIDITY,
                ERROR_INSUFFICIENT_LIQUIDITY_MINTED
            );

            (
                first_payment.amount.clone(),
                second_payment.amount.clone(),
                liquidity - MINIMUM_LIQUIDITY,
                BigUint::from(MINIMUM_LIQUIDITY),
            )
        } else {
            let (first_amount, second_amount) = self.optimal_liquidity_amounts(
                &first_payment.amount,
                &second_payment.amount,
                &first_reserve,
                &second_reserve,
            );
            let first_liquidity = &first_amount * &lp_supply / &first_reserve;
            let second_liquidity = &second_amount * &lp_supply / &second_reserve;
            let liquidity = if first_liquidity < second_liquidity {
                first_liquidity
            } else {
                second_liquidity
            };

            (first_amount, second_amount, liquidity, BigUint::zero())
        };

        require!(
            first_amount >= first_token_amount_min && second_amount >= second_token_amount_min,
            ERROR_SLIPPAGE_EXCEEDED
        );
        require!(liquidity > 0, ERROR_INSUFFICIENT_LIQUIDITY_MINTED);

        self.pair_reserve(&first_token_id)
            .update(|reserve| *reserve += &first_amount);
        self.pair_reserve(&second_token_id)
            .update(|reserve| *reserve += &second_amount);
        self.lp_token_supply()
            .update(|supply| *supply += &liquidity + &locked);

        let lp_token_id = self.lp_token_identifier().get();
        self.send().esdt_local_mint(&lp_token_id, 0, &liquidity);

        let lp_payment = EsdtTokenPayment::new(lp_token_id, 0, liquidity);
        let mut payments = ManagedVec::new();
        payments.push(lp_payment.clone());
        if first_payment.amount > first_amount {
            payments.push(EsdtTokenPayment::new(
                first_token_id,
                0,
                &first_payment.amount - &first_amount,
            ));
        }
        if second_payment.amount > second_amount {
            payments.push(EsdtTokenPayment::new(
                second_token_id,
                0,
                &second_payment.amount - &second_amount,
            ));
        }

        let caller = self.blockchain().get_caller();
        self.tx().to(&caller).payment(payments).transfer();

        lp_payment
    }

    #[payable]
    #[endpoint(removeLiquidity)]
    fn remove_liquidity(
        &self,
        first_token_amount_min: BigUint,
        second_token_amount_min: BigUint,
    ) -> MultiValue2<EsdtTokenPayment, EsdtTokenPayment> {
        let payment = self.call_value().single_esdt().clone();
        let lp_token_id = self.lp_token_identifier().get();
        require!(payment.token_identifier == lp_token_id, ERROR_INVALID_PAYMENTS);
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let first_token_id = self.first_token_id().get();
        let second_token_id = self.second_token_id().get();
        let lp_supply = self.lp_token_supply().get();

        let first_amount = &payment.amount * &self.pair_reserve(&first_token_id).get() / &lp_supply;
        let second_amount =
            &payment.amount * &self.pair_reserve(&second_token_id).get() / &lp_supply;

        require!(
            first_amount >= first_token_amount_min && second_amount >= second_token_amount_min,
            ERROR_SLIPPAGE_EXCEEDED
        );

        self.pair_reserve(&first_token_id)
            .update(|reserve| *reserve -= &first_amount);
        self.pair_reserve(&second_token_id)
            .update(|reserve| *reserve -= &second_amount);
        self.lp_token_supply()
            .update(|supply| *supply -= &payment.amount);
        self.send().esdt_local_burn(&lp_token_id, 0, &payment.amount);

        let first_payment = EsdtTokenPayment::new(first_token_id, 0, first_amount);
        let second_payment = EsdtTokenPayment::new(second_token_id, 0, second_amount);

        let mut payments = ManagedVec::new();
        for payment in [&first_payment, &second_payment] {
            if payment.amount > 0 {
                payments.push(payment.clone());
            }
        }

        let caller = self.blockchain().get_caller();
        self.tx().to(&caller).payment(payments).transfer_if_not_empty();

        (first_payment, second_payment).into()
    }

    #[payable]
    #[endpoint(swapTokensFixedInput)]
    fn swap_tokens_fixed_input(
        &self,
        token_out: TokenIdentifier,
        amount_out_min: BigUint,
    ) -> EsdtTokenPayment {
        let payment = self.call_value().single_esdt().clone();
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        self.require_pair_tokens(&payment.token_identifier, &token_out);

        let reserve_in = self.pair_reserve(&payment.token_identifier).get();
        let reserve_out = self.pair_reserve(&token_out).get();
        let amount_out = self.get_amount_out(
            &payment.amount,
            &reserve_in,
            &reserve_out,
            self.fee_numerator().get(),
        );

        require!(amount_out > 0, ERROR_INSUFFICIENT_OUTPUT);
        require!(amount_out >= amount_out_min, ERROR_SLIPPAGE_EXCEEDED);

        self.pair_reserve(&payment.token_identifier)
            .update(|reserve| *reserve += &payment.amount);
        self.pair_reserve(&token_out)
            .update(|reserve| *reserve -= &amount_out);

        let out_payment = EsdtTokenPayment::new(token_out, 0, amount_out);
        let caller = self.blockchain().get_caller();
        self.tx().to(&caller).esdt(out_payment.clone()).transfer();

        out_payment
    }

    fn optimal_liquidity_amounts(
        &self,
        first_desired: &BigUint,
        second_desired: &BigUint,
        first_reserve: &BigUint,
        second_reserve: &BigUint,
    ) -> (BigUint, BigUint) {
        let second_optimal = self.quote(first_desired, first_reserve, second_reserve);
        if &second_optimal <= second_desired {
            return (first_desired.clone(), second_optimal);
        }

        let first_optimal = self.quote(second_desired, second_reserve, first_reserve);
        (first_optimal, second_desired.clone())
    }

    fn require_pair_tokens(&self, token_in: &TokenIdentifier, token_out: &TokenIdentifier) {
        let first_token_id = self.first_token_id().get();
        let second_token_id = self.second_token_id().get();

        let valid = (token_in == &first_token_id && token_out == &second_token_id)
            || (token_in == &second_token_id && token_out == &first_token_id);
        require!(valid, ERROR_INVALID_PAYMENTS);
    }

    #[view(getReservesAndTotalSupply)]
    fn get_reserves_and_total_supply(&self) -> MultiValue3<BigUint, BigUint, BigUint> {
        let first_reserve = self.pair_reserve(&self.first_token_id().get()).get();
        let second_reserve = self.pair_reserve(&self.second_token_id().get()).get();

        (first_reserve, second_reserve, self.lp_token_supply().get()).into()
    }

    #[view(getAmountOut)]
    fn get_amount_out_view(&self, token_in: TokenIdentifier, amount_in: BigUint) -> BigUint {
        let first_token_id = self.first_token_id().get();
        let second_token_id = self.second_token_id().get();
        let token_out = if token_in == first_token_id {
            second_token_id
        } else {
            first_token_id
        };
        self.require_pair_tokens(&token_in, &token_out);

        self.get_amount_out(
            &amount_in,
            &self.pair_reserve(&token_in).get(),
            &self.pair_reserve(&token_out).get(),
            self.fee_numerator().get(),
        )
    }

    #[view(getFirstTokenId)]
    #[storage_mapper("first_token_id")]
    fn first_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getSecondTokenId)]
    #[storage_mapper("second_token_id")]
    fn second_token_id(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getLpTokenIdentifier)]
    #[storage_mapper("lpTokenIdentifier")]
    fn lp_token_identifier(&self) -> SingleValueMapper<TokenIdentifier>;

    #[view(getFeeNumerator)]
    #[storage_mapper("fee_numerator")]
    fn fee_numerator(&self) -> SingleValueMapper<u64>;

    #[view(getReserve)]
    #[storage_mapper("reserve")]
    fn pair_reserve(&self, token_id: &TokenIdentifier) -> SingleValueMapper<BigUint>;

    #[view(getTotalSupply)]
    #[storage_mapper("lp_token_supply")]
    fn lp_token_supply(&self) -> SingleValueMapper<BigUint>;
}
