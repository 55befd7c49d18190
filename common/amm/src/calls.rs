use common_errors::{ERROR_INVALID_PATH, ERROR_UNSUPPORTED_TOKEN};
use common_proxies::proxy_pair;

multiversx_sc::imports!();

/// Cross-contract plumbing around a constant-product pair.
///
/// Pair metadata and reserves are read straight from the pair's storage, and
/// every token movement is reconciled from back-transfers.
#[multiversx_sc::module]
pub trait PairCallsModule: crate::AmmMathModule {
    /// `(reserve_in, reserve_out, lp_supply)` seen from `token_in`, read
    /// straight from the pair's storage.
    fn pair_reserves(
        &self,
        pair: &ManagedAddress,
        token_in: &TokenIdentifier,
    ) -> (BigUint, BigUint, BigUint) {
        let token_out = self.pair_counterpart(pair, token_in);

        (
            self.pair_reserve(pair.clone(), token_in).get(),
            self.pair_reserve(pair.clone(), &token_out).get(),
            self.pair_lp_supply(pair.clone()).get(),
        )
    }

    /// The pair's other token, failing when `token` is not traded there.
    fn pair_counterpart(&self, pair: &ManagedAddress, token: &TokenIdentifier) -> TokenIdentifier {
        let first = self.pair_first_token(pair.clone()).get();
        let second = self.pair_second_token(pair.clone()).get();

        if token == &first {
            second
        } else if token == &second {
            first
        } else {
            sc_panic!(ERROR_UNSUPPORTED_TOKEN)
        }
    }

    /// Swaps the whole `amount_in` and returns the amount received.
    ///
    /// Amounts too small to produce any output are kept rather than sent.
    fn swap_exact_in(
        &self,
        pair: &ManagedAddress,
        token_in: &TokenIdentifier,
        amount_in: &BigUint,
        token_out: &TokenIdentifier,
    ) -> BigUint {
        if *amount_in == 0u64 {
            return BigUint::zero();
        }

        let (reserve_in, reserve_out, _) = self.pair_reserves(pair, token_in);
        let expected = self.get_amount_out(
            amount_in,
            &reserve_in,
            &reserve_out,
            self.pair_fee_numerator(pair.clone()).get(),
        );
        if expected == 0u64 {
            return BigUint::zero();
        }

        let back_transfers = self
            .tx()
            .to(pair)
            .typed(proxy_pair::PairMockProxy)
            .swap_tokens_fixed_input(token_out, &expected)
            .single_esdt(token_in, 0, amount_in)
            .returns(ReturnsBackTransfersLegacyReset)
            .sync_call();

        let mut received = BigUint::zero();
        for payment in back_transfers.esdt_payments.iter() {
            if &payment.token_identifier == token_out {
                received += &payment.amount;
            }
        }

        received
    }

    /// Hops `amount_in` through every pair of `path` in order.
    fn swap_along_path(
        &self,
        path: &ManagedVec<ManagedAddress>,
        token_in: &TokenIdentifier,
        amount_in: &BigUint,
    ) -> EsdtTokenPayment {
        let mut token = token_in.clone();
        let mut amount = amount_in.clone();

        for pair in path.iter() {
            let next_token = self.pair_counterpart(&pair, &token);
            amount = self.swap_exact_in(&pair, &token, &amount, &next_token);
            token = next_token;
        }

        EsdtTokenPayment::new(token, 0, amount)
    }

    /// Token a swap along `path` ends in.
    fn path_output_token(
        &self,
        path: &ManagedVec<ManagedAddress>,
        token_in: &TokenIdentifier,
    ) -> TokenIdentifier {
        let mut token = token_in.clone();
        for pair in path.iter() {
            let first = self.pair_first_token((*pair).clone()).get();
            let second = self.pair_second_token((*pair).clone()).get();
            token = if token == first {
                second
            } else if token == second {
                first
            } else {
                sc_panic!(ERROR_INVALID_PATH)
            };
        }

        token
    }

    /// Adds liquidity and returns `(lp_minted, refund_a, refund_b)`.
    fn add_liquidity_to_pair(
        &self,
        pair: &ManagedAddress,
        token_a: &TokenIdentifier,
        amount_a: &BigUint,
        token_b: &TokenIdentifier,
        amount_b: &BigUint,
    ) -> (BigUint, BigUint, BigUint) {
        if *amount_a == 0u64 || *amount_b == 0u64 {
            return (BigUint::zero(), amount_a.clone(), amount_b.clone());
        }

        let first = self.pair_first_token(pair.clone()).get();
        let mut payments = ManagedVec::new();
        if token_a == &first {
            payments.push(EsdtTokenPayment::new(token_a.clone(), 0, amount_a.clone()));
            payments.push(EsdtTokenPayment::new(token_b.clone(), 0, amount_b.clone()));
        } else {
            payments.push(EsdtTokenPayment::new(token_b.clone(), 0, amount_b.clone()));
            payments.push(EsdtTokenPayment::new(token_a.clone(), 0, amount_a.clone()));
        }

        let back_transfers = self
            .tx()
            .to(pair)
            .typed(proxy_pair::PairMockProxy)
            .add_liquidity(BigUint::zero(), BigUint::zero())
            .payment(payments)
            .returns(ReturnsBackTransfersLegacyReset)
            .sync_call();

        let lp_token = self.pair_lp_token(pair.clone()).get();
        let mut lp_amount = BigUint::zero();
        let mut refund_a = BigUint::zero();
        let mut refund_b = BigUint::zero();
        for payment in back_transfers.esdt_payments.iter() {
            if payment.token_identifier == lp_token {
                lp_amount += &payment.amount;
            } else if &payment.token_identifier == token_a {
                refund_a += &payment.amount;
            } else if &payment.token_identifier == token_b {
                refund_b += &payment.amount;
            }
        }

        (lp_amount, refund_a, refund_b)
    }

    /// Burns `lp_amount` and returns `(amount_a, amount_b)` ordered by `token_a`.
    fn remove_liquidity_from_pair(
        &self,
        pair: &ManagedAddress,
        lp_amount: &BigUint,
        token_a: &TokenIdentifier,
    ) -> (BigUint, BigUint) {
        if *lp_amount == 0u64 {
            return (BigUint::zero(), BigUint::zero());
        }

        let lp_token = self.pair_lp_token(pair.clone()).get();
        let back_transfers = self
            .tx()
            .to(pair)
            .typed(proxy_pair::PairMockProxy)
            .remove_liquidity(BigUint::zero(), BigUint::zero())
            .single_esdt(&lp_token, 0, lp_amount)
            .returns(ReturnsBackTransfersLegacyReset)
            .sync_call();

        let mut amount_a = BigUint::zero();
        let mut amount_b = BigUint::zero();
        for payment in back_transfers.esdt_payments.iter() {
            if &payment.token_identifier == token_a {
                amount_a += &payment.amount;
            } else {
                amount_b += &payment.amount;
            }
        }

        (amount_a, amount_b)
    }

    #[storage_mapper_from_address("first_token_id")]
    fn pair_first_token(
        &self,
        pair_address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("second_token_id")]
    fn pair_second_token(
        &self,
        pair_address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("lpTokenIdentifier")]
    fn pair_lp_token(
        &self,
        pair_address: ManagedAddress,
    ) -> SingleValueMapper<TokenIdentifier, ManagedAddress>;

    #[storage_mapper_from_address("fee_numerator")]
    fn pair_fee_numerator(&self, pair_address: ManagedAddress) -> SingleValueMapper<u64, ManagedAddress>;

    #[storage_mapper_from_address("reserve")]
    fn pair_reserve(
        &self,
        pair_address: ManagedAddress,
        token_id: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint, ManagedAddress>;

    #[storage_mapper_from_address("lp_token_supply")]
    fn pair_lp_supply(&self, pair_address: ManagedAddress) -> SingleValueMapper<BigUint, ManagedAddress>;
}
