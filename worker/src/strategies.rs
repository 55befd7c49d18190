use common_proxies::proxy_strategy;

use crate::storage;

multiversx_sc::imports!();

/// What a strategy sent back, split by role.
pub struct StrategyOutput<M: ManagedTypeApi> {
    pub base: BigUint<M>,
    pub backing: BigUint<M>,
    /// Everything else, owed to the position owner.
    pub other: ManagedVec<M, EsdtTokenPayment<M>>,
}

#[multiversx_sc::module]
pub trait StrategiesModule: storage::Storage {
    /// Hands `payments` to `strategy` and sorts what comes back.
    fn run_strategy(
        &self,
        strategy: &ManagedAddress,
        user: &ManagedAddress,
        debt: &BigUint,
        params: &ManagedBuffer,
        payments: ManagedVec<EsdtTokenPayment>,
    ) -> StrategyOutput<Self::Api> {
        let back_transfers = self
            .tx()
            .to(strategy)
            .typed(proxy_strategy::StrategyProxy)
            .execute(user, debt, params)
            .payment(payments)
            .returns(ReturnsBackTransfersLegacyReset)
            .sync_call();

        let base_token = self.base_token().get();
        let backing_token = self.backing_token().get();

        let mut output = StrategyOutput {
            base: BigUint::zero(),
            backing: BigUint::zero(),
            other: ManagedVec::new(),
        };
        for payment in back_transfers.esdt_payments.iter() {
            if payment.token_identifier == backing_token {
                output.backing += &payment.amount;
            } else if payment.token_identifier == base_token {
                output.base += &payment.amount;
            } else {
                output.other.push(EsdtTokenPayment::new(
                    payment.token_identifier.clone(),
                    payment.token_nonce,
                    payment.amount.clone(),
                ));
            }
        }

        output
    }
}
