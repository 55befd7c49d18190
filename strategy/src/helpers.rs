use common_errors::ERROR_UNSUPPORTED_TOKEN;
use common_structs::BackingKind;

use crate::storage;

multiversx_sc::imports!();

/// Amounts a strategy was handed by its worker, split by role.
///
/// For single-asset workers the farming token is the backing token and is
/// always counted as `backing`.
pub struct Inflow<M: ManagedTypeApi> {
    pub base: BigUint<M>,
    pub farming: BigUint<M>,
    pub backing: BigUint<M>,
}

#[multiversx_sc::module]
pub trait HelpersModule: storage::Storage {
    fn collect_inflow(&self) -> Inflow<Self::Api> {
        let base_token = self.base_token().get();
        let farming_token = self.farming_token().get();
        let backing_token = self.backing_token().get();

        let mut inflow = Inflow {
            base: BigUint::zero(),
            farming: BigUint::zero(),
            backing: BigUint::zero(),
        };

        let payments = self.call_value().all_transfers();
        for payment in payments.iter() {
            let token = payment.token_identifier.clone().unwrap_esdt();
            if token == backing_token {
                inflow.backing += &payment.amount;
            } else if token == base_token {
                inflow.base += &payment.amount;
            } else if token == farming_token {
                inflow.farming += &payment.amount;
            } else {
                sc_panic!(ERROR_UNSUPPORTED_TOKEN);
            }
        }

        inflow
    }

    /// Builds the transfer back to the worker, skipping empty amounts.
    fn outflow(
        &self,
        base: BigUint,
        farming: BigUint,
        backing: BigUint,
    ) -> ManagedVec<EsdtTokenPayment> {
        let mut payments = ManagedVec::new();
        if base > 0 {
            payments.push(EsdtTokenPayment::new(self.base_token().get(), 0, base));
        }
        if farming > 0 && self.backing().get() == BackingKind::LpToken {
            payments.push(EsdtTokenPayment::new(self.farming_token().get(), 0, farming));
        }
        if backing > 0 {
            payments.push(EsdtTokenPayment::new(self.backing_token().get(), 0, backing));
        }

        payments
    }
}
