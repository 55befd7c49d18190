use common_structs::{RateModel, VaultConfig};

multiversx_sc::imports!();

/// A snapshot of the vault's ledgers, read once per call and committed back to
/// storage when dropped.
///
/// `cash` is the vault's base token balance minus whatever base token the
/// current call brought in, so interest accrued on entry never counts the
/// incoming payment as idle liquidity.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage,
{
    sc_ref: &'a C,
    pub total_debt_value: BigUint<C::Api>,
    pub total_debt_share: BigUint<C::Api>,
    pub reserve_pool: BigUint<C::Api>,
    pub bad_debt: BigUint<C::Api>,
    pub pool_share_supply: BigUint<C::Api>,
    pub last_accrual_time: u64,
    /// The timestamp of the current block (seconds since Unix epoch).
    pub timestamp: u64,
    pub cash: BigUint<C::Api>,
    pub base_token: TokenIdentifier<C::Api>,
    pub config: VaultConfig<C::Api>,
    pub rate_model: RateModel<C::Api>,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage,
{
    pub fn new(sc_ref: &'a C) -> Self {
        let base_token = sc_ref.base_token().get();

        let mut incoming = BigUint::zero();
        for payment in sc_ref.call_value().all_transfers().iter() {
            if base_token == payment.token_identifier {
                incoming += &payment.amount;
            }
        }
        let balance = sc_ref.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(base_token.clone()),
            0,
        );

        Cache {
            total_debt_value: sc_ref.total_debt_value().get(),
            total_debt_share: sc_ref.total_debt_share().get(),
            reserve_pool: sc_ref.reserve_pool().get(),
            bad_debt: sc_ref.bad_debt().get(),
            pool_share_supply: sc_ref.pool_share_supply().get(),
            last_accrual_time: sc_ref.last_accrual_time().get(),
            timestamp: sc_ref.blockchain().get_block_timestamp(),
            cash: balance - incoming,
            base_token,
            config: sc_ref.vault_config().get(),
            rate_model: sc_ref.rate_model().get(),
            sc_ref,
        }
    }

    /// `cash + total_debt_value - reserve_pool`, floored at zero.
    pub fn total_token(&self) -> BigUint<C::Api> {
        let gross = &self.cash + &self.total_debt_value;
        if gross > self.reserve_pool {
            gross - &self.reserve_pool
        } else {
            BigUint::zero()
        }
    }

    /// Cash that can leave the vault without touching the reserve pool.
    pub fn available_cash(&self) -> BigUint<C::Api> {
        if self.cash > self.reserve_pool {
            &self.cash - &self.reserve_pool
        } else {
            BigUint::zero()
        }
    }

    /// Re-reads the balance after tokens moved in or out mid-call.
    pub fn refresh_cash(&mut self) {
        self.cash = self.sc_ref.blockchain().get_sc_balance(
            &EgldOrEsdtTokenIdentifier::esdt(self.base_token.clone()),
            0,
        );
    }
}

impl<C> Drop for Cache<'_, C>
where
    C: crate::storage::Storage,
{
    fn drop(&mut self) {
        // commit changes to storage for the mutable fields
        self.sc_ref.total_debt_value().set(&self.total_debt_value);
        self.sc_ref.total_debt_share().set(&self.total_debt_share);
        self.sc_ref.reserve_pool().set(&self.reserve_pool);
        self.sc_ref.bad_debt().set(&self.bad_debt);
        self.sc_ref.pool_share_supply().set(&self.pool_share_supply);
        self.sc_ref.last_accrual_time().set(self.last_accrual_time);
    }
}
