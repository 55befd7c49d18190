use common_proxies::proxy_farm;

use crate::storage;

multiversx_sc::imports!();

/// Position-share accounting over the worker's farm stake.
///
/// Shares are minted against the stake as it stands before the new deposit, so
/// rewards re-staked by `reinvest` raise the value of every existing share.
/// Both conversions truncate, which leaves rounding dust with the pool.
#[multiversx_sc::module]
pub trait LedgerModule: storage::Storage {
    /// Backing token the worker has staked in the farm.
    #[view(getTotalBalance)]
    fn total_balance(&self) -> BigUint {
        let farm = self.farm().get();
        self.farm_user_stake(farm, self.pool_id().get(), &self.blockchain().get_sc_address())
            .get()
    }

    #[view(shareToBalance)]
    fn share_to_balance(&self, share: BigUint) -> BigUint {
        let total_share = self.total_share().get();
        if total_share == 0 {
            return share;
        }

        share * self.total_balance() / total_share
    }

    #[view(balanceToShare)]
    fn balance_to_share(&self, balance: BigUint) -> BigUint {
        let total_share = self.total_share().get();
        let total_balance = self.total_balance();
        if total_share == 0 || total_balance == 0 {
            return balance;
        }

        balance * total_share / total_balance
    }

    /// Stakes `balance` for `position_id` and returns the shares minted.
    fn add_share(&self, position_id: u64, balance: &BigUint) -> BigUint {
        if *balance == 0 {
            return BigUint::zero();
        }

        let share = self.balance_to_share(balance.clone());
        self.stake(balance);
        self.shares(position_id).update(|shares| *shares += &share);
        self.total_share().update(|total| *total += &share);

        share
    }

    /// Burns every share of `position_id` and unstakes what they are worth.
    fn remove_share(&self, position_id: u64) -> BigUint {
        let share = self.shares(position_id).take();
        if share == 0 {
            return BigUint::zero();
        }

        let balance = self.share_to_balance(share.clone());
        self.total_share().update(|total| *total -= &share);
        self.unstake(&balance);

        balance
    }

    fn stake(&self, amount: &BigUint) {
        if *amount == 0 {
            return;
        }

        self.tx()
            .to(self.farm().get())
            .typed(proxy_farm::FarmMockProxy)
            .deposit(self.pool_id().get())
            .single_esdt(&self.backing_token().get(), 0, amount)
            .sync_call();
    }

    fn unstake(&self, amount: &BigUint) {
        if *amount == 0 {
            return;
        }

        self.tx()
            .to(self.farm().get())
            .typed(proxy_farm::FarmMockProxy)
            .withdraw(self.pool_id().get(), amount)
            .returns(ReturnsBackTransfersReset)
            .sync_call();
    }
}
