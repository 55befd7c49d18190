#![no_std]

use common_errors::*;

multiversx_sc::imports!();

/// Pool-id keyed staking farm.
///
/// Rewards are pushed by the owner through `fundRewards` and split pro-rata over
/// the stakers present at that moment, so a test can pin exact reward amounts.
/// Deposits and withdrawals never harvest.
#[multiversx_sc::contract]
pub trait FarmMock {
    #[init]
    fn init(&self, reward_token: TokenIdentifier) {
        self.reward_token().set(&reward_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(addPool)]
    fn add_pool(&self, staking_token: TokenIdentifier) -> u64 {
        self.pools().push(&staking_token) as u64
    }

    #[payable]
    #[endpoint(deposit)]
    fn deposit(&self, pool_id: u64) {
        let staking_token = self.require_pool(pool_id);
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == staking_token,
            ERROR_INVALID_ASSET
        );
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let caller = self.blockchain().get_caller();
        self.user_stake(pool_id, &caller)
            .update(|stake| *stake += &payment.amount);
        self.total_staked(pool_id)
            .update(|total| *total += &payment.amount);
        self.stakers(pool_id).insert(caller);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, pool_id: u64, amount: BigUint) {
        let staking_token = self.require_pool(pool_id);
        let caller = self.blockchain().get_caller();

        let stake_mapper = self.user_stake(pool_id, &caller);
        let stake = stake_mapper.get();
        require!(amount <= stake, ERROR_INSUFFICIENT_STAKE);

        let remaining = &stake - &amount;
        if remaining == 0 {
            stake_mapper.clear();
            self.stakers(pool_id).swap_remove(&caller);
        } else {
            stake_mapper.set(&remaining);
        }
        self.total_staked(pool_id).update(|total| *total -= &amount);

        self.tx()
            .to(&caller)
            .single_esdt(&staking_token, 0, &amount)
            .transfer_if_not_empty();
    }

    #[endpoint(harvest)]
    fn harvest(&self, pool_id: u64) -> BigUint {
        self.require_pool(pool_id);
        let caller = self.blockchain().get_caller();

        let reward = self.pending_reward(pool_id, &caller).take();
        self.tx()
            .to(&caller)
            .single_esdt(&self.reward_token().get(), 0, &reward)
            .transfer_if_not_empty();

        reward
    }

    #[only_owner]
    #[payable]
    #[endpoint(fundRewards)]
    fn fund_rewards(&self, pool_id: u64) {
        self.require_pool(pool_id);
        let payment = self.call_value().single_esdt();
        require!(
            payment.token_identifier == self.reward_token().get(),
            ERROR_INVALID_ASSET
        );

        let total_staked = self.total_staked(pool_id).get();
        require!(total_staked > 0, ERROR_NO_STAKERS);

        let mut distributed = BigUint::zero();
        for staker in self.stakers(pool_id).iter() {
            let stake = self.user_stake(pool_id, &staker).get();
            let reward = &payment.amount * &stake / &total_staked;
            distributed += &reward;
            self.pending_reward(pool_id, &staker)
                .update(|pending| *pending += reward);
        }

        // rounding dust goes to the first staker
        let dust = &payment.amount - &distributed;
        if dust > 0 {
            let first = self.stakers(pool_id).get_by_index(1);
            self.pending_reward(pool_id, &first)
                .update(|pending| *pending += dust);
        }
    }

    fn require_pool(&self, pool_id: u64) -> TokenIdentifier {
        let index = pool_id as usize;
        require!(
            index >= 1 && index <= self.pools().len(),
            ERROR_UNKNOWN_POOL
        );
        self.pools().get(index)
    }

    #[view(getPoolStakingToken)]
    fn pool_staking_token(&self, pool_id: u64) -> TokenIdentifier {
        self.require_pool(pool_id)
    }

    #[view(pendingReward)]
    #[storage_mapper("pending_reward")]
    fn pending_reward(&self, pool_id: u64, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(userInfo)]
    #[storage_mapper("user_stake")]
    fn user_stake(&self, pool_id: u64, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalStaked)]
    #[storage_mapper("total_staked")]
    fn total_staked(&self, pool_id: u64) -> SingleValueMapper<BigUint>;

    #[storage_mapper("stakers")]
    fn stakers(&self, pool_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("pools")]
    fn pools(&self) -> VecMapper<TokenIdentifier>;

    #[view(getRewardToken)]
    #[storage_mapper("reward_token")]
    fn reward_token(&self) -> SingleValueMapper<TokenIdentifier>;
}
