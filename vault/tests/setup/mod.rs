use crate::constants::*;

use common_proxies::{
    proxy_farm, proxy_oracle, proxy_pair, proxy_strategy, proxy_vault, proxy_worker,
};
use common_structs::{BackingKind, Position, PriceSource, StrategyKind, StrategyParams};
use multiversx_sc::{
    codec::TopEncode,
    types::{
        BigUint, EsdtLocalRole, EsdtTokenPayment, ManagedAddress, ManagedBuffer, ManagedVec,
        MultiValueEncoded, ReturnsNewManagedAddress, ReturnsResult, TestAddress,
    },
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestTokenIdentifier},
    ScenarioTxRun, ScenarioTxWhitebox, ScenarioWorld,
};
use vault::storage::Storage;

pub static ESDT_ROLES: &[EsdtLocalRole] = &[EsdtLocalRole::Mint, EsdtLocalRole::Burn];

/// Off-chain copy of the pair math, for expected amounts.
pub struct AmmTester;

impl multiversx_sc::contract_base::ContractBase for AmmTester {
    type Api = StaticApi;
}

impl common_amm::AmmMathModule for AmmTester {}

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(VAULT_PATH, vault::ContractBuilder);
    blockchain.register_contract(WORKER_PATH, worker::ContractBuilder);
    blockchain.register_contract(STRATEGY_PATH, strategy::ContractBuilder);
    blockchain.register_contract(PAIR_PATH, pair_mock::ContractBuilder);
    blockchain.register_contract(FARM_PATH, farm_mock::ContractBuilder);
    blockchain.register_contract(ORACLE_PATH, oracle_mock::ContractBuilder);

    blockchain
}

pub fn big(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount)
}

/// Repayment cap above any debt a test can build up. Kept out of `u64` since
/// the VM only takes `BigUint` values that fit an `i64`.
pub fn repay_all() -> BigUint<StaticApi> {
    BigUint::from(10u64).pow(30)
}

pub fn params(
    min_out: u64,
    exit_amount: &BigUint<StaticApi>,
    max_debt_repayment: &BigUint<StaticApi>,
) -> ManagedBuffer<StaticApi> {
    let params = StrategyParams::<StaticApi> {
        min_out: big(min_out),
        exit_amount: exit_amount.clone(),
        max_debt_repayment: max_debt_repayment.clone(),
    };

    let mut buffer = ManagedBuffer::new();
    params.top_encode(&mut buffer).unwrap();
    buffer
}

pub struct Strategies {
    pub add_base_only: ManagedAddress<StaticApi>,
    pub add_two_sides: ManagedAddress<StaticApi>,
    pub liquidate: ManagedAddress<StaticApi>,
    pub partial_close_liquidate: ManagedAddress<StaticApi>,
    pub partial_close_minimize: ManagedAddress<StaticApi>,
}

pub struct VaultTestState {
    pub world: ScenarioWorld,
    pub vault: ManagedAddress<StaticApi>,
    pub side_vault: ManagedAddress<StaticApi>,
    pub worker: ManagedAddress<StaticApi>,
    pub pair: ManagedAddress<StaticApi>,
    pub farm: ManagedAddress<StaticApi>,
    pub oracle: ManagedAddress<StaticApi>,
    pub strategies: Strategies,
    pub backing_kind: BackingKind,
}

impl VaultTestState {
    /// Full stack on a 1 BASE : 0.1 FARM pair with a 0.25% fee.
    pub fn new(backing_kind: BackingKind) -> Self {
        let mut world = world();
        setup_accounts(&mut world);
        world.current_block().block_timestamp(0);

        let pair = setup_pair(&mut world);
        let farm = setup_farm(&mut world, &pair, backing_kind);
        let oracle = setup_oracle(&mut world);
        let vault = setup_vault(&mut world, IB_TOKEN);
        let side_vault = setup_vault(&mut world, SIDE_IB_TOKEN);
        let strategies = setup_strategies(&mut world, &pair, backing_kind);
        let worker = setup_worker(&mut world, &vault, &pair, &farm, &strategies, backing_kind);

        let mut state = Self {
            world,
            vault,
            side_vault,
            worker,
            pair,
            farm,
            oracle,
            strategies,
            backing_kind,
        };

        let add_base_only = state.strategies.add_base_only.clone();
        let add_two_sides = state.strategies.add_two_sides.clone();
        state.approve_add_strategy(&add_base_only);
        state.approve_add_strategy(&add_two_sides);

        state
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Vault endpoints

    pub fn deposit(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .deposit()
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, &big(amount))
            .run();
    }

    pub fn withdraw(&mut self, from: TestAddress, shares: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .withdraw()
            .single_esdt(&IB_TOKEN.to_token_identifier(), 0, shares)
            .run();
    }

    pub fn withdraw_error(&mut self, from: TestAddress, shares: &BigUint<StaticApi>, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .withdraw()
            .single_esdt(&IB_TOKEN.to_token_identifier(), 0, shares)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    fn base_payment(&self, amount: u64) -> ManagedVec<StaticApi, EsdtTokenPayment<StaticApi>> {
        let mut payments = ManagedVec::new();
        if amount > 0 {
            payments.push(EsdtTokenPayment::new(
                BASE_TOKEN.to_token_identifier(),
                0,
                big(amount),
            ));
        }
        payments
    }

    pub fn work(
        &mut self,
        from: TestAddress,
        position_id: u64,
        principal: u64,
        borrow: u64,
        max_return: BigUint<StaticApi>,
        strategy: &ManagedAddress<StaticApi>,
        strategy_params: ManagedBuffer<StaticApi>,
    ) -> u64 {
        let payments = self.base_payment(principal);
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .work(
                position_id,
                self.worker.clone(),
                big(borrow),
                max_return,
                strategy.clone(),
                strategy_params,
            )
            .multi_esdt(payments)
            .returns(ReturnsResult)
            .run()
    }

    pub fn work_error(
        &mut self,
        from: TestAddress,
        position_id: u64,
        principal: u64,
        borrow: u64,
        strategy: &ManagedAddress<StaticApi>,
        error: &[u8],
    ) {
        let payments = self.base_payment(principal);
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .work(
                position_id,
                self.worker.clone(),
                big(borrow),
                big(0),
                strategy.clone(),
                ManagedBuffer::new(),
            )
            .multi_esdt(payments)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    /// Opens a position through the add strategy and returns its id.
    pub fn open_position(&mut self, from: TestAddress, principal: u64, borrow: u64) -> u64 {
        let strategy = self.strategies.add_base_only.clone();
        self.work(from, 0, principal, borrow, big(0), &strategy, ManagedBuffer::new())
    }

    pub fn kill(&mut self, from: TestAddress, position_id: u64) -> BigUint<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .kill(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn kill_error(&mut self, from: TestAddress, position_id: u64, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .kill(position_id)
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn add_collateral(
        &mut self,
        from: TestAddress,
        position_id: u64,
        principal: u64,
        go_rogue: bool,
        strategy: &ManagedAddress<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .add_collateral(position_id, go_rogue, strategy.clone(), ManagedBuffer::new())
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, &big(principal))
            .run();
    }

    pub fn add_collateral_error(
        &mut self,
        from: TestAddress,
        position_id: u64,
        principal: u64,
        go_rogue: bool,
        strategy: &ManagedAddress<StaticApi>,
        error: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .add_collateral(position_id, go_rogue, strategy.clone(), ManagedBuffer::new())
            .single_esdt(&BASE_TOKEN.to_token_identifier(), 0, &big(principal))
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn accrue_interest(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .accrue_interest()
            .run();
    }

    pub fn approve_add_strategy(&mut self, strategy: &ManagedAddress<StaticApi>) {
        let mut strategies = MultiValueEncoded::new();
        strategies.push(strategy.clone());
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .set_approved_add_strategies(true, strategies)
            .run();
    }

    // Worker and collaborators

    pub fn fund_rewards(&mut self, amount: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.farm.clone())
            .typed(proxy_farm::FarmMockProxy)
            .fund_rewards(FARM_POOL_ID)
            .single_esdt(&FARM_TOKEN.to_token_identifier(), 0, &big(amount))
            .run();
    }

    pub fn reinvest(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .reinvest()
            .run();
    }

    pub fn reinvest_error(&mut self, from: TestAddress, error: &[u8]) {
        self.world
            .tx()
            .from(from)
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .reinvest()
            .returns(ExpectMessage(core::str::from_utf8(error).unwrap()))
            .run();
    }

    pub fn set_beneficial_vault(&mut self, bounty_bps: u64) {
        let mut path = MultiValueEncoded::new();
        path.push(self.pair.clone());
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .set_beneficial_vault(self.side_vault.clone(), bounty_bps, path)
            .run();
    }

    pub fn use_oracle(&mut self, max_price_diff_bps: u64, max_price_age: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .set_stability_params(max_price_diff_bps, max_price_age)
            .run();
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .set_price_source(PriceSource::Oracle(self.oracle.clone()))
            .run();
    }

    /// Sets the WAD price of one FARM in BASE.
    pub fn set_farm_price(&mut self, price: &BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.oracle.clone())
            .typed(proxy_oracle::OracleMockProxy)
            .set_price(
                FARM_TOKEN.to_token_identifier(),
                BASE_TOKEN.to_token_identifier(),
                price.clone(),
            )
            .run();
    }

    /// Sells `amount` FARM into the pair, pushing the FARM price down.
    pub fn dump_farming(&mut self, amount: u64) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.pair.clone())
            .typed(proxy_pair::PairMockProxy)
            .swap_tokens_fixed_input(BASE_TOKEN.to_token_identifier(), big(1))
            .single_esdt(&FARM_TOKEN.to_token_identifier(), 0, &big(amount))
            .run();
    }

    // Vault views

    pub fn total_debt_value(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .total_debt_value()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_debt_share(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .total_debt_share()
            .returns(ReturnsResult)
            .run()
    }

    pub fn reserve_pool(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .reserve_pool()
            .returns(ReturnsResult)
            .run()
    }

    pub fn bad_debt(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .bad_debt()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pool_share_supply(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .pool_share_supply()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_token(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .total_token()
            .returns(ReturnsResult)
            .run()
    }

    pub fn pending_interest(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .pending_interest()
            .returns(ReturnsResult)
            .run()
    }

    pub fn next_position_id(&mut self) -> u64 {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .next_position_id()
            .returns(ReturnsResult)
            .run()
    }

    pub fn position(&mut self, position_id: u64) -> Position<StaticApi> {
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .position(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn position_debt(&mut self, position_id: u64) -> BigUint<StaticApi> {
        let position = self.position(position_id);
        self.world
            .query()
            .to(self.vault.clone())
            .typed(proxy_vault::VaultProxy)
            .debt_share_to_value(position.debt_share)
            .returns(ReturnsResult)
            .run()
    }

    // Worker views

    pub fn health(&mut self, position_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .health(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_stable(&mut self) -> bool {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .is_stable()
            .returns(ReturnsResult)
            .run()
    }

    pub fn shares(&mut self, position_id: u64) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .shares(position_id)
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_share(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .total_share()
            .returns(ReturnsResult)
            .run()
    }

    pub fn total_balance(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .total_balance()
            .returns(ReturnsResult)
            .run()
    }

    pub fn share_to_balance(&mut self, share: BigUint<StaticApi>) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .share_to_balance(share)
            .returns(ReturnsResult)
            .run()
    }

    pub fn position_balance(&mut self, position_id: u64) -> BigUint<StaticApi> {
        let shares = self.shares(position_id);
        self.share_to_balance(shares)
    }

    pub fn buyback_amount(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .buyback_amount()
            .returns(ReturnsResult)
            .run()
    }

    pub fn idle_balance(&mut self, token: TestTokenIdentifier) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .idle_balance(token.to_token_identifier())
            .returns(ReturnsResult)
            .run()
    }

    pub fn reward_balance(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .reward_balance()
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_reinvest_threshold(&mut self, threshold: u64) {
        let mut reward_path = MultiValueEncoded::new();
        if self.backing_kind == BackingKind::LpToken {
            reward_path.push(self.pair.clone());
        }
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .set_reinvest_config(
                REINVEST_BOUNTY_BPS,
                MAX_REINVEST_BOUNTY_BPS,
                big(threshold),
                reward_path,
            )
            .run();
    }

    // Pair views

    /// `(reserve_base, reserve_farming, lp_supply)`
    pub fn pair_state(
        &mut self,
    ) -> (BigUint<StaticApi>, BigUint<StaticApi>, BigUint<StaticApi>) {
        self.world
            .query()
            .to(self.pair.clone())
            .typed(proxy_pair::PairMockProxy)
            .get_reserves_and_total_supply()
            .returns(ReturnsResult)
            .run()
            .into_tuple()
    }

    pub fn amount_out(&mut self, token_in: &[u8], amount_in: &BigUint<StaticApi>) -> BigUint<StaticApi> {
        let token = if token_in == FARM_TOKEN.as_bytes() {
            FARM_TOKEN
        } else {
            BASE_TOKEN
        };
        self.world
            .query()
            .to(self.pair.clone())
            .typed(proxy_pair::PairMockProxy)
            .get_amount_out_view(token.to_token_identifier(), amount_in.clone())
            .returns(ReturnsResult)
            .run()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world
        .account(OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, big(1_000) * big(ONE))
        .esdt_balance(FARM_TOKEN, big(1_000) * big(ONE));

    world
        .account(LENDER_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, big(10) * big(ONE));
    world
        .account(ALICE_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, big(10) * big(ONE));
    world
        .account(BOB_ADDRESS)
        .nonce(1)
        .esdt_balance(BASE_TOKEN, big(10) * big(ONE));

    world.account(LIQUIDATOR_ADDRESS).nonce(1);
    world.account(TREASURY_ADDRESS).nonce(1);
    world.account(REINVEST_TREASURY_ADDRESS).nonce(1);
}

/// BASE/FARM pair seeded with 1 BASE and 0.1 FARM by the owner.
pub fn setup_pair(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let pair = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_pair::PairMockProxy)
        .init(
            BASE_TOKEN.to_token_identifier(),
            FARM_TOKEN.to_token_identifier(),
            LP_TOKEN.to_token_identifier(),
            PAIR_FEE_NUMERATOR,
        )
        .code(PAIR_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(pair.clone(), LP_TOKEN.as_bytes(), ESDT_ROLES);

    let mut payments = ManagedVec::<StaticApi, EsdtTokenPayment<StaticApi>>::new();
    payments.push(EsdtTokenPayment::new(
        BASE_TOKEN.to_token_identifier(),
        0,
        big(ONE),
    ));
    payments.push(EsdtTokenPayment::new(
        FARM_TOKEN.to_token_identifier(),
        0,
        big(ONE / 10),
    ));

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(pair.clone())
        .typed(proxy_pair::PairMockProxy)
        .add_liquidity(big(0), big(0))
        .multi_esdt(payments)
        .run();

    pair
}

pub fn setup_farm(
    world: &mut ScenarioWorld,
    pair: &ManagedAddress<StaticApi>,
    backing_kind: BackingKind,
) -> ManagedAddress<StaticApi> {
    let farm = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_farm::FarmMockProxy)
        .init(FARM_TOKEN.to_token_identifier())
        .code(FARM_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    let staking_token = match backing_kind {
        BackingKind::LpToken => world
            .query()
            .to(pair.clone())
            .typed(proxy_pair::PairMockProxy)
            .lp_token_identifier()
            .returns(ReturnsResult)
            .run(),
        BackingKind::SingleAsset => FARM_TOKEN.to_token_identifier(),
    };

    let pool_id = world
        .tx()
        .from(OWNER_ADDRESS)
        .to(farm.clone())
        .typed(proxy_farm::FarmMockProxy)
        .add_pool(staking_token)
        .returns(ReturnsResult)
        .run();
    assert_eq!(pool_id, FARM_POOL_ID);

    farm
}

pub fn setup_oracle(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_oracle::OracleMockProxy)
        .init()
        .code(ORACLE_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

/// Deploys a BASE vault with `ib_token` already registered.
pub fn setup_vault(
    world: &mut ScenarioWorld,
    ib_token: TestTokenIdentifier,
) -> ManagedAddress<StaticApi> {
    let vault = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_vault::VaultProxy)
        .init(
            BASE_TOKEN.to_token_identifier(),
            BigUint::from(BASE_RATE),
            BigUint::from(SLOPE1),
            BigUint::from(SLOPE2),
            BigUint::from(SLOPE3),
            BigUint::from(MID_UTILIZATION),
            BigUint::from(OPTIMAL_UTILIZATION),
            BigUint::from(MAX_RATE),
            big(MIN_DEBT_SIZE),
            RESERVE_POOL_BPS,
            KILL_PRIZE_BPS,
            KILL_TREASURY_BPS,
            TREASURY_ADDRESS.to_managed_address(),
        )
        .code(VAULT_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    world.set_esdt_local_roles(vault.clone(), ib_token.as_bytes(), ESDT_ROLES);

    // Set the token id for the ib token
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(vault.clone())
        .whitebox(vault::contract_obj, |sc| {
            sc.ib_token().set_token_id(ib_token.to_token_identifier());
        });

    let mut liquidators = MultiValueEncoded::new();
    liquidators.push(LIQUIDATOR_ADDRESS.to_managed_address());
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(vault.clone())
        .typed(proxy_vault::VaultProxy)
        .set_whitelisted_liquidators(true, liquidators)
        .run();

    vault
}

pub fn setup_strategy(
    world: &mut ScenarioWorld,
    pair: &ManagedAddress<StaticApi>,
    kind: StrategyKind,
    backing_kind: BackingKind,
) -> ManagedAddress<StaticApi> {
    world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_strategy::StrategyProxy)
        .init(
            kind,
            backing_kind,
            BASE_TOKEN.to_token_identifier(),
            FARM_TOKEN.to_token_identifier(),
            pair.clone(),
        )
        .code(STRATEGY_PATH)
        .returns(ReturnsNewManagedAddress)
        .run()
}

pub fn setup_strategies(
    world: &mut ScenarioWorld,
    pair: &ManagedAddress<StaticApi>,
    backing_kind: BackingKind,
) -> Strategies {
    Strategies {
        add_base_only: setup_strategy(world, pair, StrategyKind::AddBaseTokenOnly, backing_kind),
        add_two_sides: setup_strategy(world, pair, StrategyKind::AddTwoSidesOptimal, backing_kind),
        liquidate: setup_strategy(world, pair, StrategyKind::Liquidate, backing_kind),
        partial_close_liquidate: setup_strategy(
            world,
            pair,
            StrategyKind::PartialCloseLiquidate,
            backing_kind,
        ),
        partial_close_minimize: setup_strategy(
            world,
            pair,
            StrategyKind::PartialCloseMinimizeTrading,
            backing_kind,
        ),
    }
}

/// Deploys the worker, wires it to every strategy and registers it on the vault.
pub fn setup_worker(
    world: &mut ScenarioWorld,
    vault: &ManagedAddress<StaticApi>,
    pair: &ManagedAddress<StaticApi>,
    farm: &ManagedAddress<StaticApi>,
    strategies: &Strategies,
    backing_kind: BackingKind,
) -> ManagedAddress<StaticApi> {
    let worker = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_worker::WorkerProxy)
        .init(
            vault.clone(),
            BASE_TOKEN.to_token_identifier(),
            FARM_TOKEN.to_token_identifier(),
            backing_kind,
            FARM_TOKEN.to_token_identifier(),
            pair.clone(),
            farm.clone(),
            FARM_POOL_ID,
            strategies.add_base_only.clone(),
            strategies.liquidate.clone(),
            REINVEST_BOUNTY_BPS,
            MAX_REINVEST_BOUNTY_BPS,
            big(0),
            REINVEST_TREASURY_ADDRESS.to_managed_address(),
        )
        .code(WORKER_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    let all_strategies = [
        &strategies.add_base_only,
        &strategies.add_two_sides,
        &strategies.liquidate,
        &strategies.partial_close_liquidate,
        &strategies.partial_close_minimize,
    ];
    for strategy in all_strategies {
        let mut workers = MultiValueEncoded::new();
        workers.push(worker.clone());
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(strategy.clone())
            .typed(proxy_strategy::StrategyProxy)
            .set_workers_ok(true, workers)
            .run();
    }

    let mut work_strategies = MultiValueEncoded::new();
    work_strategies.push(strategies.add_two_sides.clone());
    work_strategies.push(strategies.partial_close_liquidate.clone());
    work_strategies.push(strategies.partial_close_minimize.clone());
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(worker.clone())
        .typed(proxy_worker::WorkerProxy)
        .set_strategy_ok(true, work_strategies)
        .run();

    let mut reinvestors = MultiValueEncoded::new();
    reinvestors.push(OWNER_ADDRESS.to_managed_address());
    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(worker.clone())
        .typed(proxy_worker::WorkerProxy)
        .set_reinvestor_ok(true, reinvestors)
        .run();

    // LP workers restake in base token, so rewards hop through the pair first
    if backing_kind == BackingKind::LpToken {
        let mut reward_path = MultiValueEncoded::new();
        reward_path.push(pair.clone());
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(worker.clone())
            .typed(proxy_worker::WorkerProxy)
            .set_reinvest_config(
                REINVEST_BOUNTY_BPS,
                MAX_REINVEST_BOUNTY_BPS,
                big(0),
                reward_path,
            )
            .run();
    }

    world
        .tx()
        .from(OWNER_ADDRESS)
        .to(vault.clone())
        .typed(proxy_vault::VaultProxy)
        .set_worker_risk(worker.clone(), true, WORK_FACTOR_BPS, KILL_FACTOR_BPS)
        .run();

    worker
}
