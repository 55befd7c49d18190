use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const SECONDS_PER_YEAR: u64 = 31_536_000;
pub const SECONDS_PER_DAY: u64 = 86_400;

pub const ONE: u64 = 1_000_000_000_000_000_000; // 1 token, 18 decimals
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;

// Rate model, RAY-scaled annual figures
pub const BASE_RATE: u128 = 0;
pub const SLOPE1: u128 = 100_000_000_000_000_000_000_000_000; // 10%
pub const SLOPE2: u128 = 400_000_000_000_000_000_000_000_000; // 40%
pub const SLOPE3: u128 = 1_500_000_000_000_000_000_000_000_000; // 150%
pub const MID_UTILIZATION: u128 = 500_000_000_000_000_000_000_000_000; // 50%
pub const OPTIMAL_UTILIZATION: u128 = 800_000_000_000_000_000_000_000_000; // 80%
pub const MAX_RATE: u128 = 3_000_000_000_000_000_000_000_000_000; // 300%

pub const MIN_DEBT_SIZE: u64 = 10_000_000_000_000_000; // 0.01
pub const RESERVE_POOL_BPS: u64 = 1_000; // 10%
pub const KILL_PRIZE_BPS: u64 = 1_000; // 10%
pub const KILL_TREASURY_BPS: u64 = 100; // 1%

pub const WORK_FACTOR_BPS: u64 = 7_000;
pub const KILL_FACTOR_BPS: u64 = 8_000;

pub const REINVEST_BOUNTY_BPS: u64 = 100; // 1%
pub const MAX_REINVEST_BOUNTY_BPS: u64 = 500;

pub const PAIR_FEE_NUMERATOR: u64 = 9_975;
pub const FARM_POOL_ID: u64 = 1;

pub const BASE_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BASE-abcdef");
pub const FARM_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("FARM-abcdef");
pub const LP_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("BASEFARM-abcdef");
pub const IB_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("IBBASE-abcdef");
pub const SIDE_IB_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("IBSIDE-abcdef");

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");
pub const LENDER_ADDRESS: TestAddress = TestAddress::new("lender");
pub const ALICE_ADDRESS: TestAddress = TestAddress::new("alice");
pub const BOB_ADDRESS: TestAddress = TestAddress::new("bob");
pub const LIQUIDATOR_ADDRESS: TestAddress = TestAddress::new("liquidator");
pub const TREASURY_ADDRESS: TestAddress = TestAddress::new("treasury");
pub const REINVEST_TREASURY_ADDRESS: TestAddress = TestAddress::new("reinvest-treasury");

pub const VAULT_PATH: MxscPath = MxscPath::new("output/vault.mxsc.json");
pub const WORKER_PATH: MxscPath = MxscPath::new("../worker/output/worker.mxsc.json");
pub const STRATEGY_PATH: MxscPath = MxscPath::new("../strategy/output/strategy.mxsc.json");
pub const PAIR_PATH: MxscPath = MxscPath::new("../pair_mock/output/pair-mock.mxsc.json");
pub const FARM_PATH: MxscPath = MxscPath::new("../farm_mock/output/farm-mock.mxsc.json");
pub const ORACLE_PATH: MxscPath = MxscPath::new("../oracle_mock/output/oracle-mock.mxsc.json");
