#![no_std]

pub const SECONDS_PER_YEAR: u64 = 31_536_000;

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// 1.0 in 18-decimal fixed point, used for oracle prices
pub const WAD: u128 = 1_000_000_000_000_000_000;

pub const BPS: u64 = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Hard ceiling for the worker reinvest bounty cap (30%)
pub const MAX_REINVEST_BOUNTY_BPS: u64 = 3_000;

/// Default swap fee retained by the pair on every trade (0.25%)
pub const DEFAULT_FEE_NUMERATOR: u64 = 9_975;
pub const FEE_DENOMINATOR: u64 = 10_000;

/// LP units locked forever on the first liquidity add
pub const MINIMUM_LIQUIDITY: u64 = 1_000;

/// Id passed by the vault when a position is opened
pub const NEW_POSITION_ID: u64 = 0;
