#![no_std]

pub static ERROR_REENTRANT_CALL: &[u8] = b"Re-entrant call.";

pub static ERROR_INVALID_ASSET: &[u8] = b"Invalid asset.";

pub static ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO: &[u8] = b"Amount must be greater than zero.";

pub static ERROR_INSUFFICIENT_FUNDS: &[u8] = b"Insufficient funds in the vault.";

pub static ERROR_INSUFFICIENT_RESERVE: &[u8] = b"Insufficient reserve pool.";

// Positions

pub static ERROR_BAD_POSITION_ID: &[u8] = b"Bad position id.";

pub static ERROR_BAD_POSITION_WORKER: &[u8] = b"Bad position worker.";

pub static ERROR_NOT_POSITION_OWNER: &[u8] = b"Not position owner.";

pub static ERROR_NOT_A_WORKER: &[u8] = b"Not a worker.";

pub static ERROR_WORKER_NOT_ACCEPT_DEBT: &[u8] = b"Worker does not accept more debt.";

pub static ERROR_TOO_SMALL_DEBT_SIZE: &[u8] = b"Too small debt size.";

pub static ERROR_BAD_WORK_FACTOR: &[u8] = b"Bad work factor.";

pub static ERROR_HEALTH_NOT_IMPROVED: &[u8] = b"Health not improved.";

pub static ERROR_WORKER_UNSTABLE: &[u8] = b"Worker price unstable.";

// Liquidations

pub static ERROR_NO_DEBT: &[u8] = b"No debt.";

pub static ERROR_CANNOT_LIQUIDATE: &[u8] = b"Can't liquidate.";

pub static ERROR_NOT_WHITELISTED_LIQUIDATOR: &[u8] = b"Not whitelisted liquidator.";

// Access

pub static ERROR_NOT_ELIGIBLE_CALLER: &[u8] = b"Caller is not an eligible contract.";

pub static ERROR_NOT_OPERATOR: &[u8] = b"Caller is not the operator.";

pub static ERROR_NOT_REINVESTOR: &[u8] = b"Caller is not a whitelisted reinvestor.";

pub static ERROR_NOT_WHITELISTED_WORKER: &[u8] = b"Worker not whitelisted.";

pub static ERROR_UNAPPROVED_ADD_STRATEGY: &[u8] = b"Unapproved add strategy.";

pub static ERROR_UNAPPROVED_WORK_STRATEGY: &[u8] = b"Unapproved work strategy.";

// Configuration

pub static ERROR_INVALID_BPS: &[u8] = b"Invalid basis points value.";

pub static ERROR_INVALID_KILL_FEES: &[u8] = b"Kill fees must stay below 100%.";

pub static ERROR_INVALID_FACTORS: &[u8] = b"Work factor must not exceed kill factor.";

pub static ERROR_INVALID_RATE_MODEL: &[u8] = b"Invalid rate model parameters.";

pub static ERROR_BOUNTY_EXCEEDS_MAX: &[u8] = b"Reinvest bounty exceeds max.";

pub static ERROR_MAX_BOUNTY_TOO_HIGH: &[u8] = b"Max reinvest bounty too high.";

pub static ERROR_INVALID_PATH: &[u8] = b"Invalid conversion path.";

pub static ERROR_INVALID_PRICE_DIFF: &[u8] = b"Max price difference must be at least 100%.";


// Strategies

pub static ERROR_INVALID_STRATEGY_PARAMS: &[u8] = b"Invalid strategy params.";

pub static ERROR_INSUFFICIENT_LP_RECEIVED: &[u8] = b"Insufficient LP tokens received.";

pub static ERROR_INSUFFICIENT_BASE_RECEIVED: &[u8] = b"Insufficient base token received.";

pub static ERROR_INSUFFICIENT_FARMING_RECEIVED: &[u8] = b"Insufficient farming token received.";

pub static ERROR_UNSUPPORTED_TOKEN: &[u8] = b"Unsupported token.";

pub static ERROR_EXIT_EXCEEDS_POSITION: &[u8] = b"Exit amount exceeds position balance.";

// AMM

pub static ERROR_INSUFFICIENT_RESERVES: &[u8] = b"Insufficient reserves.";

pub static ERROR_INSUFFICIENT_OUTPUT: &[u8] = b"Insufficient output amount.";

pub static ERROR_SLIPPAGE_EXCEEDED: &[u8] = b"Slippage exceeded.";

pub static ERROR_INSUFFICIENT_LIQUIDITY_MINTED: &[u8] = b"Insufficient liquidity minted.";

pub static ERROR_INVALID_PAYMENTS: &[u8] = b"Invalid payments.";

// Farm and oracle

pub static ERROR_UNKNOWN_POOL: &[u8] = b"Unknown farm pool.";

pub static ERROR_INSUFFICIENT_STAKE: &[u8] = b"Insufficient staked amount.";

pub static ERROR_NO_STAKERS: &[u8] = b"No stakers to reward.";

pub static ERROR_PRICE_NOT_SET: &[u8] = b"Price not set.";
