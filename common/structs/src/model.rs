#![no_std]

use common_constants::BPS;

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Triple-slope borrow rate curve. All values are RAY-scaled annual figures.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone)]
pub struct RateModel<M: ManagedTypeApi> {
    pub base_rate: ManagedDecimal<M, NumDecimals>,
    pub slope1: ManagedDecimal<M, NumDecimals>,
    pub slope2: ManagedDecimal<M, NumDecimals>,
    pub slope3: ManagedDecimal<M, NumDecimals>,
    pub mid_utilization: ManagedDecimal<M, NumDecimals>,
    pub optimal_utilization: ManagedDecimal<M, NumDecimals>,
    pub max_rate: ManagedDecimal<M, NumDecimals>,
}

/// Vault-wide policy knobs, mutated only by the owner.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct VaultConfig<M: ManagedTypeApi> {
    /// Positions may not keep less debt than this after a `work` call.
    pub min_debt_size: BigUint<M>,
    /// Share of accrued interest retained by the protocol.
    pub reserve_pool_bps: u64,
    /// Liquidator bounty, applied on position health.
    pub kill_prize_bps: u64,
    /// Treasury fee on liquidation, applied on position health.
    pub kill_treasury_bps: u64,
    pub treasury: ManagedAddress<M>,
}

/// Risk parameters the vault applies to one worker.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerRisk {
    pub accept_debt: bool,
    pub work_factor_bps: u64,
    pub kill_factor_bps: u64,
}

impl WorkerRisk {
    /// `debt * 10000 <= work_factor * health`
    pub fn within_work_factor<M: ManagedTypeApi>(
        &self,
        health: &BigUint<M>,
        debt: &BigUint<M>,
    ) -> bool {
        debt * BPS <= health * self.work_factor_bps
    }

    /// `debt * 10000 >= kill_factor * health`
    pub fn is_killable<M: ManagedTypeApi>(&self, health: &BigUint<M>, debt: &BigUint<M>) -> bool {
        debt * BPS >= health * self.kill_factor_bps
    }
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct Position<M: ManagedTypeApi> {
    pub worker: ManagedAddress<M>,
    pub owner: ManagedAddress<M>,
    pub debt_share: BigUint<M>,
}

/// What a worker stakes in the farm on behalf of its positions.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackingKind {
    /// Liquidity tokens of the base/farming pair.
    LpToken,
    /// The farming token itself.
    SingleAsset,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    AddBaseTokenOnly,
    AddTwoSidesOptimal,
    Liquidate,
    PartialCloseLiquidate,
    PartialCloseMinimizeTrading,
}

impl StrategyKind {
    pub fn is_add(&self) -> bool {
        matches!(
            self,
            StrategyKind::AddBaseTokenOnly | StrategyKind::AddTwoSidesOptimal
        )
    }
}

/// Last price an oracle was fed: quote units per one base unit, WAD-scaled.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct PriceFeed<M: ManagedTypeApi> {
    pub price: BigUint<M>,
    pub timestamp: u64,
}

/// Where a worker takes the farming token price from when valuing positions.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub enum PriceSource<M: ManagedTypeApi> {
    Reserves,
    Oracle(ManagedAddress<M>),
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct ReinvestConfig<M: ManagedTypeApi> {
    pub bounty_bps: u64,
    pub max_bounty_bps: u64,
    /// Minimum harvested reward before a reinvest converts anything.
    pub threshold: BigUint<M>,
}

#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct BeneficialVaultConfig<M: ManagedTypeApi> {
    pub vault: ManagedAddress<M>,
    pub bounty_bps: u64,
    /// Pairs to hop through, reward token first, ending in the vault's base token.
    pub path: ManagedVec<M, ManagedAddress<M>>,
}

/// Arguments every strategy kind decodes from the opaque `params` buffer.
///
/// - `min_out`: slippage floor on the main output (LP for adds, base token for
///   liquidations, farming token for minimize-trading).
/// - `exit_amount`: backing balance to close on partial closes.
/// - `max_debt_repayment`: cap on base token returned to repay debt.
#[type_abi]
#[derive(NestedEncode, NestedDecode, TopEncode, TopDecode, Clone, Debug, PartialEq, Eq)]
pub struct StrategyParams<M: ManagedTypeApi> {
    pub min_out: BigUint<M>,
    pub exit_amount: BigUint<M>,
    pub max_debt_repayment: BigUint<M>,
}

impl<M: ManagedTypeApi> StrategyParams<M> {
    pub fn none() -> Self {
        StrategyParams {
            min_out: BigUint::zero(),
            exit_amount: BigUint::zero(),
            max_debt_repayment: BigUint::zero(),
        }
    }

    pub fn with_min_out(min_out: BigUint<M>) -> Self {
        StrategyParams {
            min_out,
            ..Self::none()
        }
    }
}
