use cosmwasm_schema::cw_serde;
use cosmwasm_std::{HexBinary, Uint256};

/// Block the event was included in
#[cw_serde]
pub struct BlockInfo {
    pub number: u64,
    /// Seconds since the unix epoch
    pub timestamp: u64,
}

/// One decoded log emitted by a vault contract, in feed order
#[cw_serde]
pub struct EventEnvelope {
    /// Emitting contract
    pub address: HexBinary,
    pub block: BlockInfo,
    pub transaction_hash: HexBinary,
    pub log_index: u32,
    pub event: VaultEvent,
}

#[cw_serde]
pub enum VaultEvent {
    /// A position NFT was added to the vault, optionally replacing `old_token_id`
    Add(AddParams),
    /// A position NFT left the vault
    Remove(RemoveParams),
    Borrow(BorrowParams),
    Repay(RepayParams),
    Deposit(DepositParams),
    Withdraw(WithdrawParams),
    WithdrawCollateral(WithdrawCollateralParams),
    ExchangeRateUpdate(ExchangeRateUpdateParams),
    Liquidate(LiquidateParams),
    Approval(ApprovalParams),
    Transfer(TransferParams),
    OwnershipTransferred(OwnershipTransferredParams),
    SetLimits(SetLimitsParams),
    SetReserveFactor(SetReserveFactorParams),
    SetReserveProtectionFactor(SetReserveProtectionFactorParams),
    SetTokenConfig(SetTokenConfigParams),
    SetTransformer(SetTransformerParams),
    WithdrawReserves(WithdrawReservesParams),
}

impl VaultEvent {
    /// Event name as declared in the contract ABI
    pub fn name(&self) -> &'static str {
        match self {
            VaultEvent::Add(_) => "Add",
            VaultEvent::Remove(_) => "Remove",
            VaultEvent::Borrow(_) => "Borrow",
            VaultEvent::Repay(_) => "Repay",
            VaultEvent::Deposit(_) => "Deposit",
            VaultEvent::Withdraw(_) => "Withdraw",
            VaultEvent::WithdrawCollateral(_) => "WithdrawCollateral",
            VaultEvent::ExchangeRateUpdate(_) => "ExchangeRateUpdate",
            VaultEvent::Liquidate(_) => "Liquidate",
            VaultEvent::Approval(_) => "Approval",
            VaultEvent::Transfer(_) => "Transfer",
            VaultEvent::OwnershipTransferred(_) => "OwnershipTransferred",
            VaultEvent::SetLimits(_) => "SetLimits",
            VaultEvent::SetReserveFactor(_) => "SetReserveFactor",
            VaultEvent::SetReserveProtectionFactor(_) => "SetReserveProtectionFactor",
            VaultEvent::SetTokenConfig(_) => "SetTokenConfig",
            VaultEvent::SetTransformer(_) => "SetTransformer",
            VaultEvent::WithdrawReserves(_) => "WithdrawReserves",
        }
    }

    /// Position lifecycle events aren't part of the mirrored ABI set
    pub fn is_mirrored(&self) -> bool {
        !matches!(self, VaultEvent::Add(_) | VaultEvent::Remove(_))
    }
}

#[cw_serde]
pub struct AddParams {
    pub token_id: Uint256,
    pub owner: HexBinary,
    /// Zero when the position is new
    pub old_token_id: Uint256,
}

#[cw_serde]
pub struct RemoveParams {
    pub token_id: Uint256,
    pub owner: HexBinary,
    pub recipient: HexBinary,
}

#[cw_serde]
pub struct BorrowParams {
    pub token_id: Uint256,
    pub owner: HexBinary,
    pub assets: Uint256,
    pub shares: Uint256,
}

#[cw_serde]
pub struct RepayParams {
    pub token_id: Uint256,
    pub repayer: HexBinary,
    pub owner: HexBinary,
    pub assets: Uint256,
    pub shares: Uint256,
}

#[cw_serde]
pub struct DepositParams {
    pub sender: HexBinary,
    pub owner: HexBinary,
    pub assets: Uint256,
    pub shares: Uint256,
}

#[cw_serde]
pub struct WithdrawParams {
    pub sender: HexBinary,
    pub receiver: HexBinary,
    pub owner: HexBinary,
    pub assets: Uint256,
    pub shares: Uint256,
}

#[cw_serde]
pub struct WithdrawCollateralParams {
    pub token_id: Uint256,
    pub owner: HexBinary,
    pub recipient: HexBinary,
    pub liquidity: Uint256,
    pub amount0: Uint256,
    pub amount1: Uint256,
}

#[cw_serde]
pub struct ExchangeRateUpdateParams {
    pub debt_exchange_rate_x96: Uint256,
    pub lend_exchange_rate_x96: Uint256,
}

#[cw_serde]
pub struct LiquidateParams {
    pub token_id: Uint256,
    pub liquidator: HexBinary,
    pub owner: HexBinary,
    pub value: Uint256,
    pub cost: Uint256,
    pub amount0: Uint256,
    pub amount1: Uint256,
    pub reserve: Uint256,
    pub missing: Uint256,
}

#[cw_serde]
pub struct ApprovalParams {
    pub owner: HexBinary,
    pub spender: HexBinary,
    pub value: Uint256,
}

#[cw_serde]
pub struct TransferParams {
    pub from: HexBinary,
    pub to: HexBinary,
    pub value: Uint256,
}

#[cw_serde]
pub struct OwnershipTransferredParams {
    pub previous_owner: HexBinary,
    pub new_owner: HexBinary,
}

#[cw_serde]
pub struct SetLimitsParams {
    pub global_lend_limit: Uint256,
    pub global_debt_limit: Uint256,
}

#[cw_serde]
pub struct SetReserveFactorParams {
    pub reserve_factor_x32: u32,
}

#[cw_serde]
pub struct SetReserveProtectionFactorParams {
    pub reserve_protection_factor_x32: u32,
}

#[cw_serde]
pub struct SetTokenConfigParams {
    pub token: HexBinary,
    pub collateral_factor_x32: u32,
    pub collateral_value_limit: u32,
}

#[cw_serde]
pub struct SetTransformerParams {
    pub transformer: HexBinary,
    pub active: bool,
}

#[cw_serde]
pub struct WithdrawReservesParams {
    pub amount: Uint256,
    pub receiver: HexBinary,
}
