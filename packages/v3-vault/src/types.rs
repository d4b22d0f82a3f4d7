use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Decimal256, HexBinary, Int256, Uint256};

use crate::events::VaultEvent;

//Aggregates

/// Read-mostly configuration cache of one vault contract
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Vault {
    pub id: HexBinary,
    pub asset: HexBinary,
    pub decimals: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Loan {
    pub id: HexBinary,
    pub token_id: Uint256,
    pub vault: HexBinary,
    pub owner: HexBinary,
    /// Debt shares, borrows minus repays
    pub shares: Int256,
    pub is_exited: bool,
    /// Key of the loan this position was carried over from
    pub previous_loan: Option<HexBinary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Lender {
    pub id: HexBinary,
    pub address: HexBinary,
    pub vault: HexBinary,
    /// Lend shares, deposits minus withdrawals
    pub shares: Int256,
}

//Snapshots

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct LoanSnapshot {
    pub id: HexBinary,
    pub loan: HexBinary,
    pub debt: Uint256,
    pub collateral_value: Uint256,
    pub full_value: Uint256,
    pub shares: Int256,
    pub owner: HexBinary,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: HexBinary,
    /// Only set by Repay
    pub amount_repaid: Option<Uint256>,
    /// Only set by Borrow
    pub amount_borrowed: Option<Uint256>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct LenderSnapshot {
    pub id: HexBinary,
    pub lender: HexBinary,
    pub lent: Uint256,
    pub shares: Int256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: HexBinary,
}

//Exchange rates

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct DailyExchangeRate {
    pub id: HexBinary,
    pub day: u32,
    pub vault: HexBinary,
    pub debt_exchange_rate: Decimal256,
    pub lend_exchange_rate: Decimal256,
    pub block_number: u64,
    pub block_timestamp: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct HourlyExchangeRate {
    pub id: HexBinary,
    pub hour: u32,
    pub vault: HexBinary,
    pub debt_exchange_rate: Decimal256,
    pub lend_exchange_rate: Decimal256,
    pub block_number: u64,
    pub block_timestamp: u64,
}

//Event records

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Liquidation {
    pub id: HexBinary,
    pub loan: HexBinary,
    pub liquidator: HexBinary,
    pub owner: HexBinary,
    pub value: Uint256,
    pub cost: Uint256,
    pub amount0: Uint256,
    pub amount1: Uint256,
    pub reserve: Uint256,
    pub missing: Uint256,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: HexBinary,
}

/// Verbatim mirror of a contract log
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct RawEventRecord {
    pub id: HexBinary,
    pub event: VaultEvent,
    pub block_number: u64,
    pub block_timestamp: u64,
    pub transaction_hash: HexBinary,
}

//Contract reads

/// `loanInfo(tokenId)` as of the event's block
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct LoanInfoResponse {
    pub debt: Uint256,
    pub collateral_value: Uint256,
    pub full_value: Uint256,
}

impl LoanInfoResponse {
    pub fn zero() -> Self {
        LoanInfoResponse {
            debt: Uint256::zero(),
            collateral_value: Uint256::zero(),
            full_value: Uint256::zero(),
        }
    }
}
