use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{ContractResult, HexBinary, Int256, Storage, Uint256};
use cw_storage_plus::{Item, Map};

use v3_vault::indexer::Config;
use v3_vault::types::{
    DailyExchangeRate, HourlyExchangeRate, Lender, LenderSnapshot, Liquidation, Loan,
    LoanSnapshot, RawEventRecord, Vault,
};

use crate::keys::{lender_key, loan_key, vault_key};
use crate::querier::VaultQuerier;
use crate::ContractError;

/// Position of the last applied event of a vault
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct EventCursor {
    pub block_number: u64,
    pub log_index: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const CURSORS: Map<&[u8], EventCursor> = Map::new("cursors"); //vault, last applied event

//Aggregates
pub const VAULTS: Map<&[u8], Vault> = Map::new("vaults");
pub const LOANS: Map<&[u8], Loan> = Map::new("loans");
pub const LENDERS: Map<&[u8], Lender> = Map::new("lenders");

//Append only
pub const LOAN_SNAPSHOTS: Map<&[u8], LoanSnapshot> = Map::new("loan_snapshots");
pub const LENDER_SNAPSHOTS: Map<&[u8], LenderSnapshot> = Map::new("lender_snapshots");
pub const DAILY_EXCHANGE_RATES: Map<&[u8], DailyExchangeRate> = Map::new("daily_exchange_rates");
pub const HOURLY_EXCHANGE_RATES: Map<&[u8], HourlyExchangeRate> = Map::new("hourly_exchange_rates");
pub const LIQUIDATIONS: Map<&[u8], Liquidation> = Map::new("liquidations");
pub const RAW_EVENTS: Map<&[u8], RawEventRecord> = Map::new("raw_events"); //tx hash + log index, verbatim log


//Helper functions
/// Returns the Vault, reading its config from the contract on first sight
pub fn get_or_create_vault(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    vault_address: &HexBinary,
    block_number: u64,
) -> Result<Vault, ContractError> {
    let key = vault_key(vault_address);
    if let Some(vault) = VAULTS.may_load(storage, key.as_slice())? {
        return Ok(vault);
    }

    let asset = match querier.asset(vault_address, block_number) {
        ContractResult::Ok(asset) => asset,
        ContractResult::Err(reason) => {
            return Err(ContractError::VaultInfoUnavailable { vault: vault_address.clone(), reason })
        }
    };
    let decimals = match querier.decimals(vault_address, block_number) {
        ContractResult::Ok(decimals) => decimals,
        ContractResult::Err(reason) => {
            return Err(ContractError::VaultInfoUnavailable { vault: vault_address.clone(), reason })
        }
    };

    let vault = Vault {
        id: vault_address.clone(),
        asset,
        decimals,
    };
    VAULTS.save(storage, key.as_slice(), &vault)?;

    Ok(vault)
}

/// Returns the stored Loan or a fresh, unsaved one owned by `owner`
pub fn get_or_create_loan(
    storage: &dyn Storage,
    token_id: Uint256,
    vault_address: &HexBinary,
    owner: &HexBinary,
) -> Result<Loan, ContractError> {
    let key = loan_key(token_id, vault_address);
    match LOANS.may_load(storage, key.as_slice())? {
        Some(loan) => Ok(loan),
        None => Ok(Loan {
            id: HexBinary::from(key),
            token_id,
            vault: vault_address.clone(),
            owner: owner.clone(),
            shares: Int256::zero(),
            is_exited: false,
            previous_loan: None,
        }),
    }
}

/// Loads the loan a new position carries over from
pub fn load_predecessor_loan(
    storage: &dyn Storage,
    old_token_id: Uint256,
    vault_address: &HexBinary,
) -> Result<Loan, ContractError> {
    match LOANS.may_load(storage, loan_key(old_token_id, vault_address).as_slice())? {
        Some(loan) => Ok(loan),
        None => Err(ContractError::MissingPredecessorLoan {
            old_token_id,
            vault: vault_address.clone(),
        }),
    }
}

/// Returns the stored Lender or a fresh, unsaved one
pub fn get_or_create_lender(
    storage: &dyn Storage,
    address: &HexBinary,
    vault_address: &HexBinary,
) -> Result<Lender, ContractError> {
    let key = lender_key(address, vault_address);
    match LENDERS.may_load(storage, key.as_slice())? {
        Some(lender) => Ok(lender),
        None => Ok(Lender {
            id: HexBinary::from(key),
            address: address.clone(),
            vault: vault_address.clone(),
            shares: Int256::zero(),
        }),
    }
}

pub fn save_loan(storage: &mut dyn Storage, loan: &Loan) -> Result<(), ContractError> {
    LOANS.save(storage, loan.id.as_slice(), loan)?;
    Ok(())
}

pub fn save_lender(storage: &mut dyn Storage, lender: &Lender) -> Result<(), ContractError> {
    LENDERS.save(storage, lender.id.as_slice(), lender)?;
    Ok(())
}

/// Errors unless (block, log index) is strictly after the vault's last applied event
pub fn assert_event_order(
    storage: &dyn Storage,
    vault_address: &HexBinary,
    block_number: u64,
    log_index: u32,
) -> Result<(), ContractError> {
    if let Some(cursor) = CURSORS.may_load(storage, vault_address.as_slice())? {
        if (block_number, log_index) <= (cursor.block_number, cursor.log_index) {
            return Err(ContractError::OutOfOrderEvent {
                vault: vault_address.clone(),
                block: block_number,
                log_index,
                last_block: cursor.block_number,
                last_log_index: cursor.log_index,
            });
        }
    }

    Ok(())
}

pub fn advance_cursor(
    storage: &mut dyn Storage,
    vault_address: &HexBinary,
    block_number: u64,
    log_index: u32,
) -> Result<(), ContractError> {
    CURSORS.save(
        storage,
        vault_address.as_slice(),
        &EventCursor { block_number, log_index },
    )?;
    Ok(())
}
