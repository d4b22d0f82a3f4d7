use cosmwasm_std::{ContractResult, HexBinary, Uint256};

use v3_vault::types::LoanInfoResponse;

/// Read-through access to the vault contract as of a given block.
///
/// Every read answers for the state right after the event being applied.
/// `ContractResult::Err` carries the revert reason of a call that reverted,
/// which callers must branch on rather than propagate.
pub trait VaultQuerier {
    /// `loanInfo(tokenId)`
    fn loan_info(&self, vault: &HexBinary, token_id: Uint256, block_number: u64) -> ContractResult<LoanInfoResponse>;

    /// `lendInfo(owner)`
    fn lend_info(&self, vault: &HexBinary, owner: &HexBinary, block_number: u64) -> ContractResult<Uint256>;

    /// `asset()`
    fn asset(&self, vault: &HexBinary, block_number: u64) -> ContractResult<HexBinary>;

    /// `decimals()`
    fn decimals(&self, vault: &HexBinary, block_number: u64) -> ContractResult<u8>;
}
