//! Storage keys for every aggregate, snapshot and record.
//!
//! Keys are plain byte concatenations of the logical identity. Integers are
//! big-endian: token ids as 32 bytes, block numbers as 8 bytes, log indexes
//! and bucket periods as 4 bytes.

use cosmwasm_std::{HexBinary, Uint256};

pub fn vault_key(vault: &HexBinary) -> Vec<u8> {
    vault.to_vec()
}

pub fn loan_key(token_id: Uint256, vault: &HexBinary) -> Vec<u8> {
    let mut key = token_id.to_be_bytes().to_vec();
    key.extend_from_slice(vault.as_slice());
    key
}

pub fn lender_key(lender: &HexBinary, vault: &HexBinary) -> Vec<u8> {
    let mut key = lender.to_vec();
    key.extend_from_slice(vault.as_slice());
    key
}

/// The loan key already ends with the vault, which is appended a second time
pub fn loan_snapshot_key(loan_key: &[u8], vault: &HexBinary, block_number: u64) -> Vec<u8> {
    snapshot_key(loan_key, vault, block_number)
}

pub fn lender_snapshot_key(lender_key: &[u8], vault: &HexBinary, block_number: u64) -> Vec<u8> {
    snapshot_key(lender_key, vault, block_number)
}

fn snapshot_key(aggregate_key: &[u8], vault: &HexBinary, block_number: u64) -> Vec<u8> {
    let mut key = aggregate_key.to_vec();
    key.extend_from_slice(vault.as_slice());
    key.extend_from_slice(&block_number.to_be_bytes());
    key
}

/// Key of one log: transaction hash ++ log index
pub fn event_key(transaction_hash: &HexBinary, log_index: u32) -> Vec<u8> {
    let mut key = transaction_hash.to_vec();
    key.extend_from_slice(&log_index.to_be_bytes());
    key
}

/// Key of a daily or hourly bucket: vault ++ period index
pub fn bucket_key(vault: &HexBinary, period: u32) -> Vec<u8> {
    let mut key = vault.to_vec();
    key.extend_from_slice(&period.to_be_bytes());
    key
}
