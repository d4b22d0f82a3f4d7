use std::collections::{HashMap, HashSet};

use cosmwasm_std::testing::MockStorage;
use cosmwasm_std::{ContractResult, HexBinary, Uint256};

use v3_vault::events::{BlockInfo, EventEnvelope, VaultEvent};
use v3_vault::indexer::InstantiateMsg;
use v3_vault::types::LoanInfoResponse;

use crate::contract::instantiate;
use crate::querier::VaultQuerier;

pub fn vault_addr() -> HexBinary {
    HexBinary::from(vec![0xaa; 20])
}

pub fn asset_addr() -> HexBinary {
    HexBinary::from(vec![0xcc; 20])
}

pub fn user(byte: u8) -> HexBinary {
    HexBinary::from(vec![byte; 20])
}

/// Envelope from the default vault, one transaction per block
pub fn envelope(block: u64, log_index: u32, timestamp: u64, event: VaultEvent) -> EventEnvelope {
    EventEnvelope {
        address: vault_addr(),
        block: BlockInfo { number: block, timestamp },
        transaction_hash: HexBinary::from(block.to_be_bytes().repeat(4)),
        log_index,
        event,
    }
}

/// Storage with an indexer config that tracks every vault
pub fn mock_indexer() -> MockStorage {
    let mut storage = MockStorage::default();
    instantiate(&mut storage, InstantiateMsg { vaults: vec![], record_raw_events: None }).unwrap();
    storage
}

/// Answers vault reads from in-memory tables.
/// Loans without an entry revert, as the contract does once a position is gone.
pub struct MockVaultQuerier {
    pub asset: HexBinary,
    pub decimals: u8,
    pub vault_reverts: bool,
    pub loans: HashMap<[u8; 32], LoanInfoResponse>, //token id, big-endian
    pub lent: HashMap<HexBinary, Uint256>,
    pub reverted_lenders: HashSet<HexBinary>,
}

impl Default for MockVaultQuerier {
    fn default() -> Self {
        MockVaultQuerier {
            asset: asset_addr(),
            decimals: 6,
            vault_reverts: false,
            loans: HashMap::new(),
            lent: HashMap::new(),
            reverted_lenders: HashSet::new(),
        }
    }
}

impl MockVaultQuerier {
    pub fn set_loan(&mut self, token_id: u128, debt: u128, collateral_value: u128, full_value: u128) {
        self.loans.insert(
            Uint256::from(token_id).to_be_bytes(),
            LoanInfoResponse {
                debt: Uint256::from(debt),
                collateral_value: Uint256::from(collateral_value),
                full_value: Uint256::from(full_value),
            },
        );
    }

    pub fn clear_loan(&mut self, token_id: u128) {
        self.loans.remove(&Uint256::from(token_id).to_be_bytes());
    }

    pub fn set_lent(&mut self, owner: &HexBinary, lent: u128) {
        self.lent.insert(owner.clone(), Uint256::from(lent));
    }
}

impl VaultQuerier for MockVaultQuerier {
    fn loan_info(&self, _vault: &HexBinary, token_id: Uint256, _block_number: u64) -> ContractResult<LoanInfoResponse> {
        match self.loans.get(&token_id.to_be_bytes()) {
            Some(info) => ContractResult::Ok(info.clone()),
            None => ContractResult::Err(String::from("ERC721: invalid token ID")),
        }
    }

    fn lend_info(&self, _vault: &HexBinary, owner: &HexBinary, _block_number: u64) -> ContractResult<Uint256> {
        if self.reverted_lenders.contains(owner) {
            return ContractResult::Err(String::from("execution reverted"));
        }
        ContractResult::Ok(self.lent.get(owner).copied().unwrap_or_default())
    }

    fn asset(&self, _vault: &HexBinary, _block_number: u64) -> ContractResult<HexBinary> {
        if self.vault_reverts {
            return ContractResult::Err(String::from("execution reverted"));
        }
        ContractResult::Ok(self.asset.clone())
    }

    fn decimals(&self, _vault: &HexBinary, _block_number: u64) -> ContractResult<u8> {
        if self.vault_reverts {
            return ContractResult::Err(String::from("execution reverted"));
        }
        ContractResult::Ok(self.decimals)
    }
}
