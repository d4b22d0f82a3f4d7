use cosmwasm_std::{HexBinary, OverflowError, StdError, Uint256};
use thiserror::Error;
use v3_vault::math::MathError;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Math(#[from] MathError),

    #[error("Indexer config hasn't been instantiated")]
    NotInitialized {},

    #[error("Loan {old_token_id} of vault {vault} doesn't exist, the feed is incomplete or misordered")]
    MissingPredecessorLoan { old_token_id: Uint256, vault: HexBinary },

    #[error("Event at block {block} log {log_index} of vault {vault} isn't after the last applied event at block {last_block} log {last_log_index}")]
    OutOfOrderEvent {
        vault: HexBinary,
        block: u64,
        log_index: u32,
        last_block: u64,
        last_log_index: u32,
    },

    #[error("Vault {vault} config read reverted: {reason}")]
    VaultInfoUnavailable { vault: HexBinary, reason: String },
}
