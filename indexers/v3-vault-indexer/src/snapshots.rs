use cosmwasm_std::{ContractResult, Storage, Uint256};

use v3_vault::events::EventEnvelope;
use v3_vault::types::{Lender, LenderSnapshot, Loan, LoanInfoResponse, LoanSnapshot};

use crate::keys::{lender_snapshot_key, loan_snapshot_key};
use crate::querier::VaultQuerier;
use crate::state::{LENDER_SNAPSHOTS, LOAN_SNAPSHOTS};
use crate::ContractError;

/// What a snapshot attempt did, reported in the response attributes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Written,
    /// Read reverted on a position close, saved with zero valuation
    Zeroed,
    /// Read reverted mid-life, nothing saved
    Skipped,
}

impl SnapshotOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotOutcome::Written => "written",
            SnapshotOutcome::Zeroed => "zeroed",
            SnapshotOutcome::Skipped => "skipped",
        }
    }
}

/// Saves the loan's valuation at this block, overwriting any earlier snapshot of the same block.
/// `loan` must already carry this event's mutation.
pub fn snapshot_loan(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    loan: &Loan,
    env: &EventEnvelope,
    is_close_event: bool,
    amount_repaid: Option<Uint256>,
    amount_borrowed: Option<Uint256>,
) -> Result<SnapshotOutcome, ContractError> {
    let (info, outcome) = match querier.loan_info(&env.address, loan.token_id, env.block.number) {
        ContractResult::Ok(info) => (info, SnapshotOutcome::Written),
        //Zero is only a valid valuation once the position is gone
        ContractResult::Err(_) if is_close_event => (LoanInfoResponse::zero(), SnapshotOutcome::Zeroed),
        ContractResult::Err(_) => return Ok(SnapshotOutcome::Skipped),
    };

    let key = loan_snapshot_key(loan.id.as_slice(), &env.address, env.block.number);
    let snapshot = LoanSnapshot {
        id: key.clone().into(),
        loan: loan.id.clone(),
        debt: info.debt,
        collateral_value: info.collateral_value,
        full_value: info.full_value,
        shares: loan.shares,
        owner: loan.owner.clone(),
        block_number: env.block.number,
        block_timestamp: env.block.timestamp,
        transaction_hash: env.transaction_hash.clone(),
        amount_repaid,
        amount_borrowed,
    };
    LOAN_SNAPSHOTS.save(storage, key.as_slice(), &snapshot)?;

    Ok(outcome)
}

/// Saves the lender's lent amount at this block, overwriting any earlier snapshot of the same block
pub fn snapshot_lender(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    lender: &Lender,
    env: &EventEnvelope,
) -> Result<SnapshotOutcome, ContractError> {
    let lent = match querier.lend_info(&env.address, &lender.address, env.block.number) {
        ContractResult::Ok(lent) => lent,
        ContractResult::Err(_) => return Ok(SnapshotOutcome::Skipped),
    };

    let key = lender_snapshot_key(lender.id.as_slice(), &env.address, env.block.number);
    let snapshot = LenderSnapshot {
        id: key.clone().into(),
        lender: lender.id.clone(),
        lent,
        shares: lender.shares,
        block_number: env.block.number,
        block_timestamp: env.block.timestamp,
        transaction_hash: env.transaction_hash.clone(),
    };
    LENDER_SNAPSHOTS.save(storage, key.as_slice(), &snapshot)?;

    Ok(SnapshotOutcome::Written)
}
