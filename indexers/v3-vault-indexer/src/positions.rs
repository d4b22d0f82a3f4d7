use cosmwasm_std::{Int256, Response, Storage};

use v3_vault::events::{
    AddParams, BorrowParams, DepositParams, EventEnvelope, RemoveParams, RepayParams,
    WithdrawCollateralParams, WithdrawParams,
};
use v3_vault::math::to_signed;

use crate::querier::VaultQuerier;
use crate::snapshots::{snapshot_lender, snapshot_loan};
use crate::state::{
    get_or_create_lender, get_or_create_loan, load_predecessor_loan, save_lender, save_loan,
};
use crate::ContractError;

////LOANS////

/// Opens a loan, carrying over the shares of `old_token_id` when set
pub fn add_position(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
    params: &AddParams,
) -> Result<Response, ContractError> {
    let mut loan = get_or_create_loan(storage, params.token_id, &env.address, &params.owner)?;

    if !params.old_token_id.is_zero() {
        //The predecessor must already be indexed, never fabricate it
        let old_loan = load_predecessor_loan(storage, params.old_token_id, &env.address)?;
        loan.shares = old_loan.shares;
        loan.previous_loan = Some(old_loan.id);
    } else {
        loan.shares = Int256::zero();
    }

    loan.owner = params.owner.clone();
    save_loan(storage, &loan)?;

    let outcome = snapshot_loan(storage, querier, &loan, env, false, None, None)?;

    Ok(Response::new()
        .add_attribute("method", "add")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("token_id", loan.token_id.to_string())
        .add_attribute("old_token_id", params.old_token_id.to_string())
        .add_attribute("owner", loan.owner.to_hex())
        .add_attribute("shares", loan.shares.to_string())
        .add_attribute("snapshot", outcome.as_str()))
}

/// Marks the loan exited, its shares stay as they are
pub fn remove_position(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
    params: &RemoveParams,
) -> Result<Response, ContractError> {
    let mut loan = get_or_create_loan(storage, params.token_id, &env.address, &params.owner)?;
    loan.is_exited = true;
    save_loan(storage, &loan)?;

    let outcome = snapshot_loan(storage, querier, &loan, env, true, None, None)?;

    Ok(Response::new()
        .add_attribute("method", "remove")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("token_id", loan.token_id.to_string())
        .add_attribute("shares", loan.shares.to_string())
        .add_attribute("snapshot", outcome.as_str()))
}

pub fn borrow(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
    params: &BorrowParams,
) -> Result<Response, ContractError> {
    let mut loan = get_or_create_loan(storage, params.token_id, &env.address, &params.owner)?;
    loan.shares = loan.shares.checked_add(to_signed(params.shares)?)?;
    save_loan(storage, &loan)?;

    let outcome = snapshot_loan(storage, querier, &loan, env, false, None, Some(params.assets))?;

    Ok(Response::new()
        .add_attribute("method", "borrow")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("token_id", loan.token_id.to_string())
        .add_attribute("assets", params.assets.to_string())
        .add_attribute("shares", loan.shares.to_string())
        .add_attribute("snapshot", outcome.as_str()))
}

/// Repays may drive shares negative, the feed owns that invariant
pub fn repay(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
    params: &RepayParams,
) -> Result<Response, ContractError> {
    let mut loan = get_or_create_loan(storage, params.token_id, &env.address, &params.owner)?;
    loan.shares = loan.shares.checked_sub(to_signed(params.shares)?)?;
    save_loan(storage, &loan)?;

    let outcome = snapshot_loan(storage, querier, &loan, env, false, Some(params.assets), None)?;

    Ok(Response::new()
        .add_attribute("method", "repay")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("token_id", loan.token_id.to_string())
        .add_attribute("assets", params.assets.to_string())
        .add_attribute("shares", loan.shares.to_string())
        .add_attribute("snapshot", outcome.as_str()))
}

/// Valuation refresh only
pub fn withdraw_collateral(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
    params: &WithdrawCollateralParams,
) -> Result<Response, ContractError> {
    let loan = get_or_create_loan(storage, params.token_id, &env.address, &params.owner)?;

    let outcome = snapshot_loan(storage, querier, &loan, env, false, None, None)?;

    Ok(Response::new()
        .add_attribute("method", "withdraw_collateral")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("token_id", loan.token_id.to_string())
        .add_attribute("liquidity", params.liquidity.to_string())
        .add_attribute("snapshot", outcome.as_str()))
}

////LENDERS////

pub fn deposit(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
    params: &DepositParams,
) -> Result<Response, ContractError> {
    let mut lender = get_or_create_lender(storage, &params.owner, &env.address)?;
    lender.shares = lender.shares.checked_add(to_signed(params.shares)?)?;
    save_lender(storage, &lender)?;

    let outcome = snapshot_lender(storage, querier, &lender, env)?;

    Ok(Response::new()
        .add_attribute("method", "deposit")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("owner", lender.address.to_hex())
        .add_attribute("assets", params.assets.to_string())
        .add_attribute("shares", lender.shares.to_string())
        .add_attribute("snapshot", outcome.as_str()))
}

pub fn withdraw(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
    params: &WithdrawParams,
) -> Result<Response, ContractError> {
    let mut lender = get_or_create_lender(storage, &params.owner, &env.address)?;
    lender.shares = lender.shares.checked_sub(to_signed(params.shares)?)?;
    save_lender(storage, &lender)?;

    let outcome = snapshot_lender(storage, querier, &lender, env)?;

    Ok(Response::new()
        .add_attribute("method", "withdraw")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("owner", lender.address.to_hex())
        .add_attribute("assets", params.assets.to_string())
        .add_attribute("shares", lender.shares.to_string())
        .add_attribute("snapshot", outcome.as_str()))
}
