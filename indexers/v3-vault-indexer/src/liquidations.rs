use cosmwasm_std::{Response, Storage};

use v3_vault::events::{EventEnvelope, LiquidateParams};
use v3_vault::types::Liquidation;

use crate::keys::{event_key, loan_key};
use crate::state::LIQUIDATIONS;
use crate::ContractError;

/// Appends one Liquidation record per event. The liquidated loan is referenced, not mutated.
pub fn record_liquidation(
    storage: &mut dyn Storage,
    env: &EventEnvelope,
    params: &LiquidateParams,
) -> Result<Response, ContractError> {
    let key = event_key(&env.transaction_hash, env.log_index);
    let loan = loan_key(params.token_id, &env.address);

    let liquidation = Liquidation {
        id: key.clone().into(),
        loan: loan.into(),
        liquidator: params.liquidator.clone(),
        owner: params.owner.clone(),
        value: params.value,
        cost: params.cost,
        amount0: params.amount0,
        amount1: params.amount1,
        reserve: params.reserve,
        missing: params.missing,
        block_number: env.block.number,
        block_timestamp: env.block.timestamp,
        transaction_hash: env.transaction_hash.clone(),
    };
    LIQUIDATIONS.save(storage, key.as_slice(), &liquidation)?;

    Ok(Response::new()
        .add_attribute("method", "liquidate")
        .add_attribute("vault", env.address.to_hex())
        .add_attribute("token_id", params.token_id.to_string())
        .add_attribute("liquidator", params.liquidator.to_hex())
        .add_attribute("value", params.value.to_string())
        .add_attribute("cost", params.cost.to_string())
        .add_attribute("missing", params.missing.to_string()))
}
