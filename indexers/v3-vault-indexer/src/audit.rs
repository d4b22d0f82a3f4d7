use cosmwasm_std::{Attribute, Storage};

use v3_vault::events::{EventEnvelope, VaultEvent};
use v3_vault::math::q32_to_decimal;
use v3_vault::types::RawEventRecord;

use crate::keys::event_key;
use crate::state::RAW_EVENTS;
use crate::ContractError;

/// Mirrors the log verbatim into the raw event table
pub fn record_raw_event(storage: &mut dyn Storage, env: &EventEnvelope) -> Result<(), ContractError> {
    let key = event_key(&env.transaction_hash, env.log_index);

    RAW_EVENTS.save(
        storage,
        key.as_slice(),
        &RawEventRecord {
            id: key.clone().into(),
            event: env.event.clone(),
            block_number: env.block.number,
            block_timestamp: env.block.timestamp,
            transaction_hash: env.transaction_hash.clone(),
        },
    )?;

    Ok(())
}

/// Log attributes for events that only land in the raw event table
pub fn raw_event_attributes(event: &VaultEvent) -> Vec<Attribute> {
    match event {
        VaultEvent::Approval(params) => vec![
            Attribute::new("owner", params.owner.to_hex()),
            Attribute::new("spender", params.spender.to_hex()),
            Attribute::new("value", params.value.to_string()),
        ],
        VaultEvent::Transfer(params) => vec![
            Attribute::new("from", params.from.to_hex()),
            Attribute::new("to", params.to.to_hex()),
            Attribute::new("value", params.value.to_string()),
        ],
        VaultEvent::OwnershipTransferred(params) => vec![
            Attribute::new("previous_owner", params.previous_owner.to_hex()),
            Attribute::new("new_owner", params.new_owner.to_hex()),
        ],
        VaultEvent::SetLimits(params) => vec![
            Attribute::new("global_lend_limit", params.global_lend_limit.to_string()),
            Attribute::new("global_debt_limit", params.global_debt_limit.to_string()),
        ],
        VaultEvent::SetReserveFactor(params) => vec![
            Attribute::new("reserve_factor", q32_to_decimal(params.reserve_factor_x32).to_string()),
        ],
        VaultEvent::SetReserveProtectionFactor(params) => vec![
            Attribute::new(
                "reserve_protection_factor",
                q32_to_decimal(params.reserve_protection_factor_x32).to_string(),
            ),
        ],
        VaultEvent::SetTokenConfig(params) => vec![
            Attribute::new("token", params.token.to_hex()),
            Attribute::new("collateral_factor", q32_to_decimal(params.collateral_factor_x32).to_string()),
            Attribute::new("collateral_value_limit", q32_to_decimal(params.collateral_value_limit).to_string()),
        ],
        VaultEvent::SetTransformer(params) => vec![
            Attribute::new("transformer", params.transformer.to_hex()),
            Attribute::new("active", params.active.to_string()),
        ],
        VaultEvent::WithdrawReserves(params) => vec![
            Attribute::new("amount", params.amount.to_string()),
            Attribute::new("receiver", params.receiver.to_hex()),
        ],
        //Folded into aggregates, their handlers log them
        _ => vec![],
    }
}
