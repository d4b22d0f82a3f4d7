use cosmwasm_std::{Event, HexBinary, Response, Storage};
use cw2::set_contract_version;

use v3_vault::events::{EventEnvelope, VaultEvent};
use v3_vault::indexer::{Config, ExecuteMsg, InstantiateMsg};

use crate::audit::{raw_event_attributes, record_raw_event};
use crate::error::ContractError;
use crate::liquidations::record_liquidation;
use crate::positions::{
    add_position, borrow, deposit, remove_position, repay, withdraw, withdraw_collateral,
};
use crate::querier::VaultQuerier;
use crate::rates::record_rate;
use crate::state::{advance_cursor, assert_event_order, get_or_create_vault, CONFIG};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:v3-vault-indexer";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn instantiate(
    storage: &mut dyn Storage,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let config = Config {
        vaults: msg.vaults,
        record_raw_events: msg.record_raw_events.unwrap_or(true),
    };

    //Save initial state
    set_contract_version(storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    CONFIG.save(storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("config", format!("{:?}", config)))
}

pub fn execute(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateConfig { vaults, record_raw_events } => update_config(storage, vaults, record_raw_events),
        ExecuteMsg::Index { events } => index(storage, querier, events),
    }
}

fn update_config(
    storage: &mut dyn Storage,
    vaults: Option<Vec<HexBinary>>,
    record_raw_events: Option<bool>,
) -> Result<Response, ContractError> {
    let mut config = load_config(storage)?;

    if let Some(vaults) = vaults {
        config.vaults = vaults;
    }
    if let Some(record_raw_events) = record_raw_events {
        config.record_raw_events = record_raw_events;
    }

    CONFIG.save(storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_config")
        .add_attribute("updated_config", format!("{:?}", config)))
}

/// Routes a batch and folds each event's log into one response
fn index(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    events: Vec<EventEnvelope>,
) -> Result<Response, ContractError> {
    let count = events.len();
    let responses = apply_events(storage, querier, events)?;

    let logs: Vec<Event> = responses
        .into_iter()
        .map(|res| Event::new("vault_event").add_attributes(res.attributes))
        .collect();

    Ok(Response::new()
        .add_attribute("method", "index")
        .add_attribute("events", count.to_string())
        .add_events(logs))
}

/// Applies the feed in order, stopping at the first fatal error.
/// Events before the failing one stay applied, replay resumes from the vault cursors.
pub fn apply_events(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    events: Vec<EventEnvelope>,
) -> Result<Vec<Response>, ContractError> {
    let mut responses = Vec::with_capacity(events.len());
    for env in events {
        responses.push(apply_event(storage, querier, &env)?);
    }

    Ok(responses)
}

/// Applies one event: ordering check, vault resolution, raw mirror, then its aggregate rule
pub fn apply_event(
    storage: &mut dyn Storage,
    querier: &dyn VaultQuerier,
    env: &EventEnvelope,
) -> Result<Response, ContractError> {
    let config = load_config(storage)?;

    //Not a tracked vault
    if !config.indexes(&env.address) {
        return Ok(Response::new()
            .add_attribute("method", "skip")
            .add_attribute("vault", env.address.to_hex())
            .add_attribute("event", env.event.name()));
    }

    assert_event_order(storage, &env.address, env.block.number, env.log_index)?;

    get_or_create_vault(storage, querier, &env.address, env.block.number)?;

    if config.record_raw_events && env.event.is_mirrored() {
        record_raw_event(storage, env)?;
    }

    let res = match &env.event {
        VaultEvent::Add(params) => add_position(storage, querier, env, params)?,
        VaultEvent::Remove(params) => remove_position(storage, querier, env, params)?,
        VaultEvent::Borrow(params) => borrow(storage, querier, env, params)?,
        VaultEvent::Repay(params) => repay(storage, querier, env, params)?,
        VaultEvent::Deposit(params) => deposit(storage, querier, env, params)?,
        VaultEvent::Withdraw(params) => withdraw(storage, querier, env, params)?,
        VaultEvent::WithdrawCollateral(params) => withdraw_collateral(storage, querier, env, params)?,
        VaultEvent::ExchangeRateUpdate(params) => {
            let buckets = record_rate(
                storage,
                &env.address,
                env.block.timestamp,
                params.debt_exchange_rate_x96,
                params.lend_exchange_rate_x96,
                env.block.number,
            )?;

            Response::new()
                .add_attribute("method", "exchange_rate_update")
                .add_attribute("vault", env.address.to_hex())
                .add_attribute("daily", if buckets.daily_created { "created" } else { "exists" })
                .add_attribute("hourly", if buckets.hourly_created { "created" } else { "exists" })
        }
        VaultEvent::Liquidate(params) => record_liquidation(storage, env, params)?,
        event => Response::new()
            .add_attribute("method", "record")
            .add_attribute("vault", env.address.to_hex())
            .add_attribute("event", event.name())
            .add_attributes(raw_event_attributes(event)),
    };

    advance_cursor(storage, &env.address, env.block.number, env.log_index)?;

    Ok(res
        .add_attribute("block", env.block.number.to_string())
        .add_attribute("log_index", env.log_index.to_string()))
}

fn load_config(storage: &dyn Storage) -> Result<Config, ContractError> {
    match CONFIG.may_load(storage)? {
        Some(config) => Ok(config),
        None => Err(ContractError::NotInitialized {}),
    }
}
