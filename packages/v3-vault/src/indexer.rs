use cosmwasm_schema::cw_serde;
use cosmwasm_std::HexBinary;

use crate::events::EventEnvelope;

#[cw_serde]
pub struct InstantiateMsg {
    /// Vault contracts to index, empty indexes every emitter
    pub vaults: Vec<HexBinary>,
    pub record_raw_events: Option<bool>,
}

#[cw_serde]
pub enum ExecuteMsg {
    UpdateConfig {
        vaults: Option<Vec<HexBinary>>,
        record_raw_events: Option<bool>,
    },
    /// Applies a batch of events, in the given order
    Index { events: Vec<EventEnvelope> },
}

#[cw_serde]
pub struct Config {
    pub vaults: Vec<HexBinary>,
    //Mirror every ABI event into the raw event log
    pub record_raw_events: bool,
}

impl Config {
    pub fn indexes(&self, vault: &HexBinary) -> bool {
        self.vaults.is_empty() || self.vaults.contains(vault)
    }
}
