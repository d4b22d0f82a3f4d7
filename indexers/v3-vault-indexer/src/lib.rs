#![allow(clippy::too_many_arguments)]
pub mod audit;
pub mod contract;
mod error;
pub mod keys;
pub mod liquidations;
pub mod positions;
pub mod querier;
pub mod rates;
pub mod snapshots;
pub mod state;

pub use crate::error::ContractError;

#[cfg(test)]
#[allow(unused_variables)]
mod testing;
