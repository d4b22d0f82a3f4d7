use cosmwasm_std::{Decimal256, HexBinary, StdError, Storage, Uint256};

use v3_vault::math::q96_to_decimal;
use v3_vault::types::{DailyExchangeRate, HourlyExchangeRate};

use crate::keys::bucket_key;
use crate::state::{DAILY_EXCHANGE_RATES, HOURLY_EXCHANGE_RATES};
use crate::ContractError;

//Constants
pub const SECONDS_PER_DAY: u64 = 86_400u64;
pub const SECONDS_PER_HOUR: u64 = 3_600u64;

/// Which buckets a rate update opened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateBuckets {
    pub daily_created: bool,
    pub hourly_created: bool,
}

/// Records the first rate observed in the current day and hour of the vault.
/// Later updates inside an existing period leave its bucket untouched.
pub fn record_rate(
    storage: &mut dyn Storage,
    vault_address: &HexBinary,
    timestamp: u64,
    debt_rate_x96: Uint256,
    lend_rate_x96: Uint256,
    block_number: u64,
) -> Result<RateBuckets, ContractError> {
    let day = period_index(timestamp, SECONDS_PER_DAY)?;
    let hour = period_index(timestamp, SECONDS_PER_HOUR)?;

    let day_key = bucket_key(vault_address, day);
    let hour_key = bucket_key(vault_address, hour);

    let daily_created = !DAILY_EXCHANGE_RATES.has(storage, day_key.as_slice());
    let hourly_created = !HOURLY_EXCHANGE_RATES.has(storage, hour_key.as_slice());

    //Both periods already seen
    if !daily_created && !hourly_created {
        return Ok(RateBuckets { daily_created, hourly_created });
    }

    let (debt_exchange_rate, lend_exchange_rate) = convert_rates(debt_rate_x96, lend_rate_x96)?;

    if daily_created {
        DAILY_EXCHANGE_RATES.save(
            storage,
            day_key.as_slice(),
            &DailyExchangeRate {
                id: day_key.clone().into(),
                day,
                vault: vault_address.clone(),
                debt_exchange_rate,
                lend_exchange_rate,
                block_number,
                block_timestamp: timestamp,
            },
        )?;
    }
    if hourly_created {
        HOURLY_EXCHANGE_RATES.save(
            storage,
            hour_key.as_slice(),
            &HourlyExchangeRate {
                id: hour_key.clone().into(),
                hour,
                vault: vault_address.clone(),
                debt_exchange_rate,
                lend_exchange_rate,
                block_number,
                block_timestamp: timestamp,
            },
        )?;
    }

    Ok(RateBuckets { daily_created, hourly_created })
}

fn period_index(timestamp: u64, period: u64) -> Result<u32, ContractError> {
    match u32::try_from(timestamp / period) {
        Ok(index) => Ok(index),
        Err(_) => Err(ContractError::Std(StdError::generic_err(format!(
            "Timestamp {} is out of range for {}s buckets",
            timestamp, period
        )))),
    }
}

fn convert_rates(debt_rate_x96: Uint256, lend_rate_x96: Uint256) -> Result<(Decimal256, Decimal256), ContractError> {
    Ok((q96_to_decimal(debt_rate_x96)?, q96_to_decimal(lend_rate_x96)?))
}
