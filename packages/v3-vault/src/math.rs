use cosmwasm_std::{CheckedFromRatioError, Decimal, Decimal256, Int256, Uint256};
use thiserror::Error;

/// 2^96, scale of the vault's X96 exchange rates
pub const Q96: Uint256 = Uint256::from_u128(1u128 << 96);
/// 2^32, scale of the vault's X32 factors
pub const Q32: u128 = 1u128 << 32;

#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("{0}")]
    FromRatio(#[from] CheckedFromRatioError),

    #[error("Value doesn't fit a signed 256-bit integer: {value}")]
    SignedOverflow { value: Uint256 },
}

/// Converts an X96 fixed point value to a decimal.
///
/// `Decimal256` holds 18 fractional digits, so the result is truncated there:
/// `2^96 - 1` reads as `0.999999999999999999`. Rates needing more significant
/// digits than that lose the tail.
pub fn q96_to_decimal(value_x96: Uint256) -> Result<Decimal256, MathError> {
    Ok(Decimal256::checked_from_ratio(value_x96, Q96)?)
}

/// Converts an X32 fixed point factor to a decimal
pub fn q32_to_decimal(value_x32: u32) -> Decimal {
    Decimal::from_ratio(u128::from(value_x32), Q32)
}

/// Reinterprets an unsigned event amount as a signed share delta.
/// Amounts of 2^255 or more don't fit and error, which halts the feed at that event.
pub fn to_signed(value: Uint256) -> Result<Int256, MathError> {
    let bytes = value.to_be_bytes();
    //Top bit set means the value is above Int256::MAX
    if bytes[0] & 0x80 != 0 {
        return Err(MathError::SignedOverflow { value });
    }

    Ok(Int256::from_be_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn q96_boundaries() {
        assert_eq!(q96_to_decimal(Uint256::zero()).unwrap(), Decimal256::zero());
        assert_eq!(q96_to_decimal(Q96).unwrap(), Decimal256::one());
        assert_eq!(
            q96_to_decimal(Q96 - Uint256::one()).unwrap(),
            Decimal256::from_str("0.999999999999999999").unwrap()
        );
        assert_eq!(
            q96_to_decimal(Q96 + Q96 / Uint256::from(2u128)).unwrap(),
            Decimal256::from_str("1.5").unwrap()
        );
    }

    #[test]
    fn q96_max_value_fits() {
        let rate = q96_to_decimal(Uint256::MAX).unwrap();
        assert!(rate > Decimal256::from_str("1000000000000000000000000000000000000000000000").unwrap());
    }

    #[test]
    fn q32_factors() {
        assert_eq!(q32_to_decimal(0), Decimal::zero());
        assert_eq!(q32_to_decimal(1 << 31), Decimal::percent(50));
        assert_eq!(q32_to_decimal(u32::MAX), Decimal::from_str("0.999999999767169356").unwrap());
    }

    #[test]
    fn signed_conversion() {
        assert_eq!(to_signed(Uint256::from(100u128)).unwrap(), Int256::from(100i128));
        assert_eq!(to_signed(Uint256::MAX).unwrap_err(), MathError::SignedOverflow { value: Uint256::MAX });
    }

    #[test]
    fn signed_range_boundary() {
        let max_signed = Uint256::MAX >> 1u32;
        assert_eq!(to_signed(max_signed).unwrap(), Int256::MAX);

        let too_large = max_signed + Uint256::one();
        assert_eq!(to_signed(too_large).unwrap_err(), MathError::SignedOverflow { value: too_large });
    }
}
