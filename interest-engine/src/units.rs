//! Conversion between human-readable token amounts and base units

use crate::{Error, Result};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Largest supported token precision (`uint256` holds 77 full digits)
pub const MAX_DECIMALS: u32 = 77;

/// Parse a human-readable amount (`"12.5"`) into base units.
///
/// Parsing is exact for any number of digits. Digits past `decimals` are
/// rounded half away from zero, matching how wallet tooling scales user
/// input.
pub fn parse_units(amount: &str, decimals: u32) -> Result<BigInt> {
    check_decimals(decimals)?;

    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidAmount("amount is empty".to_string()));
    }

    if trimmed.starts_with('-') {
        return Err(Error::InvalidAmount(format!("{} is negative", trimmed)));
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(Error::InvalidAmount(format!("{:?} is not a number", trimmed)));
    }

    let decimals = decimals as usize;
    let (kept, round_up) = if fraction.len() > decimals {
        (&fraction[..decimals], fraction.as_bytes()[decimals] >= b'5')
    } else {
        (fraction, false)
    };

    let digits = format!("{}{}{}", whole, kept, "0".repeat(decimals - kept.len()));
    let mut value = if digits.is_empty() {
        BigInt::zero()
    } else {
        BigInt::parse_bytes(digits.as_bytes(), 10)
            .ok_or_else(|| Error::InvalidAmount(format!("{:?} is not a number", trimmed)))?
    };

    if round_up {
        value += BigInt::one();
    }

    Ok(value)
}

/// Render base units as a human-readable amount, trimming trailing zeros.
pub fn format_units(value: &BigInt, decimals: u32) -> Result<String> {
    check_decimals(decimals)?;

    let divisor = pow10(decimals);
    let magnitude = value.abs();
    let whole = &magnitude / &divisor;
    let fraction = &magnitude % &divisor;

    let sign = if value.is_negative() { "-" } else { "" };
    if fraction.is_zero() {
        return Ok(format!("{}{}", sign, whole));
    }

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    Ok(format!("{}{}.{}", sign, whole, padded.trim_end_matches('0')))
}

/// Reject token precisions above [`MAX_DECIMALS`]
pub fn check_decimals(decimals: u32) -> Result<()> {
    if decimals > MAX_DECIMALS {
        return Err(Error::InvalidAmount(format!(
            "decimals {} exceeds maximum {}",
            decimals, MAX_DECIMALS
        )));
    }
    Ok(())
}

pub(crate) fn pow10(exponent: u32) -> BigInt {
    BigInt::from(10u32).pow(exponent)
}
