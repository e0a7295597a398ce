//! Core types for the interest engine

use crate::interpolation::InterpolationCase;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loan bounds configured on a lending desk.
///
/// Amounts are in the smallest currency unit, durations in hours and
/// interest in basis-like units (`750` is 7.5%). Each bound accepts either
/// a JSON number or a decimal string, since indexers serialise big
/// integers as strings. Amount bounds above `u64::MAX` must be sent as
/// strings: larger JSON numbers are buffered as floats and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanConfig {
    /// Smallest principal the desk will lend
    #[serde(with = "number_or_string")]
    pub min_amount: u128,

    /// Largest principal the desk will lend
    #[serde(with = "number_or_string")]
    pub max_amount: u128,

    /// Shortest loan duration (hours)
    #[serde(with = "number_or_string")]
    pub min_duration: u64,

    /// Longest loan duration (hours)
    #[serde(with = "number_or_string")]
    pub max_duration: u64,

    /// Interest charged at the low end of both ranges
    #[serde(with = "number_or_string")]
    pub min_interest: u32,

    /// Interest charged at the high end of both ranges
    #[serde(with = "number_or_string")]
    pub max_interest: u32,
}

impl LoanConfig {
    /// Whether the desk charges one rate for every loan
    pub fn is_fixed_rate(&self) -> bool {
        self.min_interest == self.max_interest
    }

    /// Whether the amount range collapses to a single value
    pub fn amount_is_degenerate(&self) -> bool {
        self.min_amount == self.max_amount
    }

    /// Whether the duration range collapses to a single value
    pub fn duration_is_degenerate(&self) -> bool {
        self.min_duration == self.max_duration
    }
}

/// Borrower's prospective loan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    /// Human-readable principal, e.g. `"12.5"`. Defaults to the desk minimum.
    pub amount: Option<String>,

    /// Loan length in days. Defaults to the desk minimum.
    pub duration_in_days: Option<u64>,

    /// Token decimals used to scale `amount` into base units
    pub decimals: Option<u32>,
}

impl LoanRequest {
    /// Request at the desk minimums
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the human-readable principal
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the duration in days
    pub fn with_duration_days(mut self, days: u64) -> Self {
        self.duration_in_days = Some(days);
        self
    }

    /// Set the token decimals
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }
}

/// Quoted interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestRate {
    /// Branch of the decision table that produced the rate
    pub case: InterpolationCase,

    /// Rate in basis-like units
    pub basis_points: Decimal,

    /// Rate as a percentage (`basis_points / 100`)
    pub percent: Decimal,
}

impl InterestRate {
    /// Percentage as a float, e.g. `12.5`
    pub fn as_f64(&self) -> f64 {
        self.percent.to_f64().unwrap_or(f64::NAN)
    }
}

impl std::fmt::Display for InterestRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent.normalize())
    }
}

mod number_or_string {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Display,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        T::Err: Display,
    {
        match Raw::<T>::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => text.trim().parse().map_err(de::Error::custom),
        }
    }
}
