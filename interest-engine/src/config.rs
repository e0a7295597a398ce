//! Configuration for the interest calculator

use crate::units::MAX_DECIMALS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Largest scale a `Decimal` can carry
const MAX_DECIMAL_SCALE: u32 = 28;

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Token decimals assumed when a request does not say (ERC-20 default)
    pub default_decimals: u32,

    /// Hours in a loan day
    pub hours_per_day: u64,

    /// What to do with requests outside the desk bounds
    pub range_policy: RangePolicy,

    /// What a factor over a zero-width range evaluates to
    pub zero_span_policy: ZeroSpanPolicy,

    /// Decimal places kept in quoted rates
    pub output_scale: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            default_decimals: 18,
            hours_per_day: 24,
            range_policy: RangePolicy::Reject,
            zero_span_policy: ZeroSpanPolicy::TreatAsZero,
            output_scale: 12,
        }
    }
}

/// Handling of requests outside `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Fail with `InvalidAmount` / `InvalidDuration`
    Reject,
    /// Pull the request back onto the nearest bound
    Clamp,
    /// Interpolate past the bounds unchecked
    Extrapolate,
}

impl FromStr for RangePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(RangePolicy::Reject),
            "clamp" => Ok(RangePolicy::Clamp),
            "extrapolate" => Ok(RangePolicy::Extrapolate),
            other => Err(Error::Config(format!("Unknown range policy: {}", other))),
        }
    }
}

/// Result of a factor over a zero-width range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroSpanPolicy {
    /// Factor is zero
    TreatAsZero,
    /// Fail with `DivisionByZero`
    Reject,
}

impl FromStr for ZeroSpanPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "treat_as_zero" | "zero" => Ok(ZeroSpanPolicy::TreatAsZero),
            "reject" => Ok(ZeroSpanPolicy::Reject),
            other => Err(Error::Config(format!("Unknown zero span policy: {}", other))),
        }
    }
}

impl CalculatorConfig {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CalculatorConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = CalculatorConfig::default();

        if let Ok(decimals) = std::env::var("INTEREST_DEFAULT_DECIMALS") {
            config.default_decimals = parse_var("INTEREST_DEFAULT_DECIMALS", &decimals)?;
        }

        if let Ok(hours) = std::env::var("INTEREST_HOURS_PER_DAY") {
            config.hours_per_day = parse_var("INTEREST_HOURS_PER_DAY", &hours)?;
        }

        if let Ok(policy) = std::env::var("INTEREST_RANGE_POLICY") {
            config.range_policy = policy.parse()?;
        }

        if let Ok(policy) = std::env::var("INTEREST_ZERO_SPAN_POLICY") {
            config.zero_span_policy = policy.parse()?;
        }

        if let Ok(scale) = std::env::var("INTEREST_OUTPUT_SCALE") {
            config.output_scale = parse_var("INTEREST_OUTPUT_SCALE", &scale)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check values the calculator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.hours_per_day == 0 {
            return Err(Error::Config("hours_per_day must be positive".to_string()));
        }

        if self.default_decimals > MAX_DECIMALS {
            return Err(Error::Config(format!(
                "default_decimals {} exceeds maximum {}",
                self.default_decimals, MAX_DECIMALS
            )));
        }

        if self.output_scale > MAX_DECIMAL_SCALE {
            return Err(Error::Config(format!(
                "output_scale {} exceeds maximum {}",
                self.output_scale, MAX_DECIMAL_SCALE
            )));
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} has invalid value {:?}", name, value)))
}
