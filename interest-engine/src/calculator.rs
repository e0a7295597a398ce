//! Interest rate quoting

use crate::bounds::BoundsChecker;
use crate::config::CalculatorConfig;
use crate::interpolation::{interpolate, InterpolationCase};
use crate::units::{self, pow10};
use crate::{Error, InterestRate, LoanConfig, LoanRequest, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Quotes the rate a lending desk charges for a prospective loan
#[derive(Debug, Clone)]
pub struct InterestCalculator {
    config: CalculatorConfig,
    bounds: BoundsChecker,
}

impl InterestCalculator {
    /// Create new calculator
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        config.validate()?;
        let bounds = BoundsChecker::new(config.range_policy);
        Ok(Self { config, bounds })
    }

    /// Active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Quote the interest rate for `request` against a desk's bounds
    pub fn quote(&self, loan_config: &LoanConfig, request: &LoanRequest) -> Result<InterestRate> {
        self.bounds.check_config(loan_config)?;

        let amount = self.resolve_amount(loan_config, request)?;
        let duration = self.resolve_duration(loan_config, request)?;
        let case = InterpolationCase::classify(loan_config);

        let basis = interpolate(case, loan_config, &amount, &duration, self.config.zero_span_policy)?;
        let percent = &basis / BigRational::from_integer(BigInt::from(100));

        tracing::debug!(
            ?case,
            amount = %amount,
            duration_hours = %duration,
            basis = %basis,
            "Interpolated interest rate"
        );

        Ok(InterestRate {
            case,
            basis_points: to_decimal(&basis, self.config.output_scale)?,
            percent: to_decimal(&percent, self.config.output_scale)?,
        })
    }

    /// Requested principal in base units, desk minimum when absent
    fn resolve_amount(&self, loan_config: &LoanConfig, request: &LoanRequest) -> Result<BigInt> {
        let amount = match &request.amount {
            Some(amount) => {
                let decimals = request.decimals.unwrap_or(self.config.default_decimals);
                units::parse_units(amount, decimals)?
            }
            None => BigInt::from(loan_config.min_amount),
        };

        self.bounds.check_amount(amount, loan_config)
    }

    /// Requested duration in hours, desk minimum when absent
    fn resolve_duration(&self, loan_config: &LoanConfig, request: &LoanRequest) -> Result<BigInt> {
        let duration = match request.duration_in_days {
            Some(days) => BigInt::from(days) * BigInt::from(self.config.hours_per_day),
            None => BigInt::from(loan_config.min_duration),
        };

        self.bounds.check_duration(duration, loan_config)
    }
}

impl Default for InterestCalculator {
    fn default() -> Self {
        let config = CalculatorConfig::default();
        Self {
            bounds: BoundsChecker::new(config.range_policy),
            config,
        }
    }
}

/// Quote with the default calculator, returning the rate as a percentage.
///
/// `amount` is human-readable and scaled by `decimals` (18 when absent).
/// Missing amount or duration fall back to the desk minimums.
pub fn calculate_interest(
    loan_config: &LoanConfig,
    amount: Option<&str>,
    duration_in_days: Option<u64>,
    decimals: Option<u32>,
) -> Result<f64> {
    let request = LoanRequest {
        amount: amount.map(str::to_string),
        duration_in_days,
        decimals,
    };

    InterestCalculator::default()
        .quote(loan_config, &request)
        .map(|rate| rate.as_f64())
}

fn to_decimal(value: &BigRational, scale: u32) -> Result<Decimal> {
    let scaled = (value * BigRational::from_integer(pow10(scale))).round().to_integer();
    let mantissa = scaled
        .to_i128()
        .ok_or_else(|| Error::Overflow(format!("rate {} does not fit in a decimal", value)))?;

    Decimal::try_from_i128_with_scale(mantissa, scale)
        .map(|d| d.normalize())
        .map_err(|e| Error::Overflow(format!("rate {}: {}", value, e)))
}
