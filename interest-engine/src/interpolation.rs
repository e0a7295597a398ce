//! Interest interpolation decision table
//!
//! A desk quotes `min_interest` at the bottom of its amount and duration
//! ranges and `max_interest` at the top. Everything in between is linear,
//! evaluated in exact rational arithmetic so no precision is lost before
//! the final conversion to a percentage.

use crate::config::ZeroSpanPolicy;
use crate::{Error, LoanConfig, Result};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Branch of the interpolation decision table.
///
/// Variants are listed in precedence order; [`InterpolationCase::classify`]
/// returns the first one that matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationCase {
    /// `min_interest == max_interest`
    FixedRate,
    /// Amount and duration ranges are both a single value
    BothDegenerate,
    /// Only the amount range has width
    AmountOnly,
    /// Only the duration range has width
    DurationOnly,
    /// Both ranges have width, factors weighted equally
    Blended,
}

impl InterpolationCase {
    /// Pick the branch for a desk configuration
    pub fn classify(config: &LoanConfig) -> Self {
        match (
            config.is_fixed_rate(),
            config.amount_is_degenerate(),
            config.duration_is_degenerate(),
        ) {
            (true, _, _) => InterpolationCase::FixedRate,
            (false, true, true) => InterpolationCase::BothDegenerate,
            (false, false, true) => InterpolationCase::AmountOnly,
            (false, true, false) => InterpolationCase::DurationOnly,
            (false, false, false) => InterpolationCase::Blended,
        }
    }

    /// Whether the requested amount influences the rate
    pub fn uses_amount(&self) -> bool {
        matches!(self, InterpolationCase::AmountOnly | InterpolationCase::Blended)
    }

    /// Whether the requested duration influences the rate
    pub fn uses_duration(&self) -> bool {
        matches!(self, InterpolationCase::DurationOnly | InterpolationCase::Blended)
    }
}

/// Position of a value within `[min, max]`, nominally in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor(BigRational);

impl Factor {
    /// `(value - min) / (max - min)`.
    ///
    /// A zero-width range never divides; it yields zero or
    /// [`Error::DivisionByZero`] depending on `policy`.
    pub fn between(value: &BigInt, min: &BigInt, max: &BigInt, policy: ZeroSpanPolicy) -> Result<Self> {
        let span = max - min;
        if span.is_zero() {
            return match policy {
                ZeroSpanPolicy::TreatAsZero => Ok(Self::zero()),
                ZeroSpanPolicy::Reject => Err(Error::DivisionByZero(format!(
                    "range [{}, {}] has zero width",
                    min, max
                ))),
            };
        }

        Ok(Self(BigRational::new(value - min, span)))
    }

    /// Factor of zero
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// Underlying ratio
    pub fn ratio(&self) -> &BigRational {
        &self.0
    }
}

/// Interpolated rate in basis-like units.
///
/// `amount` must already be in base units and `duration` in hours.
pub fn interpolate(
    case: InterpolationCase,
    config: &LoanConfig,
    amount: &BigInt,
    duration: &BigInt,
    policy: ZeroSpanPolicy,
) -> Result<BigRational> {
    let min_interest = BigRational::from_integer(BigInt::from(config.min_interest));
    let span = BigRational::from_integer(BigInt::from(config.max_interest) - BigInt::from(config.min_interest));

    let amount_factor = || {
        Factor::between(
            amount,
            &BigInt::from(config.min_amount),
            &BigInt::from(config.max_amount),
            policy,
        )
    };
    let duration_factor = || {
        Factor::between(
            duration,
            &BigInt::from(config.min_duration),
            &BigInt::from(config.max_duration),
            policy,
        )
    };

    let rate = match case {
        InterpolationCase::FixedRate | InterpolationCase::BothDegenerate => min_interest,
        InterpolationCase::AmountOnly => min_interest + amount_factor()?.0 * span,
        InterpolationCase::DurationOnly => min_interest + duration_factor()?.0 * span,
        InterpolationCase::Blended => {
            let combined = amount_factor()?.0 + duration_factor()?.0;
            min_interest + combined * span / BigRational::from_integer(BigInt::from(2))
        }
    };

    Ok(rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(amount: (u128, u128), duration: (u64, u64), interest: (u32, u32)) -> LoanConfig {
        LoanConfig {
            min_amount: amount.0,
            max_amount: amount.1,
            min_duration: duration.0,
            max_duration: duration.1,
            min_interest: interest.0,
            max_interest: interest.1,
        }
    }

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn test_classify_precedence() {
        // Fixed rate wins even when both ranges are degenerate
        assert_eq!(
            InterpolationCase::classify(&config((5, 5), (24, 24), (750, 750))),
            InterpolationCase::FixedRate
        );
        assert_eq!(
            InterpolationCase::classify(&config((5, 5), (24, 24), (500, 900))),
            InterpolationCase::BothDegenerate
        );
        assert_eq!(
            InterpolationCase::classify(&config((5, 50), (24, 24), (500, 900))),
            InterpolationCase::AmountOnly
        );
        assert_eq!(
            InterpolationCase::classify(&config((5, 5), (24, 48), (500, 900))),
            InterpolationCase::DurationOnly
        );
        assert_eq!(
            InterpolationCase::classify(&config((5, 50), (24, 48), (500, 900))),
            InterpolationCase::Blended
        );
    }

    #[test]
    fn test_case_inputs() {
        assert!(!InterpolationCase::FixedRate.uses_amount());
        assert!(InterpolationCase::AmountOnly.uses_amount());
        assert!(!InterpolationCase::AmountOnly.uses_duration());
        assert!(InterpolationCase::Blended.uses_amount());
        assert!(InterpolationCase::Blended.uses_duration());
    }

    #[test]
    fn test_factor_midpoint() {
        let factor = Factor::between(
            &BigInt::from(550),
            &BigInt::from(100),
            &BigInt::from(1000),
            ZeroSpanPolicy::Reject,
        )
        .unwrap();

        assert_eq!(factor.ratio(), &ratio(1, 2));
    }

    #[test]
    fn test_factor_zero_span() {
        let five = BigInt::from(5);

        let lenient = Factor::between(&five, &five, &five, ZeroSpanPolicy::TreatAsZero).unwrap();
        assert_eq!(lenient, Factor::zero());

        let strict = Factor::between(&five, &five, &five, ZeroSpanPolicy::Reject);
        assert!(matches!(strict, Err(Error::DivisionByZero(_))));
    }

    #[test]
    fn test_interpolate_blended() {
        let desk = config((100, 1000), (24, 240), (500, 2000));
        let rate = interpolate(
            InterpolationCase::Blended,
            &desk,
            &BigInt::from(550),
            &BigInt::from(120),
            ZeroSpanPolicy::Reject,
        )
        .unwrap();

        // 500 + (1/2 + 4/9) * 1500 / 2 = 500 + 2125/3
        assert_eq!(rate, ratio(3625, 3));
    }

    #[test]
    fn test_interpolate_single_axis() {
        let desk = config((0, 100), (24, 24), (1000, 2000));
        let rate = interpolate(
            InterpolationCase::AmountOnly,
            &desk,
            &BigInt::from(25),
            &BigInt::from(24),
            ZeroSpanPolicy::Reject,
        )
        .unwrap();
        assert_eq!(rate, ratio(1250, 1));

        let desk = config((7, 7), (0, 100), (1000, 2000));
        let rate = interpolate(
            InterpolationCase::DurationOnly,
            &desk,
            &BigInt::from(7),
            &BigInt::from(25),
            ZeroSpanPolicy::Reject,
        )
        .unwrap();
        assert_eq!(rate, ratio(1250, 1));
    }

    #[test]
    fn test_misrouted_blended_does_not_divide_by_zero() {
        let desk = config((100, 100), (24, 240), (500, 2000));

        let rate = interpolate(
            InterpolationCase::Blended,
            &desk,
            &BigInt::from(100),
            &BigInt::from(240),
            ZeroSpanPolicy::TreatAsZero,
        )
        .unwrap();
        assert_eq!(rate, ratio(1250, 1));

        let err = interpolate(
            InterpolationCase::Blended,
            &desk,
            &BigInt::from(100),
            &BigInt::from(240),
            ZeroSpanPolicy::Reject,
        );
        assert!(matches!(err, Err(Error::DivisionByZero(_))));
    }
}
