//! Desk bound validation

use crate::config::RangePolicy;
use crate::{Error, LoanConfig, Result};
use num_bigint::BigInt;

/// Validates desk configurations and places requests within desk bounds
#[derive(Debug, Clone, Copy)]
pub struct BoundsChecker {
    policy: RangePolicy,
}

impl BoundsChecker {
    /// Create new bounds checker
    pub fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    /// Check every `min <= max` invariant of a desk
    pub fn check_config(&self, config: &LoanConfig) -> Result<()> {
        if config.min_amount > config.max_amount {
            return Err(Error::InvalidRange(format!(
                "min amount {} exceeds max amount {}",
                config.min_amount, config.max_amount
            )));
        }

        if config.min_duration > config.max_duration {
            return Err(Error::InvalidRange(format!(
                "min duration {} exceeds max duration {}",
                config.min_duration, config.max_duration
            )));
        }

        if config.min_interest > config.max_interest {
            return Err(Error::InvalidRange(format!(
                "min interest {} exceeds max interest {}",
                config.min_interest, config.max_interest
            )));
        }

        Ok(())
    }

    /// Apply the range policy to an amount in base units
    pub fn check_amount(&self, amount: BigInt, config: &LoanConfig) -> Result<BigInt> {
        let min = BigInt::from(config.min_amount);
        let max = BigInt::from(config.max_amount);

        if amount >= min && amount <= max {
            return Ok(amount);
        }

        match self.policy {
            RangePolicy::Reject => Err(Error::InvalidAmount(format!(
                "amount {} outside desk range [{}, {}]",
                amount, min, max
            ))),
            RangePolicy::Clamp => {
                tracing::warn!(%amount, %min, %max, "Clamping amount to desk range");
                Ok(amount.clamp(min, max))
            }
            RangePolicy::Extrapolate => {
                tracing::warn!(%amount, %min, %max, "Extrapolating amount past desk range");
                Ok(amount)
            }
        }
    }

    /// Apply the range policy to a duration in hours
    pub fn check_duration(&self, duration: BigInt, config: &LoanConfig) -> Result<BigInt> {
        let min = BigInt::from(config.min_duration);
        let max = BigInt::from(config.max_duration);

        if duration >= min && duration <= max {
            return Ok(duration);
        }

        match self.policy {
            RangePolicy::Reject => Err(Error::InvalidDuration(format!(
                "duration {}h outside desk range [{}h, {}h]",
                duration, min, max
            ))),
            RangePolicy::Clamp => {
                tracing::warn!(%duration, %min, %max, "Clamping duration to desk range");
                Ok(duration.clamp(min, max))
            }
            RangePolicy::Extrapolate => {
                tracing::warn!(%duration, %min, %max, "Extrapolating duration past desk range");
                Ok(duration)
            }
        }
    }
}

impl Default for BoundsChecker {
    fn default() -> Self {
        Self::new(RangePolicy::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> LoanConfig {
        LoanConfig {
            min_amount: 100,
            max_amount: 1000,
            min_duration: 24,
            max_duration: 240,
            min_interest: 500,
            max_interest: 2000,
        }
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let checker = BoundsChecker::default();
        assert!(checker.check_config(&desk()).is_ok());

        let inverted = LoanConfig { min_amount: 2000, ..desk() };
        assert!(matches!(checker.check_config(&inverted), Err(Error::InvalidRange(_))));

        let inverted = LoanConfig { max_duration: 1, ..desk() };
        assert!(matches!(checker.check_config(&inverted), Err(Error::InvalidRange(_))));

        let inverted = LoanConfig { min_interest: 2500, ..desk() };
        assert!(matches!(checker.check_config(&inverted), Err(Error::InvalidRange(_))));
    }

    #[test]
    fn test_reject_policy() {
        let checker = BoundsChecker::new(RangePolicy::Reject);

        assert_eq!(checker.check_amount(BigInt::from(100), &desk()).unwrap(), BigInt::from(100));
        assert_eq!(checker.check_amount(BigInt::from(1000), &desk()).unwrap(), BigInt::from(1000));
        assert!(matches!(
            checker.check_amount(BigInt::from(1001), &desk()),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            checker.check_duration(BigInt::from(12), &desk()),
            Err(Error::InvalidDuration(_))
        ));
    }

    #[test]
    fn test_clamp_policy() {
        let checker = BoundsChecker::new(RangePolicy::Clamp);

        assert_eq!(checker.check_amount(BigInt::from(5000), &desk()).unwrap(), BigInt::from(1000));
        assert_eq!(checker.check_amount(BigInt::from(0), &desk()).unwrap(), BigInt::from(100));
        assert_eq!(checker.check_duration(BigInt::from(480), &desk()).unwrap(), BigInt::from(240));
    }

    #[test]
    fn test_extrapolate_policy() {
        let checker = BoundsChecker::new(RangePolicy::Extrapolate);

        assert_eq!(checker.check_amount(BigInt::from(5000), &desk()).unwrap(), BigInt::from(5000));
        assert_eq!(checker.check_duration(BigInt::from(1), &desk()).unwrap(), BigInt::from(1));
    }
}
