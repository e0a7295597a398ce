//! Interest Engine for lending desks
//!
//! Quotes the interest rate a lending desk charges for a loan, given the
//! desk's configured amount, duration and interest ranges.
//!
//! # Interpolation
//!
//! The rate moves linearly from `min_interest` to `max_interest` as the
//! request moves from the desk minimums to its maximums. When both amount
//! and duration vary, the two factors are weighted equally. All
//! intermediate arithmetic is exact; conversion to a percentage happens
//! last.
//!
//! # Example
//!
//! ```
//! use interest_engine::{InterestCalculator, LoanConfig, LoanRequest};
//!
//! let desk = LoanConfig {
//!     min_amount: 100,
//!     max_amount: 1000,
//!     min_duration: 24,
//!     max_duration: 240,
//!     min_interest: 500,
//!     max_interest: 2000,
//! };
//!
//! let request = LoanRequest::new()
//!     .with_amount("550")
//!     .with_duration_days(5)
//!     .with_decimals(0);
//!
//! let rate = InterestCalculator::default().quote(&desk, &request)?;
//! assert!((rate.as_f64() - 12.0833).abs() < 1e-4);
//! # Ok::<(), interest_engine::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, missing_debug_implementations)]

pub mod bounds;
pub mod calculator;
pub mod config;
pub mod error;
pub mod interpolation;
pub mod types;
pub mod units;

pub use bounds::BoundsChecker;
pub use calculator::{calculate_interest, InterestCalculator};
pub use config::{CalculatorConfig, RangePolicy, ZeroSpanPolicy};
pub use error::{Error, Result};
pub use interpolation::{Factor, InterpolationCase};
pub use types::*;
