//! Lending desk interest quote CLI
//!
//! Usage: `interest-quote <loan-config.json> [amount] [duration-days] [decimals]`

use anyhow::Context;
use interest_engine::{units, CalculatorConfig, InterestCalculator, LoanConfig, LoanRequest};
use num_bigint::BigInt;

const USAGE: &str = "usage: interest-quote <loan-config.json> [amount] [duration-days] [decimals]";

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context(USAGE)?;
    let amount = args.next();
    let duration_in_days = args
        .next()
        .map(|days| days.parse::<u64>())
        .transpose()
        .context("duration-days must be a whole number")?;
    let decimals = args
        .next()
        .map(|decimals| decimals.parse::<u32>())
        .transpose()
        .context("decimals must be a whole number")?;

    // Load configuration
    let config = match std::env::var("INTEREST_CONFIG") {
        Ok(config_path) => CalculatorConfig::from_file(&config_path)
            .with_context(|| format!("failed to load {}", config_path))?,
        Err(_) => CalculatorConfig::from_env()?,
    };

    let content = std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
    let loan_config: LoanConfig =
        serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path))?;

    let request = LoanRequest {
        amount,
        duration_in_days,
        decimals,
    };

    let calculator = InterestCalculator::new(config)?;
    let rate = calculator.quote(&loan_config, &request)?;

    let decimals = request.decimals.unwrap_or(calculator.config().default_decimals);
    let min_amount = units::format_units(&BigInt::from(loan_config.min_amount), decimals)?;
    let max_amount = units::format_units(&BigInt::from(loan_config.max_amount), decimals)?;
    tracing::info!(case = ?rate.case, %min_amount, %max_amount, "Quoted loan");

    println!("{}", rate);
    Ok(())
}
