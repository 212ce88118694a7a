//! Checkout configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults are the shop's standard rates.
//!
//! - `PRINTRUSH_CURRENCY` - ISO 4217 code for all rates (default: INR)
//! - `PRINTRUSH_RATE_PRINT_BW` - per-page black & white rate (default: 2.00)
//! - `PRINTRUSH_RATE_PRINT_COLOR` - per-page color rate (default: 10.00)
//! - `PRINTRUSH_RATE_BINDING_SOFT` - per-copy soft binding rate (default: 30)
//! - `PRINTRUSH_RATE_BINDING_SPIRAL` - per-copy spiral binding rate (default: 40)

use rust_decimal::Decimal;
use thiserror::Error;

use printrush_core::CurrencyCode;

use crate::pricing::PriceTable;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Negative rate in {0}: rates must be >= 0")]
    NegativeRate(String),
}

/// Checkout application configuration.
///
/// Built once at process start; the price table is read-only afterwards.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Rates for print and binding services.
    pub price_table: PriceTable,
}

impl CheckoutConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a rate or currency variable is present but
    /// unparseable, or if a rate is negative.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let currency = parse_currency(
            "PRINTRUSH_CURRENCY",
            std::env::var("PRINTRUSH_CURRENCY").ok().as_deref(),
        )?;

        let price_table = PriceTable {
            currency,
            print_bw: get_rate("PRINTRUSH_RATE_PRINT_BW", Decimal::new(200, 2))?,
            print_color: get_rate("PRINTRUSH_RATE_PRINT_COLOR", Decimal::new(1000, 2))?,
            binding_soft: get_rate("PRINTRUSH_RATE_BINDING_SOFT", Decimal::new(30, 0))?,
            binding_spiral: get_rate("PRINTRUSH_RATE_BINDING_SPIRAL", Decimal::new(40, 0))?,
        };

        Ok(Self { price_table })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Read a rate variable, falling back to the default when unset.
fn get_rate(key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(key) {
        Ok(value) => parse_rate(key, &value),
        Err(_) => Ok(default),
    }
}

/// Parse and validate a rate value.
fn parse_rate(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    let rate = value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;

    if rate.is_sign_negative() {
        return Err(ConfigError::NegativeRate(key.to_string()));
    }

    Ok(rate)
}

/// Parse the currency variable, defaulting to INR when unset.
fn parse_currency(key: &str, value: Option<&str>) -> Result<CurrencyCode, ConfigError> {
    value.map_or(Ok(CurrencyCode::INR), |v| {
        v.trim()
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
    })
}
