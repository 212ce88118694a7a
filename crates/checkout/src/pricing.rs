//! Job configuration and pricing.
//!
//! [`quote`] is a pure function from a [`JobConfiguration`] and a
//! [`PriceTable`] to a [`Price`]. Input forms constrain pages/copies to be
//! at least 1, but the engine re-checks so a malformed configuration can
//! never produce a zero-page quote or a negative amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use printrush_core::{CurrencyCode, Price};

/// Errors that can occur when pricing a job.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// A print job was configured with zero pages.
    #[error("invalid configuration: pages must be at least 1")]
    ZeroPages,

    /// A job was configured with zero copies.
    #[error("invalid configuration: copies must be at least 1")]
    ZeroCopies,

    /// The price table carries a negative rate for the requested service.
    ///
    /// Rates are validated at config load, so this only fires for
    /// hand-constructed tables.
    #[error("invalid configuration: negative rate in price table")]
    NegativeRate,
}

/// Print color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrintType {
    #[default]
    Bw,
    Color,
}

impl PrintType {
    /// Uppercase label for cart display (e.g., "BW | 10 pgs").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bw => "BW",
            Self::Color => "COLOR",
        }
    }
}

impl std::fmt::Display for PrintType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bw => write!(f, "bw"),
            Self::Color => write!(f, "color"),
        }
    }
}

impl std::str::FromStr for PrintType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bw" => Ok(Self::Bw),
            "color" => Ok(Self::Color),
            _ => Err(format!("invalid print type: {s}")),
        }
    }
}

/// Binding style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BindingType {
    Soft,
    #[default]
    Spiral,
}

impl BindingType {
    /// Uppercase label for cart display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Soft => "SOFT",
            Self::Spiral => "SPIRAL",
        }
    }
}

impl std::fmt::Display for BindingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Soft => write!(f, "soft"),
            Self::Spiral => write!(f, "spiral"),
        }
    }
}

impl std::str::FromStr for BindingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soft" => Ok(Self::Soft),
            "spiral" => Ok(Self::Spiral),
            _ => Err(format!("invalid binding type: {s}")),
        }
    }
}

/// One configured print or binding job.
///
/// Discriminated by service kind; the tagged serde representation matches
/// the shape submitted by the order form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JobConfiguration {
    /// Photocopy / print job, priced per page per copy.
    Print {
        print_type: PrintType,
        pages: u32,
        copies: u32,
    },
    /// Binding job, priced per copy.
    Binding {
        binding_type: BindingType,
        copies: u32,
    },
}

impl JobConfiguration {
    /// Number of copies requested.
    #[must_use]
    pub const fn copies(&self) -> u32 {
        match self {
            Self::Print { copies, .. } | Self::Binding { copies, .. } => *copies,
        }
    }

    /// One-line description for cart display.
    ///
    /// Mirrors the storefront cart rows: "BW | 10 pgs x 2 copies" or
    /// "SPIRAL x 3 copies".
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::Print {
                print_type,
                pages,
                copies,
            } => format!("{} | {pages} pgs x {copies} copies", print_type.label()),
            Self::Binding {
                binding_type,
                copies,
            } => format!("{} x {copies} copies", binding_type.label()),
        }
    }
}

/// Static rate configuration for print and binding services.
///
/// Built once at process start (see [`crate::config`]) and read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Currency all rates are denominated in.
    pub currency: CurrencyCode,
    /// Per-page rate for black & white printing.
    pub print_bw: Decimal,
    /// Per-page rate for color printing.
    pub print_color: Decimal,
    /// Per-copy rate for soft binding.
    pub binding_soft: Decimal,
    /// Per-copy rate for spiral binding.
    pub binding_spiral: Decimal,
}

impl PriceTable {
    /// Rate for the given print type.
    #[must_use]
    pub const fn print_rate(&self, print_type: PrintType) -> Decimal {
        match print_type {
            PrintType::Bw => self.print_bw,
            PrintType::Color => self.print_color,
        }
    }

    /// Rate for the given binding type.
    #[must_use]
    pub const fn binding_rate(&self, binding_type: BindingType) -> Decimal {
        match binding_type {
            BindingType::Soft => self.binding_soft,
            BindingType::Spiral => self.binding_spiral,
        }
    }
}

impl Default for PriceTable {
    /// Shop rates: ₹2 bw, ₹10 color per page; ₹30 soft, ₹40 spiral per copy.
    fn default() -> Self {
        Self {
            currency: CurrencyCode::INR,
            print_bw: Decimal::new(200, 2),
            print_color: Decimal::new(1000, 2),
            binding_soft: Decimal::new(30, 0),
            binding_spiral: Decimal::new(40, 0),
        }
    }
}

/// Price a job configuration against a price table.
///
/// Print jobs cost `rate x pages x copies`; binding jobs cost
/// `rate x copies`. Pure - no side effects, no state.
///
/// # Errors
///
/// Returns [`PricingError`] if pages or copies are zero, or if the table
/// rate for the requested service is negative.
pub fn quote(config: &JobConfiguration, table: &PriceTable) -> Result<Price, PricingError> {
    let amount = match config {
        JobConfiguration::Print {
            print_type,
            pages,
            copies,
        } => {
            if *pages == 0 {
                return Err(PricingError::ZeroPages);
            }
            if *copies == 0 {
                return Err(PricingError::ZeroCopies);
            }
            table.print_rate(*print_type) * Decimal::from(*pages) * Decimal::from(*copies)
        }
        JobConfiguration::Binding {
            binding_type,
            copies,
        } => {
            if *copies == 0 {
                return Err(PricingError::ZeroCopies);
            }
            table.binding_rate(*binding_type) * Decimal::from(*copies)
        }
    };

    if amount.is_sign_negative() {
        return Err(PricingError::NegativeRate);
    }

    Ok(Price::new(amount, table.currency))
}
