//! Unified error type for checkout operations.
//!
//! Every failure is typed, recovered locally, and leaves prior state
//! unchanged - the caller always has a next action (fix the input, edit the
//! profile, re-upload the document).

use thiserror::Error;

use crate::pricing::PricingError;
use crate::profile::ProfileError;

/// Errors surfaced by checkout workflow operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Add-to-cart was attempted without an uploaded document.
    #[error("a document upload is required before adding to cart")]
    MissingDocument,

    /// The job configuration could not be priced.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A profile save failed validation.
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Result type alias for [`CheckoutError`].
pub type Result<T> = std::result::Result<T, CheckoutError>;
