//! Integration tests for PrintRush.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p printrush-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - full configure / cart / order scenarios
//! - `profile_gate` - profile save validation and order gating

#![cfg_attr(not(test), forbid(unsafe_code))]

use printrush_checkout::pricing::PriceTable;
use printrush_checkout::workflow::CheckoutSession;
use printrush_core::{DocumentRef, Email};
use uuid::Uuid;

/// Start a session with the default price table.
///
/// # Panics
///
/// Panics if the email literal is malformed.
#[must_use]
pub fn new_session(email: &str) -> CheckoutSession {
    #[allow(clippy::unwrap_used)]
    let email = Email::parse(email).unwrap();
    CheckoutSession::new(email, PriceTable::default())
}

/// A fresh upload handle, as the file-upload collaborator would produce.
#[must_use]
pub fn uploaded(file_name: &str) -> Option<DocumentRef> {
    Some(DocumentRef::new(Uuid::new_v4(), file_name.to_string()))
}
