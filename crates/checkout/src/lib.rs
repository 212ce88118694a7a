//! PrintRush Checkout - order configuration and checkout workflow.
//!
//! This crate is the decision-making core of the PrintRush shop: pricing,
//! cart lifecycle, and the profile-completeness gate on order placement.
//! Everything around it - authentication, file upload, rendering - lives in
//! external collaborators and crosses into this crate as plain values.
//!
//! # Modules
//!
//! - [`pricing`] - job configurations, the price table, and the pure
//!   pricing function
//! - [`cart`] - line items and the session-owned cart store
//! - [`profile`] - user profile, save validation, and the order gate
//! - [`workflow`] - [`CheckoutSession`](workflow::CheckoutSession), the
//!   orchestrator exposed to the presentation layer
//! - [`config`] - price table loading from environment variables
//! - [`error`] - unified [`CheckoutError`](error::CheckoutError)
//!
//! # Example
//!
//! ```
//! use printrush_checkout::pricing::{JobConfiguration, PriceTable, PrintType};
//! use printrush_checkout::profile::ProfileDraft;
//! use printrush_checkout::workflow::{CheckoutSession, PlaceOrderOutcome};
//! use printrush_core::{DocumentRef, Email};
//! use uuid::Uuid;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let email = Email::parse("user@example.com")?;
//! let mut session = CheckoutSession::new(email, PriceTable::default());
//!
//! let config = JobConfiguration::Print {
//!     print_type: PrintType::Bw,
//!     pages: 10,
//!     copies: 2,
//! };
//! let doc = DocumentRef::new(Uuid::new_v4(), "notes.pdf".into());
//! session.add_to_cart(config, Some(doc))?;
//!
//! session.save_profile(ProfileDraft {
//!     name: "Priya".into(),
//!     phone: "9876543210".into(),
//!     address: "12 MG Road, Pune".into(),
//! })?;
//!
//! let PlaceOrderOutcome::Placed(confirmation) = session.place_order() else {
//!     unreachable!("profile is complete");
//! };
//! assert_eq!(confirmation.total.to_string(), "₹40.00");
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod pricing;
pub mod profile;
pub mod workflow;

pub use cart::{CartStore, LineItem};
pub use config::CheckoutConfig;
pub use error::CheckoutError;
pub use pricing::{JobConfiguration, PriceTable};
pub use profile::{ProfileDraft, UserProfile};
pub use workflow::{CheckoutSession, OrderConfirmation, PlaceOrderOutcome};
