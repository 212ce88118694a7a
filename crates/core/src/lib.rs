//! PrintRush Core - Shared types library.
//!
//! This crate provides common types used across all PrintRush components:
//! - `checkout` - Order configuration and checkout workflow
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no network access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, phone
//!   numbers, and document references

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
