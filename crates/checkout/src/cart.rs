//! Cart storage.
//!
//! [`CartStore`] is an insertion-ordered collection of priced line items,
//! owned exclusively by one checkout session. Single session, single
//! logical thread - no locking.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use printrush_core::{CurrencyCode, DocumentRef, LineItemId, Price};

use crate::pricing::JobConfiguration;

/// One priced cart entry for a single print or binding job.
///
/// Immutable once created; it is dropped on removal or when the cart is
/// cleared after a successful order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique within the owning session.
    pub id: LineItemId,
    /// The job as configured by the user.
    pub config: JobConfiguration,
    /// Price computed at add time.
    pub price: Price,
    /// Handle to the uploaded document for this job.
    pub document: DocumentRef,
    /// When the item was added to the cart.
    pub added_at: DateTime<Utc>,
}

impl LineItem {
    /// Create a line item, stamping the current time.
    #[must_use]
    pub fn new(
        id: LineItemId,
        config: JobConfiguration,
        price: Price,
        document: DocumentRef,
    ) -> Self {
        Self {
            id,
            config,
            price,
            document,
            added_at: Utc::now(),
        }
    }

    /// One-line description for cart display.
    #[must_use]
    pub fn summary(&self) -> String {
        self.config.summary()
    }
}

/// Ordered collection of cart line items.
///
/// Insertion order is preserved for display. IDs are unique by construction
/// (the workflow allocates them from a monotonic counter), so no duplicate
/// handling is needed.
#[derive(Debug, Clone)]
pub struct CartStore {
    items: Vec<LineItem>,
    currency: CurrencyCode,
}

impl CartStore {
    /// Create an empty cart.
    ///
    /// The currency is needed so an empty cart can still report a zero
    /// total.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Append an item to the end of the cart. Always succeeds.
    pub fn add(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove the item with the given ID.
    ///
    /// A no-op if no such item exists - removal is idempotent, since the
    /// caller only ever removes items it was shown.
    pub fn remove(&mut self, id: LineItemId) {
        self.items.retain(|item| item.id != id);
    }

    /// Sum of all item prices; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        let amount = self
            .items
            .iter()
            .fold(Decimal::ZERO, |total, item| total + item.price.amount);
        Price::new(amount, self.currency)
    }

    /// Empty the cart. Used after a successful order placement.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of items, exposed for the cart badge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in insertion order, for display.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}
