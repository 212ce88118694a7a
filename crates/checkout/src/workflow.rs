//! Checkout workflow orchestration.
//!
//! [`CheckoutSession`] owns one user's cart and profile for the lifetime of
//! an authenticated session and drives the workflow stages:
//!
//! ```text
//! Configuring -> ReviewingCart -> OrderPlaced   (terminal success)
//!                      |
//!                      v
//!               EditingProfile   (blocked; back to Configuring on save)
//! ```
//!
//! All operations are synchronous - authentication and document upload
//! happen in external collaborators and arrive here as resolved values
//! ([`Email`], [`DocumentRef`]).

use serde::{Deserialize, Serialize};
use tracing::instrument;

use printrush_core::{DocumentRef, Email, LineItemId, Phone, Price, SessionId};

use crate::cart::{CartStore, LineItem};
use crate::error::{CheckoutError, Result};
use crate::pricing::{self, JobConfiguration, PriceTable};
use crate::profile::{self, ProfileDraft, ProfileError, UserProfile};

/// Where the user is in the checkout workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStage {
    /// Building a job configuration.
    #[default]
    Configuring,
    /// Reviewing the accumulated cart.
    ReviewingCart,
    /// Order placement was blocked; the user is editing their profile.
    EditingProfile,
    /// Terminal success.
    OrderPlaced,
}

/// Why an order placement was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockedReason {
    /// The profile has not been saved with a phone number.
    IncompleteProfile,
}

impl std::fmt::Display for BlockedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncompleteProfile => {
                write!(f, "complete your profile (phone number) before ordering")
            }
        }
    }
}

/// Where the caller should send the user after a blocked placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextAction {
    /// Open the profile editor.
    EditProfile,
}

/// Confirmation for a successfully placed order.
///
/// This is all the order data that exists - nothing is persisted, there is
/// no order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Total across all cart items at placement time.
    pub total: Price,
    /// Phone number the shop will contact for pickup/delivery.
    pub contact_phone: Phone,
    /// Customer display name for the confirmation message.
    pub customer_name: String,
}

/// Outcome of an order placement attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOrderOutcome {
    /// The order went through; the cart has been cleared.
    Placed(OrderConfirmation),
    /// The profile gate refused the order; the cart is untouched.
    Blocked {
        reason: BlockedReason,
        next: NextAction,
    },
}

/// One user's checkout state for the lifetime of their session.
///
/// Exclusively owned - no other session can reach this cart or profile, so
/// no locking is involved anywhere in the workflow.
#[derive(Debug)]
pub struct CheckoutSession {
    id: SessionId,
    price_table: PriceTable,
    cart: CartStore,
    profile: UserProfile,
    stage: CheckoutStage,
    next_line_item: u64,
}

impl CheckoutSession {
    /// Start a session for an authenticated user.
    ///
    /// The email comes from the (external) authentication collaborator and
    /// pre-fills the profile; the price table comes from process-start
    /// configuration.
    #[must_use]
    pub fn new(email: Email, price_table: PriceTable) -> Self {
        let currency = price_table.currency;
        Self {
            id: SessionId::generate(),
            price_table,
            cart: CartStore::new(currency),
            profile: UserProfile::for_session(email),
            stage: CheckoutStage::Configuring,
            next_line_item: 1,
        }
    }

    /// The session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Current workflow stage.
    #[must_use]
    pub const fn stage(&self) -> CheckoutStage {
        self.stage
    }

    /// The session's profile, for display.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Live price preview for the configuration form.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Pricing`] for a malformed configuration.
    pub fn quote(&self, config: &JobConfiguration) -> Result<Price> {
        Ok(pricing::quote(config, &self.price_table)?)
    }

    /// Price a job and append it to the cart.
    ///
    /// Returns the created line item for the confirmation display.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::MissingDocument`] if no document reference
    /// was supplied, or [`CheckoutError::Pricing`] if the configuration is
    /// malformed. The cart is unchanged on error.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn add_to_cart(
        &mut self,
        config: JobConfiguration,
        document: Option<DocumentRef>,
    ) -> Result<LineItem> {
        let document = document.ok_or(CheckoutError::MissingDocument)?;
        let price = pricing::quote(&config, &self.price_table)?;

        let id = LineItemId::new(self.next_line_item);
        self.next_line_item += 1;

        let item = LineItem::new(id, config, price, document);
        self.cart.add(item.clone());
        self.stage = CheckoutStage::Configuring;

        tracing::info!(line_item = %item.id, price = %item.price, "Added item to cart");
        Ok(item)
    }

    /// Remove a line item from the cart.
    ///
    /// Silently does nothing if the ID is not present - the UI only offers
    /// removal of items it rendered.
    pub fn remove_from_cart(&mut self, id: LineItemId) {
        self.cart.remove(id);
    }

    /// Sum of all cart item prices.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total()
    }

    /// Number of cart items, for the badge.
    #[must_use]
    pub fn cart_size(&self) -> usize {
        self.cart.len()
    }

    /// Enter cart review and return the items in insertion order.
    pub fn review_cart(&mut self) -> &[LineItem] {
        self.stage = CheckoutStage::ReviewingCart;
        self.cart.items()
    }

    /// Attempt to place the order.
    ///
    /// The profile gate is evaluated fresh here, never cached. When blocked,
    /// the cart is left untouched and the caller is directed to the profile
    /// editor. On success the cart is cleared; the confirmation is the only
    /// record of the order.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn place_order(&mut self) -> PlaceOrderOutcome {
        let contact_phone = if profile::is_orderable(&self.profile) {
            self.profile.phone.clone()
        } else {
            None
        };

        let Some(contact_phone) = contact_phone else {
            tracing::warn!("Order blocked: profile incomplete");
            self.stage = CheckoutStage::EditingProfile;
            return PlaceOrderOutcome::Blocked {
                reason: BlockedReason::IncompleteProfile,
                next: NextAction::EditProfile,
            };
        };

        let total = self.cart.total();
        let items = self.cart.len();
        self.cart.clear();
        self.stage = CheckoutStage::OrderPlaced;

        tracing::info!(items, total = %total, "Order placed");
        PlaceOrderOutcome::Placed(OrderConfirmation {
            total,
            contact_phone,
            customer_name: self.profile.name.clone(),
        })
    }

    /// Validate and save a profile draft.
    ///
    /// On success the profile is marked complete and the workflow returns
    /// to configuring. On failure the profile is unchanged and the error
    /// names the offending field.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Profile`] when validation fails.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn save_profile(&mut self, draft: ProfileDraft) -> Result<()> {
        self.profile.save(draft).map_err(|e: ProfileError| {
            tracing::warn!(error = %e, "Profile save rejected");
            e
        })?;

        self.stage = CheckoutStage::Configuring;
        tracing::info!("Profile saved");
        Ok(())
    }

    /// End the session, discarding any un-ordered cart items.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn end(mut self) {
        let discarded = self.cart.len();
        self.cart.clear();
        if discarded > 0 {
            tracing::info!(discarded, "Session ended with items in cart");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::pricing::{BindingType, PrintType};

    use super::*;

    fn session() -> CheckoutSession {
        CheckoutSession::new(
            Email::parse("priya@example.com").unwrap(),
            PriceTable::default(),
        )
    }

    fn document() -> Option<DocumentRef> {
        Some(DocumentRef::new(Uuid::new_v4(), "doc.pdf".to_string()))
    }

    fn bw_print() -> JobConfiguration {
        JobConfiguration::Print {
            print_type: PrintType::Bw,
            pages: 10,
            copies: 2,
        }
    }

    fn spiral_binding() -> JobConfiguration {
        JobConfiguration::Binding {
            binding_type: BindingType::Spiral,
            copies: 3,
        }
    }

    fn complete_profile(session: &mut CheckoutSession) {
        session
            .save_profile(ProfileDraft {
                name: "Priya".to_string(),
                phone: "9876543210".to_string(),
                address: "12 MG Road, Pune".to_string(),
            })
            .unwrap();
    }

    #[test]
    fn test_new_session_starts_configuring() {
        let session = session();
        assert_eq!(session.stage(), CheckoutStage::Configuring);
        assert_eq!(session.cart_size(), 0);
        assert_eq!(session.profile().name, "priya");
    }

    #[test]
    fn test_quote_matches_add_price() {
        let mut session = session();
        let quoted = session.quote(&bw_print()).unwrap();
        let item = session.add_to_cart(bw_print(), document()).unwrap();
        assert_eq!(item.price, quoted);
        assert_eq!(quoted.amount, Decimal::new(4000, 2));
    }

    #[test]
    fn test_add_to_cart_without_document() {
        let mut session = session();
        let err = session.add_to_cart(bw_print(), None).unwrap_err();
        assert_eq!(err, CheckoutError::MissingDocument);
        assert_eq!(session.cart_size(), 0);
    }

    #[test]
    fn test_add_to_cart_assigns_unique_ids() {
        let mut session = session();
        let first = session.add_to_cart(bw_print(), document()).unwrap();
        let second = session.add_to_cart(spiral_binding(), document()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(session.cart_size(), 2);
    }

    #[test]
    fn test_invalid_configuration_leaves_cart_unchanged() {
        let mut session = session();
        session.add_to_cart(bw_print(), document()).unwrap();

        let bad = JobConfiguration::Print {
            print_type: PrintType::Bw,
            pages: 0,
            copies: 1,
        };
        assert!(session.add_to_cart(bad, document()).is_err());
        assert_eq!(session.cart_size(), 1);
    }

    #[test]
    fn test_remove_from_cart_is_idempotent() {
        let mut session = session();
        let item = session.add_to_cart(bw_print(), document()).unwrap();

        session.remove_from_cart(item.id);
        session.remove_from_cart(item.id);

        assert_eq!(session.cart_size(), 0);
    }

    #[test]
    fn test_place_order_blocked_without_profile() {
        let mut session = session();
        session.add_to_cart(bw_print(), document()).unwrap();
        let total_before = session.cart_total();

        let outcome = session.place_order();

        assert_eq!(
            outcome,
            PlaceOrderOutcome::Blocked {
                reason: BlockedReason::IncompleteProfile,
                next: NextAction::EditProfile,
            }
        );
        // Cart untouched, user sent to the profile editor
        assert_eq!(session.cart_size(), 1);
        assert_eq!(session.cart_total(), total_before);
        assert_eq!(session.stage(), CheckoutStage::EditingProfile);
    }

    #[test]
    fn test_place_order_blocked_when_phone_cleared_after_save() {
        let mut session = session();
        complete_profile(&mut session);
        session.add_to_cart(bw_print(), document()).unwrap();

        // Gate is evaluated fresh at order time
        session.profile.phone = None;

        assert!(matches!(
            session.place_order(),
            PlaceOrderOutcome::Blocked { .. }
        ));
        assert_eq!(session.cart_size(), 1);
    }

    #[test]
    fn test_place_order_success_clears_cart() {
        let mut session = session();
        complete_profile(&mut session);
        session.add_to_cart(bw_print(), document()).unwrap();
        session.add_to_cart(spiral_binding(), document()).unwrap();

        // 40.00 + 120 = 160
        let expected_total = session.cart_total();
        assert_eq!(expected_total.amount, Decimal::new(16000, 2));

        let outcome = session.place_order();

        let PlaceOrderOutcome::Placed(confirmation) = outcome else {
            panic!("expected order to be placed");
        };
        assert_eq!(confirmation.total, expected_total);
        assert_eq!(confirmation.contact_phone.as_str(), "9876543210");
        assert_eq!(confirmation.customer_name, "Priya");

        assert_eq!(session.cart_size(), 0);
        assert!(session.cart_total().is_zero());
        assert_eq!(session.stage(), CheckoutStage::OrderPlaced);
    }

    #[test]
    fn test_save_profile_failure_keeps_edit_stage() {
        let mut session = session();
        session.add_to_cart(bw_print(), document()).unwrap();
        session.place_order(); // blocked -> EditingProfile

        let err = session
            .save_profile(ProfileDraft {
                name: "Priya".to_string(),
                phone: String::new(),
                address: String::new(),
            })
            .unwrap_err();

        assert!(matches!(err, CheckoutError::Profile(_)));
        assert_eq!(session.stage(), CheckoutStage::EditingProfile);
        assert!(!session.profile().complete);
    }

    #[test]
    fn test_blocked_then_save_then_place() {
        let mut session = session();
        session.add_to_cart(spiral_binding(), document()).unwrap();

        assert!(matches!(
            session.place_order(),
            PlaceOrderOutcome::Blocked { .. }
        ));

        complete_profile(&mut session);
        assert_eq!(session.stage(), CheckoutStage::Configuring);

        let PlaceOrderOutcome::Placed(confirmation) = session.place_order() else {
            panic!("expected order to be placed");
        };
        assert_eq!(confirmation.total.amount, Decimal::new(120, 0));
    }

    #[test]
    fn test_end_discards_unordered_cart_items() {
        let mut session = session();
        session.add_to_cart(bw_print(), document()).unwrap();
        session.add_to_cart(spiral_binding(), document()).unwrap();
        assert_eq!(session.cart_size(), 2);

        // Logout discards the cart with the session; nothing survives
        session.end();
    }

    #[test]
    fn test_end_with_empty_cart() {
        session().end();
    }

    #[test]
    fn test_review_cart_preserves_insertion_order() {
        let mut session = session();
        let first = session.add_to_cart(bw_print(), document()).unwrap();
        let second = session.add_to_cart(spiral_binding(), document()).unwrap();

        let ids: Vec<LineItemId> = session.review_cart().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(session.stage(), CheckoutStage::ReviewingCart);
    }
}
