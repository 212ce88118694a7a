//! End-to-end checkout scenarios.
//!
//! These walk the full workflow the way the storefront drives it:
//! configure a job, accumulate a cart, save the profile, place the order.

#![allow(clippy::unwrap_used)]

use printrush_checkout::pricing::{BindingType, JobConfiguration, PrintType};
use printrush_checkout::profile::ProfileDraft;
use printrush_checkout::workflow::{CheckoutStage, PlaceOrderOutcome};
use printrush_integration_tests::{new_session, uploaded};
use rust_decimal::Decimal;

fn complete_profile_draft() -> ProfileDraft {
    ProfileDraft {
        name: "Priya Sharma".to_string(),
        phone: "+91 98765 43210".to_string(),
        address: "12 MG Road, Pune".to_string(),
    }
}

// =============================================================================
// Full Order Scenarios
// =============================================================================

#[test]
fn test_print_and_binding_order_end_to_end() {
    let mut session = new_session("priya@example.com");

    // BW print: 2.00 x 10 pages x 2 copies = 40.00
    let print = JobConfiguration::Print {
        print_type: PrintType::Bw,
        pages: 10,
        copies: 2,
    };
    let print_item = session
        .add_to_cart(print, uploaded("assignment.pdf"))
        .unwrap();
    assert_eq!(print_item.price.amount, Decimal::new(4000, 2));

    // Spiral binding: 40 x 3 copies = 120
    let binding = JobConfiguration::Binding {
        binding_type: BindingType::Spiral,
        copies: 3,
    };
    let binding_item = session
        .add_to_cart(binding, uploaded("thesis.pdf"))
        .unwrap();
    assert_eq!(binding_item.price.amount, Decimal::new(120, 0));

    // Cart review: 40.00 + 120 = 160
    assert_eq!(session.cart_size(), 2);
    assert_eq!(session.cart_total().amount, Decimal::new(16000, 2));

    session.save_profile(complete_profile_draft()).unwrap();

    let PlaceOrderOutcome::Placed(confirmation) = session.place_order() else {
        panic!("expected order to be placed");
    };

    assert_eq!(confirmation.total.amount, Decimal::new(16000, 2));
    assert_eq!(confirmation.contact_phone.as_str(), "+91 98765 43210");
    assert_eq!(confirmation.customer_name, "Priya Sharma");

    // Cart is cleared; no order history exists
    assert_eq!(session.cart_size(), 0);
    assert!(session.cart_total().is_zero());
    assert_eq!(session.stage(), CheckoutStage::OrderPlaced);
}

#[test]
fn test_blocked_order_redirects_and_preserves_cart() {
    let mut session = new_session("ravi@example.com");

    let binding = JobConfiguration::Binding {
        binding_type: BindingType::Soft,
        copies: 2,
    };
    session.add_to_cart(binding, uploaded("report.docx")).unwrap();
    let total_before = session.cart_total();

    // No profile saved yet - the gate blocks and redirects
    let outcome = session.place_order();
    assert!(matches!(outcome, PlaceOrderOutcome::Blocked { .. }));
    assert_eq!(session.stage(), CheckoutStage::EditingProfile);
    assert_eq!(session.cart_total(), total_before);
    assert_eq!(session.cart_size(), 1);

    // Completing the profile unblocks the same cart
    session.save_profile(complete_profile_draft()).unwrap();
    let PlaceOrderOutcome::Placed(confirmation) = session.place_order() else {
        panic!("expected order to be placed after profile save");
    };
    assert_eq!(confirmation.total, total_before);
}

#[test]
fn test_removal_and_preview_match_checkout_math() {
    let mut session = new_session("dev@example.com");

    let color = JobConfiguration::Print {
        print_type: PrintType::Color,
        pages: 5,
        copies: 1,
    };
    // Live preview equals the price charged at add time
    let preview = session.quote(&color).unwrap();
    let item = session.add_to_cart(color, uploaded("photos.pdf")).unwrap();
    assert_eq!(item.price, preview);

    let bw = JobConfiguration::Print {
        print_type: PrintType::Bw,
        pages: 100,
        copies: 1,
    };
    let bw_item = session.add_to_cart(bw, uploaded("book.pdf")).unwrap();

    // Remove the color job; removing again is a harmless no-op
    session.remove_from_cart(item.id);
    session.remove_from_cart(item.id);

    assert_eq!(session.cart_size(), 1);
    assert_eq!(session.cart_total().amount, bw_item.price.amount);
}

#[test]
fn test_missing_document_rejected_without_side_effects() {
    let mut session = new_session("meera@example.com");

    let config = JobConfiguration::Print {
        print_type: PrintType::Bw,
        pages: 1,
        copies: 1,
    };
    assert!(session.add_to_cart(config, None).is_err());
    assert_eq!(session.cart_size(), 0);
    assert_eq!(session.stage(), CheckoutStage::Configuring);
}

#[test]
fn test_order_confirmation_serializes() {
    let mut session = new_session("priya@example.com");
    session.save_profile(complete_profile_draft()).unwrap();
    session
        .add_to_cart(
            JobConfiguration::Binding {
                binding_type: BindingType::Spiral,
                copies: 1,
            },
            uploaded("notes.pdf"),
        )
        .unwrap();

    let PlaceOrderOutcome::Placed(confirmation) = session.place_order() else {
        panic!("expected order to be placed");
    };

    // Confirmations cross to the presentation layer as JSON
    let json = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(json["customer_name"], "Priya Sharma");
    assert_eq!(json["contact_phone"], "+91 98765 43210");
}
