//! # Checkout Review
//!
//! The decision behind "complete purchase": every field is validated again
//! from its raw contents at the moment of the click. Nothing from an earlier
//! calculation is trusted, since the tickets field may have changed since.
//!
//! ```text
//!  raw form ──► validate_contact(name, email) ─┐
//!          └──► quote_tickets(quantity) ───────┼──► all Ok  ──► PurchaseConfirmation
//!                                              └──► any Err ──► PurchaseRejection
//! ```

use crate::error::PurchaseRejection;
use crate::money::Money;
use crate::types::PurchaseConfirmation;
use crate::validation::{quote_tickets, validate_contact};

/// Raw field contents as read from the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseForm<'a> {
    pub quantity: &'a str,
    pub name: &'a str,
    pub email: &'a str,
}

/// Re-validates the whole form.
///
/// ## Example
/// ```rust
/// use booth_core::{review_purchase, PurchaseForm, TICKET_PRICE};
///
/// let form = PurchaseForm { quantity: "2", name: "A", email: "a@b.co" };
/// let confirmation = review_purchase(&form, TICKET_PRICE).unwrap();
/// assert!(confirmation.message().contains("2 ticket(s) totaling $50.00"));
/// ```
pub fn review_purchase(
    form: &PurchaseForm<'_>,
    unit_price: Money,
) -> Result<PurchaseConfirmation, PurchaseRejection> {
    let contact = validate_contact(form.name, form.email);
    let quote = quote_tickets(form.quantity, unit_price);

    match (contact, quote) {
        (Ok(contact), Ok(quote)) => Ok(PurchaseConfirmation { quote, contact }),
        (contact, quote) => {
            let contact = contact.err().unwrap_or_default();
            Err(PurchaseRejection {
                quantity: quote.err(),
                name: contact.name,
                email: contact.email,
            })
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::TICKET_PRICE;

    fn form<'a>(quantity: &'a str, name: &'a str, email: &'a str) -> PurchaseForm<'a> {
        PurchaseForm {
            quantity,
            name,
            email,
        }
    }

    #[test]
    fn test_valid_purchase() {
        let confirmation = review_purchase(&form("2", "A", "a@b.co"), TICKET_PRICE).unwrap();
        assert_eq!(confirmation.quote.quantity.get(), 2);
        assert_eq!(confirmation.quote.total.to_string(), "$50.00");
        assert_eq!(
            confirmation.message(),
            "Thank you for your purchase of 2 ticket(s) totaling $50.00!"
        );
    }

    #[test]
    fn test_invalid_email_only() {
        let rejection = review_purchase(&form("2", "A", "a@b"), TICKET_PRICE).unwrap_err();
        assert_eq!(rejection.quantity, None);
        assert_eq!(rejection.name, None);
        assert_eq!(rejection.email, Some(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_quantity_rechecked_from_raw() {
        let rejection = review_purchase(&form("", "A", "a@b.co"), TICKET_PRICE).unwrap_err();
        assert_eq!(
            rejection.quantity,
            Some(ValidationError::quantity_not_a_number())
        );

        let rejection = review_purchase(&form("7", "A", "a@b.co"), TICKET_PRICE).unwrap_err();
        assert_eq!(
            rejection.quantity,
            Some(ValidationError::quantity_out_of_range())
        );
    }

    #[test]
    fn test_every_failure_reported() {
        let rejection = review_purchase(&form("x", " ", "nope"), TICKET_PRICE).unwrap_err();
        assert_eq!(rejection.errors().count(), 3);
    }
}
