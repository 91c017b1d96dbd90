//! # Purchase Command
//!
//! Completing the purchase re-validates the whole form.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  click buy                                                              │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  read tickets, name, email (raw)                                       │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  review_purchase ──── Err ──► name/email error states                  │
//! │     │                         quantity bad? ──► calculate_total()      │
//! │     │ Ok                      countdown keeps running                  │
//! │     ▼                                                                   │
//! │  cancel countdown ──► alert "Thank you for your purchase of ..."       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use booth_core::{review_purchase, PurchaseConfirmation, PurchaseForm, ValidationError};
use chrono::Utc;
use tracing::{info, warn};

use super::{read_value, set_field_state};
use crate::page::CheckoutPage;
use crate::surface::PageSurface;

impl<S: PageSurface> CheckoutPage<S> {
    /// Validates every field and, if all pass, confirms the purchase.
    ///
    /// Name and email feedback is always refreshed. A bad quantity is
    /// reported through [`CheckoutPage::calculate_total`] so the total and
    /// contact section follow it.
    pub fn complete_purchase(&mut self) -> Option<PurchaseConfirmation> {
        let quantity = read_value(&self.surface, self.elements.tickets.as_deref());
        let name = read_value(&self.surface, self.elements.name.as_deref());
        let email = read_value(&self.surface, self.elements.email.as_deref());

        let form = PurchaseForm {
            quantity: &quantity,
            name: &name,
            email: &email,
        };

        match review_purchase(&form, self.unit_price) {
            Ok(confirmation) => {
                self.show_contact_verdicts(None, None);
                let was_running = self.countdown.cancel();

                info!(
                    session = %self.session.id,
                    quantity = %confirmation.quote.quantity,
                    total = %confirmation.quote.total,
                    remaining_secs = self.countdown.remaining(),
                    was_running,
                    completed_at = %Utc::now(),
                    "Purchase completed"
                );

                self.surface.alert(&confirmation.message());
                Some(confirmation)
            }
            Err(rejection) => {
                self.show_contact_verdicts(rejection.name.as_ref(), rejection.email.as_ref());
                if rejection.quantity.is_some() {
                    self.calculate_total();
                }

                let reasons: Vec<_> = rejection.errors().map(ValidationError::reason).collect();
                warn!(session = %self.session.id, %rejection, ?reasons, "Purchase rejected");
                None
            }
        }
    }

    fn show_contact_verdicts(
        &mut self,
        name: Option<&ValidationError>,
        email: Option<&ValidationError>,
    ) {
        set_field_state(
            &mut self.surface,
            self.elements.name.as_deref(),
            self.elements.name_error.as_deref(),
            name,
        );
        set_field_state(
            &mut self.surface,
            self.elements.email.as_deref(),
            self.elements.email_error.as_deref(),
            email,
        );
    }
}
