//! # Page Commands Module
//!
//! Everything the purchase page can do in response to an event.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (field helpers)
//! ├── tickets.rs   ◄─── calculate_total
//! ├── purchase.rs  ◄─── complete_purchase
//! └── timer.rs     ◄─── render_time, tick
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Page Command Flow                                    │
//! │                                                                         │
//! │  PageEvent::Input { element: "tickets", value: "2" }                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CheckoutPage::handle ──► calculate_total()                             │
//! │         │                    │                                          │
//! │         │                    ├── read_value(tickets)                    │
//! │         │                    ├── booth_core::quote_tickets(raw, price)  │
//! │         │                    └── set_field_state / set_text / visible   │
//! │         ▼                                                               │
//! │  PageSurface now shows: total "$50.00", contact section visible        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command is an `impl` block on [`crate::page::CheckoutPage`]. The
//! helpers below take resolved element ids as `Option<&str>` and do nothing
//! for `None`.

pub mod purchase;
pub mod tickets;
pub mod timer;

use booth_core::ValidationError;

use crate::surface::PageSurface;

/// Reads an input's value; a missing input reads as empty.
pub(crate) fn read_value<S: PageSurface>(surface: &S, input: Option<&str>) -> String {
    input
        .and_then(|id| surface.value(id))
        .unwrap_or_default()
}

/// Applies a verdict to an input and its error holder.
///
/// Without the input nothing changes, including the error holder.
pub(crate) fn set_field_state<S: PageSurface>(
    surface: &mut S,
    input: Option<&str>,
    error: Option<&str>,
    verdict: Option<&ValidationError>,
) {
    let Some(input) = input else {
        return;
    };

    surface.set_invalid(input, verdict.is_some());
    if let Some(error) = error {
        let message = verdict.map(ToString::to_string).unwrap_or_default();
        surface.set_text(error, &message);
    }
}

pub(crate) fn set_text<S: PageSurface>(surface: &mut S, id: Option<&str>, text: &str) {
    if let Some(id) = id {
        surface.set_text(id, text);
    }
}

pub(crate) fn set_visible<S: PageSurface>(surface: &mut S, id: Option<&str>, visible: bool) {
    if let Some(id) = id {
        surface.set_visible(id, visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;

    #[test]
    fn test_field_state_without_input_leaves_error_alone() {
        let mut doc = Document::new(["nameError"]);
        doc.set_text("nameError", "old");
        set_field_state(
            &mut doc,
            None,
            Some("nameError"),
            Some(&ValidationError::NameRequired),
        );
        assert_eq!(doc.element("nameError").unwrap().text, "old");
    }

    #[test]
    fn test_field_state_sets_and_clears() {
        let mut doc = Document::new(["name", "nameError"]);
        let verdict = ValidationError::NameRequired;

        set_field_state(&mut doc, Some("name"), Some("nameError"), Some(&verdict));
        assert!(doc.element("name").unwrap().aria_invalid);
        assert_eq!(doc.element("nameError").unwrap().text, "Please enter your name.");

        set_field_state(&mut doc, Some("name"), Some("nameError"), None);
        assert!(!doc.element("name").unwrap().aria_invalid);
        assert_eq!(doc.element("nameError").unwrap().text, "");
    }

    #[test]
    fn test_read_value_of_missing_input_is_empty() {
        let doc = Document::new(["tickets"]);
        assert_eq!(read_value(&doc, None), "");
        assert_eq!(read_value(&doc, Some("other")), "");
    }
}
