//! # Checkout Page
//!
//! The purchase page controller. Owns the surface, the resolved element
//! bindings, the session countdown and the ticket price, and routes page
//! events to the commands in [`crate::commands`].
//!
//! ## Page Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Page Lifecycle                              │
//! │                                                                         │
//! │   new() ──► mount()                                                     │
//! │              • timer shows "10:00"                                      │
//! │              • contact section hidden                                   │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │   ┌─────────────────────────┐  input/blur tickets, click calc          │
//! │   │        Counting         │ ─────────────────► calculate_total        │
//! │   │  (countdown running)    │  click buy                               │
//! │   │                         │ ─────────────────► complete_purchase      │
//! │   └──────┬───────────┬──────┘                        │ valid            │
//! │          │ tick == 0 │                               ▼                  │
//! │          ▼           │                    ┌──────────────────────┐      │
//! │   alert "expired"    │                    │  Purchased           │      │
//! │   reload() ──────────┘ (new session,      │  (countdown halted)  │      │
//! │                         full countdown)   └──────────────────────┘      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Event Routing
//! Events name the element they happened on. An event only does something
//! when that id is the resolved id of the matching binding, so events on
//! elements the page lacks are inert.

use booth_core::{Countdown, Money};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::AppResult;
use crate::events::PageEvent;
use crate::state::{AppConfig, Elements};
use crate::surface::PageSurface;

/// Identity of one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInfo {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl SessionInfo {
    pub fn new() -> Self {
        SessionInfo {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Close,
}

/// The purchase page.
pub struct CheckoutPage<S: PageSurface> {
    pub(crate) surface: S,
    pub(crate) elements: Elements,
    pub(crate) countdown: Countdown,
    pub(crate) unit_price: Money,
    pub(crate) session: SessionInfo,
}

impl<S: PageSurface> CheckoutPage<S> {
    /// Builds and mounts the page. The countdown starts immediately.
    pub fn new(config: &AppConfig, surface: S) -> AppResult<Self> {
        config.validate()?;

        let elements = config.bindings.resolve(&surface);
        let missing = elements.missing();
        if !missing.is_empty() {
            warn!(?missing, "Page is missing elements; their features are disabled");
        }

        let mut page = CheckoutPage {
            surface,
            elements,
            countdown: Countdown::start(config.session.duration_secs)?,
            unit_price: config.unit_price(),
            session: SessionInfo::new(),
        };
        page.mount();
        Ok(page)
    }

    /// Initial page state: full clock shown, contact section hidden.
    fn mount(&mut self) {
        self.render_time();
        crate::commands::set_visible(&mut self.surface, self.elements.contact.as_deref(), false);

        info!(
            session = %self.session.id,
            started_at = %self.session.started_at,
            duration_secs = self.countdown.duration(),
            unit_price = %self.unit_price,
            "Checkout session started"
        );
    }

    /// Navigates back to the same page: fresh markup, fresh session, full
    /// countdown.
    pub fn reload(&mut self) {
        let previous = self.session.id;
        self.surface.reload();
        self.countdown.restart();
        self.session = SessionInfo::new();
        debug!(%previous, session = %self.session.id, "Page reloaded");
        self.mount();
    }

    /// Dispatches one page event.
    pub fn handle(&mut self, event: PageEvent) -> Control {
        match event {
            PageEvent::Input { element, value } => {
                self.surface.set_value(&element, &value);
                if Elements::is(&self.elements.tickets, &element) {
                    self.calculate_total();
                }
            }
            PageEvent::Blur { element } => {
                if Elements::is(&self.elements.tickets, &element) {
                    self.calculate_total();
                }
            }
            PageEvent::Click { element } => {
                if Elements::is(&self.elements.calc_button, &element) {
                    self.calculate_total();
                } else if Elements::is(&self.elements.buy_button, &element) {
                    self.complete_purchase();
                } else {
                    debug!(%element, "Click on element with no handler");
                }
            }
            PageEvent::Show => self.surface.present(),
            PageEvent::Close => return Control::Close,
        }
        Control::Continue
    }

    /// Whether the event loop should keep delivering ticks.
    pub fn is_counting_down(&self) -> bool {
        self.countdown.is_running()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn session(&self) -> &SessionInfo {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Document, ERROR_BACKGROUND};
    use booth_core::TickOutcome;

    fn page() -> CheckoutPage<Document> {
        let config = AppConfig::default();
        CheckoutPage::new(&config, Document::new(config.page_elements())).unwrap()
    }

    fn page_with(ids: &[&str]) -> CheckoutPage<Document> {
        CheckoutPage::new(&AppConfig::default(), Document::new(ids.iter().copied())).unwrap()
    }

    fn input(page: &mut CheckoutPage<Document>, element: &str, value: &str) {
        page.handle(PageEvent::Input {
            element: element.to_string(),
            value: value.to_string(),
        });
    }

    fn click(page: &mut CheckoutPage<Document>, element: &str) {
        page.handle(PageEvent::Click {
            element: element.to_string(),
        });
    }

    fn text(page: &CheckoutPage<Document>, id: &str) -> String {
        page.surface().element(id).unwrap().text.clone()
    }

    fn hidden(page: &CheckoutPage<Document>, id: &str) -> bool {
        page.surface().element(id).unwrap().hidden
    }

    #[test]
    fn test_mount_shows_full_clock_and_hides_contact() {
        let page = page();
        assert_eq!(text(&page, "timer"), "10:00");
        assert!(hidden(&page, "contactInfo"));
        assert!(page.is_counting_down());
    }

    #[test]
    fn test_valid_quantity_shows_total_and_contact() {
        let mut page = page();
        input(&mut page, "tickets", "2");

        assert_eq!(text(&page, "total"), "$50.00");
        assert_eq!(text(&page, "ticketsError"), "");
        assert!(!hidden(&page, "contactInfo"));
        assert!(!page.surface().element("tickets").unwrap().aria_invalid);
    }

    #[test]
    fn test_invalid_quantity_resets_total_and_hides_contact() {
        let mut page = page();
        input(&mut page, "tickets", "3");
        assert_eq!(text(&page, "total"), "$75.00");

        for raw in ["4", "0", "abc", "", "1.5"] {
            input(&mut page, "tickets", raw);
            assert_eq!(text(&page, "total"), "$0.00", "input {raw:?}");
            assert_eq!(text(&page, "ticketsError"), "Enter a number between 1 and 3.");
            assert!(hidden(&page, "contactInfo"));

            let tickets = page.surface().element("tickets").unwrap();
            assert!(tickets.aria_invalid);
            assert_eq!(tickets.background.as_deref(), Some(ERROR_BACKGROUND));
        }
    }

    #[test]
    fn test_blur_and_calc_button_recalculate() {
        let mut page = page();
        page.surface.set_value("tickets", " 1 ");
        page.handle(PageEvent::Blur {
            element: "tickets".to_string(),
        });
        assert_eq!(text(&page, "total"), "$25.00");

        page.surface.set_value("tickets", "3");
        click(&mut page, "calcBtn");
        assert_eq!(text(&page, "total"), "$75.00");
    }

    #[test]
    fn test_typing_in_name_does_not_recalculate() {
        let mut page = page();
        input(&mut page, "name", "Ada");
        assert_eq!(text(&page, "total"), "");
        assert_eq!(page.surface().value("name").as_deref(), Some("Ada"));
    }

    #[test]
    fn test_successful_purchase_alerts_and_stops_countdown() {
        let mut page = page();
        input(&mut page, "tickets", "2");
        input(&mut page, "name", "  Ada  ");
        input(&mut page, "email", "ada@example.com");
        click(&mut page, "buyBtn");

        assert_eq!(
            page.surface().alerts(),
            ["Thank you for your purchase of 2 ticket(s) totaling $50.00!"]
        );
        assert!(!page.is_counting_down());
        assert_eq!(page.tick(), TickOutcome::Halted);
        assert_eq!(text(&page, "nameError"), "");
    }

    #[test]
    fn test_rejected_purchase_marks_every_bad_field() {
        let mut page = page();
        input(&mut page, "tickets", "2");
        input(&mut page, "name", "   ");
        input(&mut page, "email", "not-an-email");
        click(&mut page, "buyBtn");

        assert!(page.surface().alerts().is_empty());
        assert!(page.is_counting_down());
        assert_eq!(text(&page, "nameError"), "Please enter your name.");
        assert_eq!(text(&page, "emailError"), "Please enter a valid email address.");
        assert!(page.surface().element("name").unwrap().aria_invalid);
        assert!(page.surface().element("email").unwrap().aria_invalid);
        assert_eq!(text(&page, "total"), "$50.00");
    }

    #[test]
    fn test_purchase_rechecks_changed_quantity() {
        let mut page = page();
        input(&mut page, "tickets", "2");
        input(&mut page, "name", "Ada");
        input(&mut page, "email", "ada@example.com");
        // Changed without an input event reaching the page.
        page.surface.set_value("tickets", "7");
        click(&mut page, "buyBtn");

        assert!(page.surface().alerts().is_empty());
        assert!(page.is_counting_down());
        assert_eq!(text(&page, "total"), "$0.00");
        assert!(hidden(&page, "contactInfo"));
        assert_eq!(text(&page, "nameError"), "");
    }

    #[test]
    fn test_repeat_purchase_confirms_again() {
        let mut page = page();
        input(&mut page, "tickets", "1");
        input(&mut page, "name", "Ada");
        input(&mut page, "email", "ada@example.com");
        click(&mut page, "buyBtn");
        click(&mut page, "buyBtn");

        assert_eq!(page.surface().alerts().len(), 2);
        assert!(!page.is_counting_down());
    }

    #[test]
    fn test_expiry_alerts_then_reloads() {
        let mut page = page();
        input(&mut page, "tickets", "2");
        let first_session = page.session().id;

        for _ in 0..599 {
            assert!(matches!(page.tick(), TickOutcome::Running(_)));
        }
        assert_eq!(text(&page, "timer"), "0:01");
        assert_eq!(page.tick(), TickOutcome::Expired);

        assert_eq!(page.surface().alerts(), ["Your session timer has expired."]);
        assert_eq!(page.surface().reloads(), 1);
        assert_ne!(page.session().id, first_session);
        assert_eq!(text(&page, "timer"), "10:00");
        assert_eq!(text(&page, "total"), "");
        assert!(hidden(&page, "contactInfo"));
        assert!(page.is_counting_down());
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        let mut page = page_with(&["tickets", "total", "buyBtn"]);
        input(&mut page, "tickets", "2");
        assert_eq!(text(&page, "total"), "$50.00");

        // No name or email inputs: contact validation fails, nothing panics.
        click(&mut page, "buyBtn");
        assert!(page.surface().alerts().is_empty());

        assert_eq!(page.tick(), TickOutcome::Running(599));
        click(&mut page, "calcBtn");
        assert_eq!(text(&page, "total"), "$50.00");
    }

    #[test]
    fn test_page_without_tickets_input_reports_not_a_number() {
        let mut page = page_with(&["total", "name", "email", "buyBtn", "ticketsError"]);
        input(&mut page, "name", "Ada");
        input(&mut page, "email", "ada@example.com");
        click(&mut page, "buyBtn");

        assert!(page.surface().alerts().is_empty());
        assert_eq!(text(&page, "total"), "$0.00");
        // Error text belongs to the input; with no input it stays untouched.
        assert_eq!(text(&page, "ticketsError"), "");
    }

    #[test]
    fn test_close_event() {
        let mut page = page();
        assert_eq!(page.handle(PageEvent::Show), Control::Continue);
        assert_eq!(page.handle(PageEvent::Close), Control::Close);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AppConfig::default();
        config.session.duration_secs = 0;
        assert!(CheckoutPage::new(&config, Document::new(["timer"])).is_err());
    }
}
