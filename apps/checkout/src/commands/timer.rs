//! # Timer Commands
//!
//! The session countdown as seen on the page. The event loop calls
//! [`CheckoutPage::tick`] once per period while the countdown runs.
//!
//! ```text
//!   10:00 ─► 9:59 ─► ... ─► 0:01 ─► 0:00 ─► alert "expired" ─► reload ─► 10:00
//!                                     ▲
//!                            exactly once per session
//! ```

use booth_core::TickOutcome;
use tracing::{info, trace};

use super::set_text;
use crate::page::CheckoutPage;
use crate::surface::PageSurface;

/// Dialog shown when the session runs out.
pub const EXPIRED_MESSAGE: &str = "Your session timer has expired.";

impl<S: PageSurface> CheckoutPage<S> {
    /// Writes the remaining time to the timer element as `M:SS`.
    pub fn render_time(&mut self) {
        let display = self.countdown.display();
        set_text(&mut self.surface, self.elements.timer.as_deref(), &display);
    }

    /// Advances the countdown one second.
    ///
    /// On expiry the final `0:00` is rendered, the expiry dialog shown and
    /// the page reloaded, in that order.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick();
        match outcome {
            TickOutcome::Running(remaining) => {
                self.render_time();
                trace!(remaining, "Countdown tick");
            }
            TickOutcome::Expired => {
                self.render_time();
                info!(session = %self.session.id, "Session expired");
                self.surface.alert(EXPIRED_MESSAGE);
                self.reload();
            }
            TickOutcome::Halted => {}
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use crate::surface::Document;

    /// Document that also records the order of visible writes.
    struct Recorder {
        doc: Document,
        log: Vec<String>,
    }

    impl PageSurface for Recorder {
        fn contains(&self, id: &str) -> bool {
            self.doc.contains(id)
        }

        fn value(&self, id: &str) -> Option<String> {
            self.doc.value(id)
        }

        fn set_value(&mut self, id: &str, value: &str) {
            self.doc.set_value(id, value);
        }

        fn set_text(&mut self, id: &str, text: &str) {
            self.log.push(format!("{id}={text}"));
            self.doc.set_text(id, text);
        }

        fn set_invalid(&mut self, id: &str, invalid: bool) {
            self.doc.set_invalid(id, invalid);
        }

        fn set_visible(&mut self, id: &str, visible: bool) {
            self.doc.set_visible(id, visible);
        }

        fn alert(&mut self, message: &str) {
            self.log.push(format!("alert:{message}"));
            self.doc.alert(message);
        }

        fn reload(&mut self) {
            self.log.push("reload".to_string());
            self.doc.reload();
        }
    }

    #[test]
    fn test_tick_renders_padded_clock() {
        let config = AppConfig::default();
        let mut page = CheckoutPage::new(&config, Document::new(config.page_elements())).unwrap();

        assert_eq!(page.tick(), TickOutcome::Running(599));
        assert_eq!(page.surface().element("timer").unwrap().text, "9:59");

        for _ in 0..535 {
            page.tick();
        }
        assert_eq!(page.surface().element("timer").unwrap().text, "1:04");
    }

    #[test]
    fn test_short_session_expires_once() {
        let mut config = AppConfig::default();
        config.session.duration_secs = 2;
        let mut page = CheckoutPage::new(&config, Document::new(config.page_elements())).unwrap();

        assert_eq!(page.tick(), TickOutcome::Running(1));
        assert_eq!(page.tick(), TickOutcome::Expired);
        assert_eq!(page.surface().alerts(), [EXPIRED_MESSAGE]);
        assert_eq!(page.surface().element("timer").unwrap().text, "0:02");
    }

    #[test]
    fn test_cancelled_countdown_leaves_display_frozen() {
        let config = AppConfig::default();
        let mut page = CheckoutPage::new(&config, Document::new(config.page_elements())).unwrap();
        page.tick();
        page.countdown.cancel();

        assert_eq!(page.tick(), TickOutcome::Halted);
        assert_eq!(page.surface().element("timer").unwrap().text, "9:59");
    }

    #[test]
    fn test_expiry_renders_zero_then_alerts_then_reloads() {
        let mut config = AppConfig::default();
        config.session.duration_secs = 2;
        let surface = Recorder {
            doc: Document::new(config.page_elements()),
            log: Vec::new(),
        };
        let mut page = CheckoutPage::new(&config, surface).unwrap();

        page.tick();
        assert_eq!(page.tick(), TickOutcome::Expired);

        assert_eq!(
            page.surface().log,
            [
                "timer=0:02",
                "timer=0:01",
                "timer=0:00",
                "alert:Your session timer has expired.",
                "reload",
                "timer=0:02",
            ]
        );
    }
}
