//! # Element Bindings
//!
//! Maps each logical element of the purchase page to one fixed element id.
//! Bindings are resolved against the page once, when the page is built;
//! from then on a missing element is simply `None` and the feature that
//! needs it is skipped.
//!
//! ```text
//! PageBindings (config)            Elements (resolved)
//! ─────────────────────            ───────────────────
//! timer        = "timer"     ──►   Some("timer")
//! tickets      = "tickets"   ──►   Some("tickets")
//! calc_button  = "calcBtn"   ──►   None   (page has no calc button)
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::surface::PageSurface;

/// Element ids for every logical element of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBindings {
    /// `M:SS` countdown display.
    pub timer: String,
    /// Ticket quantity input.
    pub tickets: String,
    pub tickets_error: String,
    /// Formatted total display.
    pub total: String,
    /// Section wrapping the name and email inputs.
    pub contact: String,
    pub name: String,
    pub name_error: String,
    pub email: String,
    pub email_error: String,
    pub calc_button: String,
    pub buy_button: String,
}

impl Default for PageBindings {
    fn default() -> Self {
        PageBindings {
            timer: "timer".to_string(),
            tickets: "tickets".to_string(),
            tickets_error: "ticketsError".to_string(),
            total: "total".to_string(),
            contact: "contactInfo".to_string(),
            name: "name".to_string(),
            name_error: "nameError".to_string(),
            email: "email".to_string(),
            email_error: "emailError".to_string(),
            calc_button: "calcBtn".to_string(),
            buy_button: "buyBtn".to_string(),
        }
    }
}

impl PageBindings {
    /// `(logical name, element id)` pairs.
    pub fn entries(&self) -> [(&'static str, &str); 11] {
        [
            ("timer", self.timer.as_str()),
            ("tickets", self.tickets.as_str()),
            ("tickets_error", self.tickets_error.as_str()),
            ("total", self.total.as_str()),
            ("contact", self.contact.as_str()),
            ("name", self.name.as_str()),
            ("name_error", self.name_error.as_str()),
            ("email", self.email.as_str()),
            ("email_error", self.email_error.as_str()),
            ("calc_button", self.calc_button.as_str()),
            ("buy_button", self.buy_button.as_str()),
        ]
    }

    /// Every id must be non-blank and bound to one logical element only.
    pub fn validate(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        for (logical, id) in self.entries() {
            if id.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!(
                    "binding '{logical}' has an empty element id"
                )));
            }
            if !seen.insert(id) {
                return Err(AppError::InvalidConfig(format!(
                    "element id '{id}' is bound more than once (at '{logical}')"
                )));
            }
        }
        Ok(())
    }

    /// Looks every binding up on the page.
    pub fn resolve<S: PageSurface>(&self, surface: &S) -> Elements {
        let find = |id: &str| surface.contains(id).then(|| id.to_string());
        Elements {
            timer: find(&self.timer),
            tickets: find(&self.tickets),
            tickets_error: find(&self.tickets_error),
            total: find(&self.total),
            contact: find(&self.contact),
            name: find(&self.name),
            name_error: find(&self.name_error),
            email: find(&self.email),
            email_error: find(&self.email_error),
            calc_button: find(&self.calc_button),
            buy_button: find(&self.buy_button),
        }
    }
}

/// Bindings after resolution: `None` where the page lacks the element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Elements {
    pub timer: Option<String>,
    pub tickets: Option<String>,
    pub tickets_error: Option<String>,
    pub total: Option<String>,
    pub contact: Option<String>,
    pub name: Option<String>,
    pub name_error: Option<String>,
    pub email: Option<String>,
    pub email_error: Option<String>,
    pub calc_button: Option<String>,
    pub buy_button: Option<String>,
}

impl Elements {
    /// Logical names that did not resolve.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("timer", &self.timer),
            ("tickets", &self.tickets),
            ("tickets_error", &self.tickets_error),
            ("total", &self.total),
            ("contact", &self.contact),
            ("name", &self.name),
            ("name_error", &self.name_error),
            ("email", &self.email),
            ("email_error", &self.email_error),
            ("calc_button", &self.calc_button),
            ("buy_button", &self.buy_button),
        ]
        .into_iter()
        .filter(|(_, id)| id.is_none())
        .map(|(logical, _)| logical)
        .collect()
    }

    /// True when `id` is the resolved id in `slot`.
    pub fn is(slot: &Option<String>, id: &str) -> bool {
        slot.as_deref() == Some(id)
    }
}
