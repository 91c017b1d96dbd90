//! # Page Surface
//!
//! The UI the checkout page writes to, addressed by element id.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PageSurface (trait)                                                    │
//! │    contains / value / set_value      ◄── reading and typing            │
//! │    set_text / set_invalid / set_visible ◄── feedback                   │
//! │    alert / reload / present           ◄── dialogs and navigation       │
//! │                                                                         │
//! │  Document          in-memory page: elements, alert log, reload count   │
//! │  TerminalSurface   Document + alerts and snapshots printed to a writer │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes to an id the page does not contain are ignored.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use tracing::{debug, warn};

/// Background applied to inputs holding an invalid value.
pub const ERROR_BACKGROUND: &str = "#ffe4e6";

/// The page as seen by the checkout controller.
pub trait PageSurface {
    /// Whether the page has an element with this id.
    fn contains(&self, id: &str) -> bool;

    /// Current value of an input, `None` if the element is missing.
    fn value(&self, id: &str) -> Option<String>;

    /// Replaces an input's value (the user typing).
    fn set_value(&mut self, id: &str, value: &str);

    fn set_text(&mut self, id: &str, text: &str);

    /// Toggles the error style and `aria-invalid` on an input.
    fn set_invalid(&mut self, id: &str, invalid: bool);

    fn set_visible(&mut self, id: &str, visible: bool);

    /// Shows a blocking dialog.
    fn alert(&mut self, message: &str);

    /// Reloads the page, returning every element to its initial state.
    fn reload(&mut self);

    /// Shows the current page state to the user.
    fn present(&mut self) {}
}

// =============================================================================
// Document
// =============================================================================

/// State of one element on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub value: String,
    pub text: String,
    pub hidden: bool,
    pub aria_invalid: bool,
    pub background: Option<String>,
}

/// In-memory page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(skip)]
    markup: Vec<String>,
    elements: BTreeMap<String, Element>,
    alerts: Vec<String>,
    reloads: u32,
}

impl Document {
    /// Builds a page containing the given element ids.
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let markup: Vec<String> = ids.into_iter().map(Into::into).collect();
        let elements = Self::fresh(&markup);
        Document {
            markup,
            elements,
            alerts: Vec::new(),
            reloads: 0,
        }
    }

    fn fresh(markup: &[String]) -> BTreeMap<String, Element> {
        markup
            .iter()
            .map(|id| (id.clone(), Element::default()))
            .collect()
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Every dialog shown so far, oldest first. Survives reloads.
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn reloads(&self) -> u32 {
        self.reloads
    }

    fn with_element(&mut self, id: &str, f: impl FnOnce(&mut Element)) {
        match self.elements.get_mut(id) {
            Some(element) => f(element),
            None => debug!(id, "write to missing element ignored"),
        }
    }
}

impl PageSurface for Document {
    fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.elements.get(id).map(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) {
        self.with_element(id, |e| e.value = value.to_string());
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.with_element(id, |e| e.text = text.to_string());
    }

    fn set_invalid(&mut self, id: &str, invalid: bool) {
        self.with_element(id, |e| {
            e.aria_invalid = invalid;
            e.background = invalid.then(|| ERROR_BACKGROUND.to_string());
        });
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        self.with_element(id, |e| e.hidden = !visible);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn reload(&mut self) {
        self.elements = Self::fresh(&self.markup);
        self.reloads += 1;
    }
}

// =============================================================================
// Terminal Surface
// =============================================================================

/// A [`Document`] that also prints dialogs and snapshots.
#[derive(Debug)]
pub struct TerminalSurface<W: Write = io::Stdout> {
    document: Document,
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout(document: Document) -> Self {
        TerminalSurface::new(document, io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(document: Document, out: W) -> Self {
        TerminalSurface { document, out }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_parts(self) -> (Document, W) {
        (self.document, self.out)
    }

    fn print(&mut self, line: &str) {
        if let Err(err) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(%err, "failed to write to terminal");
        }
    }
}

impl<W: Write> PageSurface for TerminalSurface<W> {
    fn contains(&self, id: &str) -> bool {
        self.document.contains(id)
    }

    fn value(&self, id: &str) -> Option<String> {
        self.document.value(id)
    }

    fn set_value(&mut self, id: &str, value: &str) {
        self.document.set_value(id, value);
    }

    fn set_text(&mut self, id: &str, text: &str) {
        self.document.set_text(id, text);
    }

    fn set_invalid(&mut self, id: &str, invalid: bool) {
        self.document.set_invalid(id, invalid);
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        self.document.set_visible(id, visible);
    }

    fn alert(&mut self, message: &str) {
        self.document.alert(message);
        self.print(&format!("[alert] {message}"));
    }

    fn reload(&mut self) {
        self.document.reload();
        self.print("[reload]");
    }

    fn present(&mut self) {
        match serde_json::to_string_pretty(&self.document) {
            Ok(json) => self.print(&json),
            Err(err) => warn!(%err, "failed to render page snapshot"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
