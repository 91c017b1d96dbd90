//! # Page Events
//!
//! What can happen on the page, and the terminal syntax for it.
//!
//! ## Terminal Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Line                          Event                                    │
//! │  ────                          ─────                                    │
//! │  input tickets 2               Input { element: "tickets", value: "2" } │
//! │  input name  Ada Lovelace      value keeps everything after one space  │
//! │  input email                   Input { value: "" } (field cleared)     │
//! │  blur tickets                  Blur { element: "tickets" }             │
//! │  click buyBtn                  Click { element: "buyBtn" }             │
//! │  show                          Show  (print page snapshot as JSON)     │
//! │  quit | close                  Close                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unparseable lines are logged and skipped; they never reach the page.

use std::str::FromStr;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// A user interaction with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The user changed an input's value.
    Input { element: String, value: String },
    /// An input lost focus.
    Blur { element: String },
    Click { element: String },
    /// Show the current page state.
    Show,
    /// Leave the page.
    Close,
}

impl FromStr for PageEvent {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, rest) = split_token(line);
        let (element, rest) = split_token(rest);
        let unknown = || AppError::UnknownCommand(line.trim().to_string());

        match (command, element) {
            ("input", element) if !element.is_empty() => {
                // The value starts after exactly one separator.
                let value = rest
                    .strip_prefix(|c: char| c.is_whitespace())
                    .unwrap_or(rest);
                Ok(PageEvent::Input {
                    element: element.to_string(),
                    value: value.to_string(),
                })
            }
            ("blur", element) if !element.is_empty() && rest.trim().is_empty() => {
                Ok(PageEvent::Blur {
                    element: element.to_string(),
                })
            }
            ("click", element) if !element.is_empty() && rest.trim().is_empty() => {
                Ok(PageEvent::Click {
                    element: element.to_string(),
                })
            }
            ("show", "") => Ok(PageEvent::Show),
            ("quit" | "close", "") => Ok(PageEvent::Close),
            _ => Err(unknown()),
        }
    }
}

/// Splits off the first whitespace-delimited token; the remainder keeps its
/// leading whitespace.
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => s.split_at(end),
        None => (s, ""),
    }
}

/// Parses lines from `reader` into events until EOF or a close event.
///
/// Returns once the reader is exhausted, the page closes, or the receiving
/// side is gone.
pub async fn forward_lines<R>(reader: R, events: mpsc::Sender<PageEvent>) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let event = match line.parse::<PageEvent>() {
            Ok(event) => event,
            Err(e) => {
                warn!(error = %e, "Skipping terminal line");
                continue;
            }
        };

        let closing = event == PageEvent::Close;
        if events.send(event).await.is_err() {
            debug!("Page gone, terminal reader stopping");
            break;
        }
        if closing {
            break;
        }
    }

    Ok(())
}
