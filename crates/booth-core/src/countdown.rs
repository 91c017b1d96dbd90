//! # Countdown Module
//!
//! The session countdown as an owned state machine. It never sleeps or
//! schedules anything itself: the host calls [`Countdown::tick`] once per
//! period and renders [`Countdown::display`].
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   start(600)                                                            │
//! │      │                                                                  │
//! │      ▼           tick: n-1 > 0                                          │
//! │  ┌──────────────────┐ ───────────┐                                      │
//! │  │ Running { n }    │ ◄──────────┘                                      │
//! │  └──────────────────┘                                                   │
//! │      │          │                                                       │
//! │      │ cancel() │ tick: n-1 == 0                                        │
//! │      ▼          ▼                                                       │
//! │  ┌──────────┐ ┌─────────┐                                               │
//! │  │Cancelled │ │ Expired │   (terminal: further ticks are Halted)        │
//! │  └──────────┘ └─────────┘                                               │
//! │                                                                         │
//! │   restart() returns either terminal state to Running { duration }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// State
// =============================================================================

/// Where the countdown currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", rename_all = "camelCase")]
#[ts(export)]
pub enum CountdownState {
    /// Counting down; `remaining` is always above zero.
    Running { remaining: u32 },

    /// Reached zero. Expiry has been reported.
    Expired,

    /// Stopped from outside (purchase completed) with time left.
    Cancelled { remaining: u32 },
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running with this many seconds left.
    Running(u32),

    /// This tick reached zero. Reported exactly once per run.
    Expired,

    /// The countdown was already expired or cancelled; nothing changed.
    Halted,
}

// =============================================================================
// Countdown
// =============================================================================

/// Session countdown controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    state: CountdownState,
}

impl Countdown {
    /// Starts a countdown of `duration_secs` seconds.
    ///
    /// ## Errors
    /// `CoreError::InvalidDuration` for a zero duration, which could never
    /// be in the running state.
    ///
    /// ```rust
    /// use booth_core::countdown::Countdown;
    ///
    /// let countdown = Countdown::start(600).unwrap();
    /// assert_eq!(countdown.display(), "10:00");
    /// assert!(Countdown::start(0).is_err());
    /// ```
    pub fn start(duration_secs: u32) -> CoreResult<Self> {
        if duration_secs == 0 {
            return Err(CoreError::InvalidDuration {
                secs: duration_secs,
            });
        }

        Ok(Countdown {
            duration: duration_secs,
            state: CountdownState::Running {
                remaining: duration_secs,
            },
        })
    }

    /// Advances the countdown by one period.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            CountdownState::Running { remaining } => {
                let next = remaining - 1;
                if next > 0 {
                    self.state = CountdownState::Running { remaining: next };
                    TickOutcome::Running(next)
                } else {
                    self.state = CountdownState::Expired;
                    TickOutcome::Expired
                }
            }
            CountdownState::Expired | CountdownState::Cancelled { .. } => TickOutcome::Halted,
        }
    }

    /// Stops a running countdown without expiring it.
    ///
    /// Returns `true` if the countdown was running.
    pub fn cancel(&mut self) -> bool {
        match self.state {
            CountdownState::Running { remaining } => {
                self.state = CountdownState::Cancelled { remaining };
                true
            }
            CountdownState::Expired | CountdownState::Cancelled { .. } => false,
        }
    }

    /// Puts the countdown back to its full duration.
    pub fn restart(&mut self) {
        self.state = CountdownState::Running {
            remaining: self.duration,
        };
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Seconds left (zero once expired).
    pub fn remaining(&self) -> u32 {
        match self.state {
            CountdownState::Running { remaining } | CountdownState::Cancelled { remaining } => {
                remaining
            }
            CountdownState::Expired => 0,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountdownState::Running { .. })
    }

    /// The remaining time as `M:SS`.
    pub fn display(&self) -> String {
        format_clock(self.remaining())
    }
}

/// Formats seconds as `M:SS`: minutes unpadded, seconds zero-padded.
///
/// ```rust
/// use booth_core::countdown::format_clock;
///
/// assert_eq!(format_clock(600), "10:00");
/// assert_eq!(format_clock(599), "9:59");
/// assert_eq!(format_clock(65), "1:05");
/// assert_eq!(format_clock(0), "0:00");
/// ```
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_renders_9_59() {
        let mut countdown = Countdown::start(600).unwrap();
        assert_eq!(countdown.tick(), TickOutcome::Running(599));
        assert_eq!(countdown.display(), "9:59");
    }

    #[test]
    fn test_expires_after_exactly_duration_ticks() {
        let mut countdown = Countdown::start(600).unwrap();
        let mut expiries = 0;

        for tick in 1..=600 {
            match countdown.tick() {
                TickOutcome::Running(remaining) => assert_eq!(remaining, 600 - tick),
                TickOutcome::Expired => {
                    assert_eq!(tick, 600);
                    expiries += 1;
                }
                TickOutcome::Halted => panic!("halted while running at tick {tick}"),
            }
        }

        assert_eq!(expiries, 1);
        assert_eq!(countdown.state(), CountdownState::Expired);
        assert_eq!(countdown.remaining(), 0);
        assert_eq!(countdown.display(), "0:00");
    }

    #[test]
    fn test_expired_is_terminal() {
        let mut countdown = Countdown::start(1).unwrap();
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(countdown.tick(), TickOutcome::Halted);
        assert_eq!(countdown.tick(), TickOutcome::Halted);
        assert!(!countdown.cancel());
        assert_eq!(countdown.state(), CountdownState::Expired);
    }

    #[test]
    fn test_cancel_stops_without_expiry() {
        let mut countdown = Countdown::start(600).unwrap();
        countdown.tick();
        assert!(countdown.cancel());
        assert_eq!(countdown.state(), CountdownState::Cancelled { remaining: 599 });
        assert_eq!(countdown.tick(), TickOutcome::Halted);
        assert_eq!(countdown.remaining(), 599);
        assert!(!countdown.cancel());
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_restart_after_expiry() {
        let mut countdown = Countdown::start(2).unwrap();
        countdown.tick();
        countdown.tick();
        countdown.restart();
        assert_eq!(countdown.state(), CountdownState::Running { remaining: 2 });
        assert_eq!(countdown.duration(), 2);
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert!(matches!(
            Countdown::start(0),
            Err(CoreError::InvalidDuration { secs: 0 })
        ));
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&CountdownState::Running { remaining: 5 }).unwrap();
        assert_eq!(json, r#"{"state":"running","remaining":5}"#);
    }
}
