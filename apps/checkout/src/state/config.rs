//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`TICKETBOOTH_*`)
//! 2. Config file (`TICKETBOOTH_CONFIG`, else `<config dir>/checkout.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! [pricing]
//! ticket_price_cents = 2500
//!
//! [session]
//! duration_secs = 600
//! tick_millis = 1000
//!
//! [bindings]
//! tickets = "numTickets"
//! buy_button = "purchaseBtn"
//!
//! [page]
//! # ids present on the page; defaults to every bound id
//! elements = ["timer", "numTickets", "total", "purchaseBtn"]
//! ```
//!
//! Configuration is read-only after startup.

use std::path::PathBuf;
use std::time::Duration;

use booth_core::countdown::Countdown;
use booth_core::validation::validate_unit_price;
use booth_core::{Money, SESSION_DURATION_SECS, TICKET_PRICE};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::state::bindings::PageBindings;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TICKETBOOTH_CONFIG";
/// Environment override for the ticket price, in cents.
pub const TICKET_PRICE_ENV: &str = "TICKETBOOTH_TICKET_PRICE_CENTS";
/// Environment override for the session length, in seconds.
pub const SESSION_SECS_ENV: &str = "TICKETBOOTH_SESSION_SECS";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PricingConfig,
    pub session: SessionConfig,
    pub bindings: PageBindings,
    pub page: PageConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Price of one ticket in cents.
    pub ticket_price_cents: i64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            ticket_price_cents: TICKET_PRICE.cents(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Countdown length before the session expires.
    pub duration_secs: u32,

    /// Period of one countdown tick. One second in production; tests and
    /// demos may shorten it.
    pub tick_millis: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            duration_secs: SESSION_DURATION_SECS,
            tick_millis: 1000,
        }
    }
}

/// Which element ids exist on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `None` means the page has every bound element.
    pub elements: Option<Vec<String>>,
}

impl AppConfig {
    /// Loads configuration from file and environment, then validates it.
    pub fn load() -> AppResult<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                info!(path = %path.display(), "Loading config file");
                let text = std::fs::read_to_string(&path).map_err(|e| {
                    AppError::ConfigLoadFailed(format!("{}: {}", path.display(), e))
                })?;
                Self::from_toml_str(&text)?
            }
            Some(path) => {
                debug!(path = %path.display(), "No config file, using defaults");
                AppConfig::default()
            }
            None => AppConfig::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document; missing sections fall back to defaults.
    pub fn from_toml_str(text: &str) -> AppResult<Self> {
        toml::from_str(text).map_err(|e| AppError::ConfigLoadFailed(e.to_string()))
    }

    /// Explicit path from the environment, else the platform config dir.
    ///
    /// - **Linux**: `~/.config/checkout/checkout.toml`
    /// - **macOS**: `~/Library/Application Support/com.ticketbooth.checkout/checkout.toml`
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }

        ProjectDirs::from("com", "ticketbooth", "checkout")
            .map(|dirs| dirs.config_dir().join("checkout.toml"))
    }

    /// Applies `TICKETBOOTH_*` overrides. Unparseable values are logged and
    /// ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(TICKET_PRICE_ENV) {
            match raw.trim().parse::<i64>() {
                Ok(cents) => self.pricing.ticket_price_cents = cents,
                Err(_) => warn!(value = %raw, "Ignoring {}", TICKET_PRICE_ENV),
            }
        }

        if let Some(raw) = lookup(SESSION_SECS_ENV) {
            match raw.trim().parse::<u32>() {
                Ok(secs) => self.session.duration_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring {}", SESSION_SECS_ENV),
            }
        }
    }

    /// Rejects settings that cannot describe a working page.
    pub fn validate(&self) -> AppResult<()> {
        validate_unit_price(self.unit_price())?;
        Countdown::start(self.session.duration_secs)?;

        if self.session.tick_millis == 0 {
            return Err(AppError::InvalidConfig(
                "session.tick_millis must be greater than zero".to_string(),
            ));
        }

        self.bindings.validate()
    }

    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.pricing.ticket_price_cents)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.session.tick_millis)
    }

    /// Element ids making up the page markup.
    pub fn page_elements(&self) -> Vec<String> {
        match &self.page.elements {
            Some(ids) => ids.clone(),
            None => self
                .bindings
                .entries()
                .iter()
                .map(|(_, id)| id.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.unit_price(), TICKET_PRICE);
        assert_eq!(config.session.duration_secs, 600);
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.page_elements().len(), 11);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [bindings]
            tickets = "numTickets"

            [page]
            elements = ["timer", "numTickets", "total"]
            "#,
        )
        .unwrap();

        assert_eq!(config.bindings.tickets, "numTickets");
        assert_eq!(config.bindings.timer, "timer");
        assert_eq!(config.session.duration_secs, 600);
        assert_eq!(config.page_elements(), ["timer", "numTickets", "total"]);
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("[session\nduration_secs = ").unwrap_err();
        assert!(matches!(err, AppError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (TICKET_PRICE_ENV, "3000"),
            (SESSION_SECS_ENV, "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.pricing.ticket_price_cents, 3000);
        assert_eq!(config.session.duration_secs, 600);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.session.duration_secs = 0;
        assert!(matches!(config.validate(), Err(AppError::Core(_))));

        let mut config = AppConfig::default();
        config.pricing.ticket_price_cents = -5;
        assert!(matches!(config.validate(), Err(AppError::Core(_))));

        let mut config = AppConfig::default();
        config.session.tick_millis = 0;
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_price_that_overflows_total_is_rejected() {
        let max = i64::MAX.to_string();
        let mut config = AppConfig::default();
        config.apply_env(|key| (key == TICKET_PRICE_ENV).then(|| max.clone()));

        assert_eq!(config.pricing.ticket_price_cents, i64::MAX);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            AppError::Core(booth_core::CoreError::PriceTooLarge { .. })
        ));
    }
}
