//! Runtime configuration.
//!
//! [`SiteConfig`] holds every tunable: timer delays, the shade applied to
//! derive `primary-dark`, and the values the customization panel resets to.
//! Every field has a default, so partial TOML or JSON documents load.
//!
//! # Example
//!
//! ```rust
//! use atelier::SiteConfig;
//!
//! let config = SiteConfig::from_toml_str(
//!     r##"
//!     [timings]
//!     notification_lifetime_ms = 8000
//!
//!     [defaults]
//!     primary = "#2b2d42"
//!     "##,
//! )?;
//!
//! assert_eq!(config.timings.notification_lifetime_ms, 8000);
//! assert_eq!(config.timings.notification_exit_ms, 300);
//! assert_eq!(config.defaults.primary.as_str(), "#2b2d42");
//! # Ok::<(), atelier::Error>(())
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::fields::CustomizationFieldState;

/// Fixed delays used by the page, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Total time a notification stays in the document, exit animation included.
    pub notification_lifetime_ms: u64,
    /// Length of the exit animation before a notification node is removed.
    pub notification_exit_ms: u64,
    /// How long the copy button shows its "Copied!" label.
    pub copy_feedback_ms: u64,
    /// Simulated round trip of the login demo form.
    pub login_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_lifetime_ms: 5000,
            notification_exit_ms: 300,
            copy_feedback_ms: 2000,
            login_delay_ms: 1500,
        }
    }
}

impl Timings {
    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.notification_lifetime_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

/// Runtime configuration for a documentation site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Timer delays.
    pub timings: Timings,
    /// Percentage passed to `darken` when deriving `primary-dark`.
    pub darken_percent: f64,
    /// Values restored by the panel's reset button.
    pub defaults: CustomizationFieldState,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            darken_percent: 20.0,
            defaults: CustomizationFieldState::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] on malformed input and
    /// [`Error::InvalidConfig`] when [`Self::validate`] rejects it.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] on malformed input and
    /// [`Error::InvalidConfig`] when [`Self::validate`] rejects it.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values can work together.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if the notification lifetime is zero,
    /// the exit animation does not fit inside the lifetime, or the darken
    /// percentage is not a finite number.
    pub fn validate(&self) -> Result<()> {
        let t = &self.timings;
        let problem = if t.notification_lifetime_ms == 0 {
            Some("notification_lifetime_ms must be greater than zero".to_string())
        } else if t.notification_exit_ms >= t.notification_lifetime_ms {
            Some(format!(
                "notification_exit_ms ({}) must be shorter than notification_lifetime_ms ({})",
                t.notification_exit_ms, t.notification_lifetime_ms
            ))
        } else if !self.darken_percent.is_finite() {
            Some("darken_percent must be a finite number".to_string())
        } else {
            None
        };

        match problem {
            Some(message) => {
                warn!(%message, "rejecting site config");
                Err(Error::invalid_config(message))
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_script() {
        let config = SiteConfig::default();
        assert_eq!(config.timings.notification_lifetime(), Duration::from_secs(5));
        assert_eq!(config.timings.notification_exit(), Duration::from_millis(300));
        assert_eq!(config.timings.copy_feedback(), Duration::from_secs(2));
        assert_eq!(config.timings.login_delay(), Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_documents_load_defaults() {
        assert_eq!(SiteConfig::from_toml_str("").expect("toml"), SiteConfig::default());
        assert_eq!(SiteConfig::from_json_str("{}").expect("json"), SiteConfig::default());
    }

    #[test]
    fn test_json_partial_override() {
        let config = SiteConfig::from_json_str(r#"{"darken_percent": 35, "timings": {"copy_feedback_ms": 750}}"#)
            .expect("json");
        assert_eq!(config.darken_percent, 35.0);
        assert_eq!(config.timings.copy_feedback_ms, 750);
        assert_eq!(config.timings.notification_lifetime_ms, 5000);
    }

    #[test]
    fn test_exit_longer_than_lifetime_is_rejected() {
        let err = SiteConfig::from_toml_str(
            "[timings]\nnotification_lifetime_ms = 200\nnotification_exit_ms = 300\n",
        )
        .expect_err("exit does not fit");
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("notification_exit_ms"));
    }

    #[test]
    fn test_zero_lifetime_is_rejected() {
        let err = SiteConfig::from_json_str(r#"{"timings": {"notification_lifetime_ms": 0}}"#)
            .expect_err("zero lifetime");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("timings = 5").expect_err("wrong type");
        assert!(matches!(err, Error::Toml(_)));
    }
}
