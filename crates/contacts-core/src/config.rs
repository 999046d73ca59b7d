//! Configuration types for the contacts assistant
//!
//! This module defines all configuration structures used throughout the crate.

use serde::{Deserialize, Serialize};

use crate::birthdays::{BirthdayWindow, DEFAULT_WINDOW_DAYS};

/// Longest accepted birthday window in days
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Main assistant configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Birthday reminder settings
    #[serde(default)]
    pub birthdays: BirthdayConfig,
}

impl AssistantConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the birthday settings
    pub fn with_birthdays(mut self, birthdays: BirthdayConfig) -> Self {
        self.birthdays = birthdays;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.birthdays.validate()
    }
}

/// Birthday reminder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayConfig {
    /// Number of days after today covered by the `birthdays` command
    #[serde(default = "default_window_days")]
    pub window_days: u32,

    /// Report weekend birthdays on the following Monday
    #[serde(default)]
    pub shift_weekends: bool,
}

impl BirthdayConfig {
    /// Validate the birthday settings
    pub fn validate(&self) -> Result<(), crate::Error> {
        if !(1..=MAX_WINDOW_DAYS).contains(&self.window_days) {
            return Err(crate::Error::config(format!(
                "birthday window must be between 1 and {} days, got {}",
                MAX_WINDOW_DAYS, self.window_days
            )));
        }
        Ok(())
    }

    /// Query window described by this configuration
    pub fn window(&self) -> BirthdayWindow {
        BirthdayWindow::new(self.window_days).with_weekend_shift(self.shift_weekends)
    }
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            shift_weekends: false,
        }
    }
}

fn default_window_days() -> u32 {
    DEFAULT_WINDOW_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssistantConfig::new();
        assert_eq!(config.birthdays.window_days, 7);
        assert!(!config.birthdays.shift_weekends);
        assert!(config.validate().is_ok());
        assert_eq!(config.birthdays.window(), BirthdayWindow::default());
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let config: AssistantConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AssistantConfig::default());

        let config: AssistantConfig =
            serde_json::from_str(r#"{"birthdays": {"shift_weekends": true}}"#).unwrap();
        assert_eq!(config.birthdays.window_days, 7);
        assert!(config.birthdays.window().shift_weekends);
    }

    #[test]
    fn test_validate_window_range() {
        for days in [0, MAX_WINDOW_DAYS + 1] {
            let config = AssistantConfig::new().with_birthdays(BirthdayConfig {
                window_days: days,
                shift_weekends: false,
            });
            assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
        }
    }
}
