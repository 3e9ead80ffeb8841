//! Page configuration.
//!
//! The layout collaborator supplies a JSON object; every key is optional and
//! falls back to the crate defaults:
//!
//! ```json
//! {
//!   "sections": "compact",
//!   "recipient": "natenaelnebiyu@gmail.com",
//!   "scrolled_threshold": 50,
//!   "back_to_top_threshold": 300,
//!   "status_clear_delay_ms": 3000
//! }
//! ```
//!
//! `sections` is either a preset name (`"full"`, `"compact"`) or an explicit
//! list of ids. `status_clear_delay_ms: null` keeps submit statuses on screen
//! until the next submit.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::sections::SectionSet;
use crate::validation;
use crate::{
    validate_non_negative, BACK_TO_TOP_THRESHOLD_PX, CONTACT_RECIPIENT,
    DEFAULT_STATUS_CLEAR_DELAY_MS, SCROLLED_THRESHOLD_PX,
};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SectionsSpec {
    Preset(String),
    List(Vec<String>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    sections: Option<SectionsSpec>,
    #[serde(default)]
    recipient: Option<String>,
    #[serde(default)]
    scrolled_threshold: Option<f64>,
    #[serde(default)]
    back_to_top_threshold: Option<f64>,
    #[serde(default = "default_status_clear_delay")]
    status_clear_delay_ms: Option<f64>,
}

fn default_status_clear_delay() -> Option<f64> {
    Some(DEFAULT_STATUS_CLEAR_DELAY_MS)
}

/// Validated configuration for one page view.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioConfig {
    pub sections: SectionSet,
    pub recipient: String,
    pub scrolled_threshold: f64,
    pub back_to_top_threshold: f64,
    /// `None` disables the submit-status auto-clear.
    pub status_clear_delay_ms: Option<f64>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        PortfolioConfig {
            sections: SectionSet::full(),
            recipient: CONTACT_RECIPIENT.to_string(),
            scrolled_threshold: SCROLLED_THRESHOLD_PX,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD_PX,
            status_clear_delay_ms: Some(DEFAULT_STATUS_CLEAR_DELAY_MS),
        }
    }
}

impl PortfolioConfig {
    /// Parse and validate a JSON config. An empty string yields the defaults.
    pub fn from_json(raw: &str) -> Result<PortfolioConfig, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(PortfolioConfig::default());
        }
        let parsed: RawConfig = serde_json::from_str(raw)?;
        let defaults = PortfolioConfig::default();

        let sections = match parsed.sections {
            None => defaults.sections,
            Some(SectionsSpec::Preset(name)) => SectionSet::preset(&name)?,
            Some(SectionsSpec::List(ids)) => SectionSet::from_ids(&ids)?,
        };

        let recipient = parsed.recipient.unwrap_or(defaults.recipient);
        if validation::email(&recipient).is_err() || recipient.contains(['?', '&', '#']) {
            return Err(ConfigError::InvalidRecipient(recipient));
        }

        let scrolled_threshold = check_threshold(
            "scrolled_threshold",
            parsed.scrolled_threshold.unwrap_or(defaults.scrolled_threshold),
        )?;
        let back_to_top_threshold = check_threshold(
            "back_to_top_threshold",
            parsed
                .back_to_top_threshold
                .unwrap_or(defaults.back_to_top_threshold),
        )?;
        let status_clear_delay_ms = match parsed.status_clear_delay_ms {
            Some(ms) => Some(check_threshold("status_clear_delay_ms", ms)?),
            None => None,
        };

        Ok(PortfolioConfig {
            sections,
            recipient,
            scrolled_threshold,
            back_to_top_threshold,
            status_clear_delay_ms,
        })
    }
}

fn check_threshold(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if validate_non_negative(value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(PortfolioConfig::from_json("").unwrap(), PortfolioConfig::default());
        assert_eq!(PortfolioConfig::from_json("{}").unwrap(), PortfolioConfig::default());
    }

    #[test]
    fn test_defaults() {
        let cfg = PortfolioConfig::default();
        assert_eq!(cfg.recipient, "natenaelnebiyu@gmail.com");
        assert_eq!(cfg.scrolled_threshold, 50.0);
        assert_eq!(cfg.back_to_top_threshold, 300.0);
        assert_eq!(cfg.status_clear_delay_ms, Some(3000.0));
        assert_eq!(cfg.sections, SectionSet::full());
    }

    #[test]
    fn test_preset_and_list_sections() {
        let cfg = PortfolioConfig::from_json(r#"{"sections":"compact"}"#).unwrap();
        assert_eq!(cfg.sections, SectionSet::compact());

        let cfg = PortfolioConfig::from_json(r#"{"sections":["home","blog"]}"#).unwrap();
        assert_eq!(cfg.sections.len(), 2);
        assert!(cfg.sections.contains("blog"));
    }

    #[test]
    fn test_null_delay_disables_auto_clear() {
        let cfg = PortfolioConfig::from_json(r#"{"status_clear_delay_ms":null}"#).unwrap();
        assert_eq!(cfg.status_clear_delay_ms, None);

        let cfg = PortfolioConfig::from_json(r#"{"status_clear_delay_ms":1500}"#).unwrap();
        assert_eq!(cfg.status_clear_delay_ms, Some(1500.0));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"scrolled_threshold":-1}"#),
            Err(ConfigError::InvalidThreshold { name: "scrolled_threshold", .. })
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"recipient":"nobody"}"#),
            Err(ConfigError::InvalidRecipient(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"recipient":"a@b.com?cc=x@y.com"}"#),
            Err(ConfigError::InvalidRecipient(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"sections":[]}"#),
            Err(ConfigError::EmptySections)
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"sections":"wide"}"#),
            Err(ConfigError::UnknownPreset(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json(r#"{"theme":"dark"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PortfolioConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
