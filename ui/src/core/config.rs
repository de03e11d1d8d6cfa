//! Site configuration: brand, navigation items, tuning and visual variant.
//!
//! Loaded from JSON. Every section except `items` may be omitted and falls
//! back to its defaults:
//!
//! ```json
//! {
//!   "brand": "Kabir singh",
//!   "items": [{ "id": "Home", "label": "Home" }],
//!   "tracker": { "hysteresis": 10, "scrolled_threshold": 20, "lookahead": 200 },
//!   "scroller": { "header_offset": 80, "duration_ms": 1200 },
//!   "style": "enhanced"
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::nav::{NavError, NavItem, NavItems};
use super::scroller::ScrollerConfig;
use super::style::NavStyle;
use super::tracker::TrackerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid navigation: {0}")]
    Nav(#[from] NavError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub items: NavItems,
    pub tracker: TrackerConfig,
    pub scroller: ScrollerConfig,
    pub style: NavStyle,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Kabir singh".to_string(),
            items: NavItems::default(),
            tracker: TrackerConfig::default(),
            scroller: ScrollerConfig::default(),
            style: NavStyle::default(),
        }
    }
}

impl SiteConfig {
    /// Default tuning and style around a custom brand and item list.
    pub fn new(brand: impl Into<String>, items: Vec<NavItem>) -> Result<Self, ConfigError> {
        Ok(Self {
            brand: brand.into(),
            items: NavItems::new(items)?,
            ..Self::default()
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Anchor the brand link scrolls to.
    pub fn home_anchor(&self) -> &str {
        &self.items.first().id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.home_anchor(), "Home");
        assert_eq!(config.scroller.duration_ms, 1200.0);
        assert_eq!(config.tracker.lookahead, 200.0);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = SiteConfig::from_json(
            r#"{
                "brand": "Ada",
                "items": [{"id": "Intro", "label": "Intro"}, {"id": "Work", "label": "Work"}],
                "scroller": {"duration_ms": 600},
                "style": "basic"
            }"#,
        )
        .unwrap();

        assert_eq!(config.brand, "Ada");
        assert_eq!(config.home_anchor(), "Intro");
        assert_eq!(config.scroller.duration_ms, 600.0);
        assert_eq!(config.scroller.header_offset, 80.0);
        assert_eq!(config.style, NavStyle::basic());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = SiteConfig::from_json(
            r#"{"items": [{"id": "A", "label": "A"}, {"id": "A", "label": "B"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("duplicate navigation id `A`"));
    }

    #[test]
    fn programmatic_config_validates_items() {
        let config = SiteConfig::new("Ada", vec![NavItem::new("Intro", "Intro")]).unwrap();
        assert_eq!(config.home_anchor(), "Intro");

        let err = SiteConfig::new("Ada", Vec::new()).unwrap_err();
        assert!(matches!(err, ConfigError::Nav(NavError::Empty)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
