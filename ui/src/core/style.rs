//! Visual variants of the navbar.
//!
//! The "enhanced" (glass overlay, staggered entrances) and "basic" looks share
//! every bit of behaviour; they only differ in the class names and inline
//! delays handed to the view. `NavStyle` carries those differences.

use serde::{Deserialize, Serialize};

use super::tracker::ScrollState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StyleSetting")]
pub struct NavStyle {
    /// Frosted-glass backgrounds and decorative orbs in the mobile overlay.
    pub glass: bool,
    /// Entrance delay step between desktop links.
    pub link_stagger_ms: u32,
    /// Transition delay step between mobile menu entries.
    pub menu_stagger_ms: u32,
}

impl NavStyle {
    pub fn enhanced() -> Self {
        Self {
            glass: true,
            link_stagger_ms: 100,
            menu_stagger_ms: 150,
        }
    }

    pub fn basic() -> Self {
        Self {
            glass: false,
            link_stagger_ms: 0,
            menu_stagger_ms: 0,
        }
    }

    pub fn bar_class(&self, state: &ScrollState, menu_open: bool) -> String {
        let mut class = String::from("navbar");
        if self.glass {
            class.push_str(" navbar--glass");
        }
        if state.past_threshold {
            class.push_str(" navbar--scrolled");
        }
        if state.header_hidden() {
            class.push_str(" navbar--hidden");
        }
        if menu_open {
            class.push_str(" navbar--open");
        }
        class
    }

    pub fn link_class(&self, active: bool) -> &'static str {
        if active {
            "navbar__link navbar__link--active"
        } else {
            "navbar__link"
        }
    }

    pub fn link_style(&self, index: usize) -> String {
        stagger("animation-delay", self.link_stagger_ms, index)
    }

    pub fn menu_class(&self, open: bool) -> String {
        let mut class = String::from("navbar__menu");
        if self.glass {
            class.push_str(" navbar__menu--glass");
        }
        if open {
            class.push_str(" navbar__menu--open");
        }
        class
    }

    pub fn menu_item_class(&self, active: bool) -> &'static str {
        if active {
            "navbar__menu-item navbar__menu-item--active"
        } else {
            "navbar__menu-item"
        }
    }

    pub fn menu_item_style(&self, index: usize) -> String {
        stagger("transition-delay", self.menu_stagger_ms, index)
    }
}

impl Default for NavStyle {
    fn default() -> Self {
        Self::enhanced()
    }
}

fn stagger(property: &str, step_ms: u32, index: usize) -> String {
    if step_ms == 0 {
        return String::new();
    }
    let delay = u64::from(step_ms).saturating_mul(index as u64);
    format!("{property}: {delay}ms")
}

/// Accepts either a preset name or a full object in configuration files.
#[derive(Deserialize)]
#[serde(untagged)]
enum StyleSetting {
    Preset(StylePreset),
    Custom(CustomStyle),
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum StylePreset {
    Enhanced,
    Basic,
}

#[derive(Deserialize)]
#[serde(default)]
struct CustomStyle {
    glass: bool,
    link_stagger_ms: u32,
    menu_stagger_ms: u32,
}

impl Default for CustomStyle {
    fn default() -> Self {
        let NavStyle {
            glass,
            link_stagger_ms,
            menu_stagger_ms,
        } = NavStyle::enhanced();
        Self {
            glass,
            link_stagger_ms,
            menu_stagger_ms,
        }
    }
}

impl From<StyleSetting> for NavStyle {
    fn from(setting: StyleSetting) -> Self {
        match setting {
            StyleSetting::Preset(StylePreset::Enhanced) => Self::enhanced(),
            StyleSetting::Preset(StylePreset::Basic) => Self::basic(),
            StyleSetting::Custom(custom) => Self {
                glass: custom.glass,
                link_stagger_ms: custom.link_stagger_ms,
                menu_stagger_ms: custom.menu_stagger_ms,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tracker::Direction;

    fn state(direction: Direction, past_threshold: bool) -> ScrollState {
        ScrollState {
            scroll_y: 0.0,
            direction,
            past_threshold,
            active_section: "Home".into(),
        }
    }

    #[test]
    fn bar_class_reflects_scroll_and_menu() {
        let style = NavStyle::enhanced();
        assert_eq!(
            style.bar_class(&state(Direction::Up, false), false),
            "navbar navbar--glass"
        );
        assert_eq!(
            style.bar_class(&state(Direction::Down, true), true),
            "navbar navbar--glass navbar--scrolled navbar--hidden navbar--open"
        );
        assert_eq!(
            NavStyle::basic().bar_class(&state(Direction::Up, true), false),
            "navbar navbar--scrolled"
        );
    }

    #[test]
    fn basic_variant_has_no_stagger() {
        let style = NavStyle::basic();
        assert_eq!(style.link_style(3), "");
        assert_eq!(style.menu_item_style(3), "");
        assert_eq!(style.menu_class(true), "navbar__menu navbar__menu--open");
    }

    #[test]
    fn enhanced_variant_staggers_by_index() {
        let style = NavStyle::enhanced();
        assert_eq!(style.link_style(0), "animation-delay: 0ms");
        assert_eq!(style.link_style(2), "animation-delay: 200ms");
        assert_eq!(style.menu_item_style(3), "transition-delay: 450ms");
    }

    #[test]
    fn parses_presets_and_custom_objects() {
        let basic: NavStyle = serde_json::from_str(r#""basic""#).unwrap();
        assert_eq!(basic, NavStyle::basic());

        let custom: NavStyle = serde_json::from_str(r#"{"glass": false}"#).unwrap();
        assert!(!custom.glass);
        assert_eq!(custom.link_stagger_ms, 100);

        assert!(serde_json::from_str::<NavStyle>(r#""neon""#).is_err());
    }
}
