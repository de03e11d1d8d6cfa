//! Scroll tracking: direction, the "scrolled" flag and the active section.
//!
//! `ScrollTracker::evaluate` is a synchronous computation over the current
//! offset and fresh anchor measurements. It performs no I/O; the host decides
//! when to call it (at most once per frame, see `core::frame`).
//!
//! Active section resolution
//! -------------------------
//! Every anchor that is currently rendered becomes a band
//! `[top_offset - lookahead, top_offset - lookahead + height)`. The probe
//! position is `scroll_y + lookahead`, so a section lights up slightly before
//! its top reaches the viewport. The first band (in navigation order) holding
//! the probe wins. When no band matches, the previous section stays active.

use serde::{Deserialize, Serialize};

use super::nav::NavItems;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

/// Layout of an anchor as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub top_offset: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Minimum offset change before the direction is recomputed.
    pub hysteresis: f64,
    /// Offsets strictly above this count as "scrolled".
    pub scrolled_threshold: f64,
    /// Bias applied to both the sections and the probe.
    pub lookahead: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            hysteresis: 10.0,
            scrolled_threshold: 20.0,
            lookahead: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub direction: Direction,
    pub past_threshold: bool,
    /// Always one of the configured navigation ids.
    pub active_section: String,
}

impl ScrollState {
    pub fn initial(items: &NavItems) -> Self {
        Self {
            scroll_y: 0.0,
            direction: Direction::Up,
            past_threshold: false,
            active_section: items.first().id.clone(),
        }
    }

    /// The bar slides out while the reader scrolls down through the page.
    pub fn header_hidden(&self) -> bool {
        self.direction == Direction::Down && self.past_threshold
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }
}

/// Band of one rendered section, lookahead already applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry<'a> {
    pub id: &'a str,
    pub offset: f64,
    pub height: f64,
}

impl SectionGeometry<'_> {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset && position < self.offset + self.height
    }
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    config: TrackerConfig,
    state: ScrollState,
    last_recorded_y: f64,
}

impl ScrollTracker {
    pub fn new(items: &NavItems, config: TrackerConfig) -> Self {
        Self {
            config,
            state: ScrollState::initial(items),
            last_recorded_y: 0.0,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Fold a new scroll offset into the state. `measure` is asked for every
    /// item; anchors it cannot find are skipped.
    pub fn evaluate<F>(&mut self, current_y: f64, items: &NavItems, measure: F) -> &ScrollState
    where
        F: FnMut(&str) -> Option<Measurement>,
    {
        if (current_y - self.last_recorded_y).abs() > self.config.hysteresis {
            self.state.direction = if current_y > self.last_recorded_y {
                Direction::Down
            } else {
                Direction::Up
            };
            self.last_recorded_y = current_y;
        }

        self.state.scroll_y = if current_y > 0.0 { current_y } else { 0.0 };
        self.state.past_threshold = current_y > self.config.scrolled_threshold;

        let sections = self.sections(items, measure);
        let probe = current_y + self.config.lookahead;
        if let Some(active) = resolve_active(&sections, probe) {
            if active != self.state.active_section {
                tracing::debug!(section = active, probe, "active section changed");
                self.state.active_section = active.to_string();
            }
        }

        &self.state
    }

    /// Bands for every item whose anchor is currently rendered, in item order.
    pub fn sections<'a, F>(&self, items: &'a NavItems, mut measure: F) -> Vec<SectionGeometry<'a>>
    where
        F: FnMut(&str) -> Option<Measurement>,
    {
        items
            .iter()
            .filter_map(|item| {
                measure(&item.id).map(|m| SectionGeometry {
                    id: item.id.as_str(),
                    offset: m.top_offset - self.config.lookahead,
                    height: m.height,
                })
            })
            .collect()
    }
}

/// First section whose band holds `probe`.
pub fn resolve_active<'a>(sections: &[SectionGeometry<'a>], probe: f64) -> Option<&'a str> {
    sections
        .iter()
        .find(|section| section.contains(probe))
        .map(|section| section.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::NavItem;

    fn items() -> NavItems {
        NavItems::new(vec![
            NavItem::new("Home", "Home"),
            NavItem::new("About", "About"),
            NavItem::new("Contact", "Contact"),
        ])
        .unwrap()
    }

    fn layout(id: &str) -> Option<Measurement> {
        match id {
            "Home" => Some(Measurement {
                top_offset: 0.0,
                height: 800.0,
            }),
            "About" => Some(Measurement {
                top_offset: 800.0,
                height: 600.0,
            }),
            _ => None,
        }
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(&items(), TrackerConfig::default())
    }

    #[test]
    fn starts_on_first_item() {
        let t = tracker();
        assert_eq!(t.state().active_section, "Home");
        assert_eq!(t.state().direction, Direction::Up);
        assert!(!t.state().past_threshold);
    }

    #[test]
    fn probe_inside_about_band_activates_about() {
        let mut t = tracker();
        let state = t.evaluate(650.0, &items(), layout);
        assert_eq!(state.active_section, "About");
    }

    #[test]
    fn band_end_is_exclusive() {
        let mut t = tracker();
        // probe = 600 is past Home [-200, 600) and on the start of About [600, 1200).
        assert_eq!(t.evaluate(400.0, &items(), layout).active_section, "About");
        // probe = 599 is back inside Home.
        assert_eq!(t.evaluate(399.0, &items(), layout).active_section, "Home");
    }

    #[test]
    fn no_match_retains_previous_section() {
        let mut t = tracker();
        t.evaluate(650.0, &items(), layout);
        // probe = 5200 is beyond every band; Contact is not rendered.
        let state = t.evaluate(5000.0, &items(), layout);
        assert_eq!(state.active_section, "About");
        let again = t.evaluate(5000.0, &items(), layout).clone();
        assert_eq!(again.active_section, "About");
    }

    #[test]
    fn missing_anchors_are_skipped() {
        let t = tracker();
        let list = items();
        let sections = t.sections(&list, layout);
        let ids: Vec<&str> = sections.iter().map(|s| s.id).collect();
        assert_eq!(ids, ["Home", "About"]);
        assert_eq!(sections[1].offset, 600.0);
        assert_eq!(sections[1].height, 600.0);
    }

    #[test]
    fn first_matching_section_wins_on_overlap() {
        let sections = [
            SectionGeometry {
                id: "A",
                offset: 0.0,
                height: 500.0,
            },
            SectionGeometry {
                id: "B",
                offset: 100.0,
                height: 500.0,
            },
        ];
        assert_eq!(resolve_active(&sections, 200.0), Some("A"));
        assert_eq!(resolve_active(&sections, 550.0), Some("B"));
        assert_eq!(resolve_active(&sections, 650.0), None);
    }

    #[test]
    fn direction_ignores_moves_within_hysteresis() {
        let mut t = tracker();
        assert_eq!(t.evaluate(10.0, &items(), layout).direction, Direction::Up);
        assert_eq!(t.evaluate(11.0, &items(), layout).direction, Direction::Down);
        // last recorded is now 11; 5 back is noise.
        assert_eq!(t.evaluate(6.0, &items(), layout).direction, Direction::Down);
        assert_eq!(t.evaluate(0.5, &items(), layout).direction, Direction::Up);
    }

    #[test]
    fn direction_measures_from_last_recorded_offset() {
        let mut t = tracker();
        t.evaluate(100.0, &items(), layout);
        // Creeping upward in small steps never crosses the band on its own...
        t.evaluate(95.0, &items(), layout);
        assert_eq!(t.state().direction, Direction::Down);
        // ...until the total distance from 100 exceeds it.
        t.evaluate(89.0, &items(), layout);
        assert_eq!(t.state().direction, Direction::Up);
    }

    #[test]
    fn scrolled_threshold_is_strict() {
        let mut t = tracker();
        assert!(!t.evaluate(20.0, &items(), layout).past_threshold);
        assert!(t.evaluate(21.0, &items(), layout).past_threshold);
    }

    #[test]
    fn header_hides_only_when_scrolling_down_past_threshold() {
        let mut t = tracker();
        assert!(t.evaluate(300.0, &items(), layout).header_hidden());
        assert!(!t.evaluate(100.0, &items(), layout).header_hidden());
    }

    #[test]
    fn identical_inputs_give_identical_state() {
        let a = tracker().evaluate(650.0, &items(), layout).clone();
        let b = tracker().evaluate(650.0, &items(), layout).clone();
        assert_eq!(a, b);
    }

    #[test]
    fn odd_numbers_never_panic() {
        let mut t = tracker();
        for y in [0.0, -50.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0] {
            let state = t.evaluate(y, &items(), layout);
            assert!(state.scroll_y >= 0.0);
            assert!(items().contains(&state.active_section));
        }
    }
}
