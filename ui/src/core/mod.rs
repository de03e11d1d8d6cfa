//! Platform-agnostic navbar logic. Nothing in here renders; the components
//! in `crate::components` compose these pieces over a [`host::Host`].

pub mod config;
pub mod controller;
pub mod easing;
pub mod frame;
pub mod host;
pub mod menu;
pub mod nav;
pub mod platform;
pub mod scroller;
pub mod style;
pub mod tracker;

pub use config::{ConfigError, SiteConfig};
pub use controller::NavController;
pub use host::{HeadlessHost, Host};
pub use menu::MenuState;
pub use nav::{NavError, NavItem, NavItems};
pub use scroller::{AnimationHandle, ScrollerConfig, SmoothScroller};
pub use style::NavStyle;
pub use tracker::{Direction, Measurement, ScrollState, ScrollTracker, TrackerConfig};
