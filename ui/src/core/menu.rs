//! Mobile menu visibility.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Menu {
    state: MenuState,
}

impl Menu {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn toggle(&mut self) -> MenuState {
        self.state = self.state.toggled();
        self.state
    }

    /// A navigation item was chosen. Returns `true` when this closed the menu.
    pub fn select(&mut self) -> bool {
        let was_open = self.state.is_open();
        self.state = MenuState::Closed;
        was_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut menu = Menu::default();
        assert_eq!(menu.state(), MenuState::Closed);
        assert_eq!(menu.toggle(), MenuState::Open);
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn select_always_ends_closed() {
        let mut menu = Menu::default();
        assert!(!menu.select());
        assert_eq!(menu.state(), MenuState::Closed);

        menu.toggle();
        assert!(menu.select());
        assert_eq!(menu.state(), MenuState::Closed);
    }
}
