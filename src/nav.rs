#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn after_navigate(self) -> Self {
        MenuState::Closed
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            MenuState::Closed => "Open menu",
            MenuState::Open => "Close menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let state = MenuState::default();
        assert!(state.toggled().is_open());
        assert_eq!(state.toggled().toggled(), state);
        assert_eq!(MenuState::Open.toggled().toggled(), MenuState::Open);
    }

    #[test]
    fn test_navigate_always_closes() {
        assert_eq!(MenuState::Open.after_navigate(), MenuState::Closed);
        assert_eq!(MenuState::Closed.after_navigate(), MenuState::Closed);
    }

    #[test]
    fn test_toggle_label_follows_state() {
        assert_eq!(MenuState::Closed.toggle_label(), "Open menu");
        assert_eq!(MenuState::Open.toggle_label(), "Close menu");
    }
}
