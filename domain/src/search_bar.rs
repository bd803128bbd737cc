//! Search bar layout mode

use serde::{Deserialize, Serialize};

/// Whether the search bar fills the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchBarMode {
    #[default]
    Normal,
    Maximized,
}

impl SearchBarMode {
    pub fn toggled(self) -> Self {
        match self {
            SearchBarMode::Normal => SearchBarMode::Maximized,
            SearchBarMode::Maximized => SearchBarMode::Normal,
        }
    }

    pub fn is_maximized(self) -> bool {
        self == SearchBarMode::Maximized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        let mode = SearchBarMode::default();
        assert!(!mode.is_maximized());
        assert!(mode.toggled().is_maximized());
        assert_eq!(mode.toggled().toggled(), SearchBarMode::Normal);
    }
}
