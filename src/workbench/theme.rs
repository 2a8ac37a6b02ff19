//! Light/dark theme.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Label on the settings toggle.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Mocha (Dark)",
            Theme::Light => "Latte (Light)",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Dark => "moon",
            Theme::Light => "sun",
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_label() {
        let theme = Theme::default();
        assert_eq!(theme.label(), "Mocha (Dark)");
        let light = theme.toggled();
        assert_eq!(light.label(), "Latte (Light)");
        assert_eq!(light.icon(), "sun");
        assert_eq!(light.toggled(), Theme::Dark);
    }
}
