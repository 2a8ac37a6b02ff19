//! Presentation state of the workbench.
//!
//! Plain data, cloned out as snapshots for rendering. The only derived
//! value is whether the action control accepts clicks.

use std::time::Duration;

use crate::correction::Language;
use crate::endpoint::Target;
use crate::health::Connectivity;
use crate::workbench::editor::Editor;
use crate::workbench::overlay::SettingsOverlay;
use crate::workbench::theme::Theme;

pub const ACTION_LABEL: &str = "Correct Code";
pub const BUSY_LABEL: &str = "Processing...";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";
pub const DEFAULT_LANGUAGE: &str = "Python";
pub const DEFAULT_EXT: &str = "py";
pub const OUTPUT_PLACEHOLDER: &str = "# Corrected code will appear here.";

/// The submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionControl {
    pub label: String,
    pub busy: bool,
}

/// The corrected-code pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPane {
    pub text: String,
    pub dimmed: bool,
    pub is_error: bool,
}

/// File names shown above the two panes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaneTitles {
    pub input: String,
    pub output: String,
}

impl PaneTitles {
    pub fn for_ext(ext: &str) -> Self {
        Self {
            input: format!("input.{ext}"),
            output: format!("output.{ext}"),
        }
    }
}

/// The backend selector button face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleFace {
    pub label: &'static str,
    pub icon: &'static str,
}

impl From<Target> for ToggleFace {
    fn from(target: Target) -> Self {
        Self {
            label: target.label(),
            icon: target.icon(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub connectivity: Connectivity,
    pub action: ActionControl,
    pub output: OutputPane,
    pub input: Editor,
    pub language: String,
    pub titles: PaneTitles,
    pub latency: Option<Duration>,
    pub toggle: ToggleFace,
    pub theme: Theme,
    pub settings: SettingsOverlay,
    pub copy_label: String,
}

impl ViewState {
    pub fn new(target: Target, theme: Theme, indent_width: usize) -> Self {
        Self {
            connectivity: Connectivity::checking(),
            action: ActionControl {
                label: ACTION_LABEL.to_string(),
                busy: false,
            },
            output: OutputPane {
                text: OUTPUT_PLACEHOLDER.to_string(),
                dimmed: false,
                is_error: false,
            },
            input: Editor::new(indent_width),
            language: DEFAULT_LANGUAGE.to_string(),
            titles: PaneTitles::for_ext(DEFAULT_EXT),
            latency: None,
            toggle: target.into(),
            theme,
            settings: SettingsOverlay::default(),
            copy_label: COPY_LABEL.to_string(),
        }
    }

    /// Disabled while offline or while a submission is in flight.
    pub fn action_enabled(&self) -> bool {
        !self.action.busy && self.connectivity.is_online()
    }

    pub fn latency_text(&self) -> Option<String> {
        self.latency.map(|l| format!("Latency: {}ms", l.as_millis()))
    }

    pub fn apply_language(&mut self, language: &Language) {
        self.language = language.name.clone();
        self.titles = PaneTitles::for_ext(&language.ext);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_is_disabled_until_checked() {
        let view = ViewState::new(Target::Cloud, Theme::Dark, 4);
        assert!(!view.action_enabled());
        assert_eq!(view.toggle.label, "Cloud");
        assert_eq!(view.titles.input, "input.py");
    }

    #[test]
    fn test_busy_overrides_online() {
        let mut view = ViewState::new(Target::Local, Theme::Dark, 4);
        view.connectivity = Connectivity::online();
        assert!(view.action_enabled());
        view.action.busy = true;
        assert!(!view.action_enabled());
    }

    #[test]
    fn test_latency_text() {
        let mut view = ViewState::new(Target::Local, Theme::Dark, 4);
        assert_eq!(view.latency_text(), None);
        view.latency = Some(Duration::from_millis(1234));
        assert_eq!(view.latency_text().as_deref(), Some("Latency: 1234ms"));
    }
}
