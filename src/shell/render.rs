//! Terminal rendering of workbench snapshots.

use colored::{ColoredString, Colorize};

use crate::config::ClientConfig;
use crate::endpoint::Target;
use crate::health::Connectivity;
use crate::workbench::theme::Theme;
use crate::workbench::view::ViewState;

/// Indicator dot and message.
pub fn status_line(connectivity: &Connectivity) -> String {
    let text = format!("● {}", connectivity.message);
    if connectivity.is_online() {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

fn accent(theme: Theme, text: &str) -> ColoredString {
    match theme {
        Theme::Dark => text.bright_magenta().bold(),
        Theme::Light => text.blue().bold(),
    }
}

/// Header: target toggle, status, language and latency.
pub fn header(view: &ViewState) -> String {
    let mut line = format!(
        "{} {} {}  │  {}  │  {}",
        accent(view.theme, "Clarity"),
        view.toggle.icon,
        view.toggle.label,
        status_line(&view.connectivity),
        view.language,
    );
    if let Some(latency) = view.latency_text() {
        line.push_str(&format!("  │  {latency}"));
    }
    line
}

/// The action control as a bracketed button.
pub fn action_button(view: &ViewState) -> String {
    let face = format!("[ {} ]", view.action.label);
    if view.action_enabled() {
        face.bold().to_string()
    } else {
        face.dimmed().to_string()
    }
}

/// Output pane with its title.
pub fn output_pane(view: &ViewState) -> String {
    let title = accent(view.theme, &view.titles.output).to_string();
    let body = if view.output.is_error {
        view.output.text.red().to_string()
    } else if view.output.dimmed {
        view.output.text.dimmed().to_string()
    } else {
        view.output.text.clone()
    };
    format!("── {title} ──\n{body}\n")
}

/// Input pane with its title.
pub fn input_pane(view: &ViewState) -> String {
    let title = accent(view.theme, &view.titles.input).to_string();
    format!("── {title} ──\n{}\n", view.input.text())
}

/// Settings overlay contents.
pub fn settings_panel(view: &ViewState, config: &ClientConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("┌─ {} ─\n", accent(view.theme, "Settings")));
    out.push_str(&format!(
        "│ Theme: {} ({})   :theme to switch\n",
        view.theme.label(),
        view.theme.icon()
    ));
    for target in Target::ALL {
        let base = match target {
            Target::Local => &config.endpoints.local,
            Target::Docker => &config.endpoints.docker,
            Target::Cloud => &config.endpoints.cloud,
        };
        let base = if base.is_empty() { "(same origin)" } else { base.as_str() };
        let marker = if view.toggle.label == target.label() { "▸" } else { " " };
        out.push_str(&format!("│ {marker} {} {:<7} {base}\n", target.icon(), target.label()));
    }
    out.push_str(&format!(
        "│ Health check every {}s, timeout {}ms\n",
        config.health_check.interval_secs, config.health_check.timeout_ms
    ));
    out.push_str("└─ :close to dismiss");
    out
}

pub const HELP: &str = "\
Type code lines to fill the editor. Commands:
  :submit    send the editor to the selected backend
  :toggle    switch backend (Local → Docker → Cloud)
  :copy      copy the corrected code
  :theme     switch light/dark theme
  :settings  open settings        :close  close settings
  :clear     empty the editor     :show   show both panes
  :status    show status          :quit   exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_mentions_target_and_latency() {
        colored::control::set_override(false);
        let mut view = ViewState::new(Target::Docker, Theme::Dark, 4);
        view.connectivity = Connectivity::online();
        view.latency = Some(std::time::Duration::from_millis(87));

        let text = header(&view);
        assert!(text.contains("Docker"));
        assert!(text.contains("System Online"));
        assert!(text.contains("Latency: 87ms"));
    }

    #[test]
    fn test_settings_panel_marks_active_target() {
        colored::control::set_override(false);
        let view = ViewState::new(Target::Cloud, Theme::Light, 4);
        let panel = settings_panel(&view, &ClientConfig::default());
        assert!(panel.contains("Latte (Light)"));
        assert!(panel.contains("▸ ☁️ Cloud"));
        assert!(panel.contains("(same origin)"));
    }
}
