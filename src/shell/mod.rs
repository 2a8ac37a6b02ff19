//! Interactive terminal workbench.
//!
//! # Data Flow
//! ```text
//! stdin lines ─→ parse_line ─→ App operation ─→ Workbench ─→ render.rs ─→ stdout
//! status watch ──────────────────────────────────────────────┘
//! ```

pub mod render;

use std::io::{self, Write};

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::App;
use crate::config::ClientConfig;
use crate::correction::SubmitOutcome;
use crate::lifecycle::Shutdown;
use crate::workbench::clipboard::CopyTier;
use crate::workbench::overlay::ClickTarget;

/// A shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Submit,
    Toggle,
    Copy,
    Theme,
    Settings,
    Close,
    Clear,
    Show,
    Status,
    Help,
    Quit,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Unknown(String),
    /// Editor text.
    Text(String),
}

/// Lines starting with `:` are commands; `::` escapes a literal colon.
pub fn parse_line(line: &str) -> Input {
    let Some(rest) = line.strip_prefix(':') else {
        return Input::Text(line.to_string());
    };
    if rest.starts_with(':') {
        return Input::Text(rest.to_string());
    }
    let command = match rest.trim() {
        "submit" | "s" => Command::Submit,
        "toggle" | "t" => Command::Toggle,
        "copy" | "c" => Command::Copy,
        "theme" => Command::Theme,
        "settings" => Command::Settings,
        "close" => Command::Close,
        "clear" => Command::Clear,
        "show" => Command::Show,
        "status" => Command::Status,
        "help" | "h" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => return Input::Unknown(other.to_string()),
    };
    Input::Command(command)
}

fn emit(text: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{text}");
    let _ = out.flush();
}

/// Run the shell until `:quit`, end of input, or shutdown.
pub async fn run(app: &App, config: &ClientConfig, shutdown: &Shutdown) -> io::Result<()> {
    let workbench = app.workbench();
    let mut status_rx = workbench.subscribe_status();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    emit(&render::header(&workbench.snapshot()));
    emit(render::HELP);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_line(app, config, &line).await {
                    break;
                }
            }
            changed = status_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let connectivity = status_rx.borrow_and_update().clone();
                emit(&render::status_line(&connectivity));
            }
            _ = shutdown.triggered() => break,
        }
    }

    shutdown.trigger();
    Ok(())
}

/// Apply one input line. Returns false when the shell should exit.
async fn handle_line(app: &App, config: &ClientConfig, line: &str) -> bool {
    let workbench = app.workbench();
    let input = parse_line(line);

    if workbench.snapshot().settings.is_open() {
        match input {
            Input::Command(Command::Theme | Command::Settings | Command::Close) => {}
            // Anything else lands outside the dialog.
            _ => workbench.click_settings(ClickTarget::Backdrop),
        }
    }

    match input {
        Input::Text(text) => workbench.type_line(&text),
        Input::Unknown(name) => emit(&format!("unknown command ':{name}' (try :help)")),
        Input::Command(command) => match command {
            Command::Submit => match app.press_action().await {
                None => emit(&render::action_button(&workbench.snapshot())),
                Some(SubmitOutcome::Skipped) => emit("Editor is empty."),
                Some(SubmitOutcome::Busy) => emit(&render::action_button(&workbench.snapshot())),
                Some(_) => {
                    let view = workbench.snapshot();
                    emit(&render::output_pane(&view));
                    emit(&render::header(&view));
                }
            },
            Command::Toggle => {
                app.cycle_target().await;
                emit(&render::header(&workbench.snapshot()));
            }
            Command::Copy => match app.copy_output() {
                Ok(CopyTier::Native) => emit(&workbench.snapshot().copy_label),
                Ok(CopyTier::Fallback) => emit(&format!("{} (saved to file)", workbench.snapshot().copy_label)),
                Err(e) => emit(&format!("Copy failed: {e}")),
            },
            Command::Theme => {
                let theme = workbench.toggle_theme();
                emit(&format!("Theme: {} ({})", theme.label(), theme.icon()));
            }
            Command::Settings => {
                workbench.open_settings();
                emit(&render::settings_panel(&workbench.snapshot(), config));
            }
            Command::Close => workbench.close_settings(),
            Command::Clear => workbench.clear_input(),
            Command::Show => {
                let view = workbench.snapshot();
                emit(&render::input_pane(&view));
                emit(&render::output_pane(&view));
            }
            Command::Status => {
                let view = workbench.snapshot();
                emit(&render::header(&view));
                emit(&render::action_button(&view));
            }
            Command::Help => emit(render::HELP),
            Command::Quit => return false,
        },
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_line(":submit"), Input::Command(Command::Submit));
        assert_eq!(parse_line(":t"), Input::Command(Command::Toggle));
        assert_eq!(parse_line(": quit "), Input::Command(Command::Quit));
        assert_eq!(parse_line(":bogus"), Input::Unknown("bogus".into()));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_line("print('hi')"), Input::Text("print('hi')".into()));
        assert_eq!(parse_line("::x"), Input::Text(":x".into()));
        assert_eq!(parse_line(""), Input::Text(String::new()));
    }
}
