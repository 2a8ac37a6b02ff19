//! Two-tier clipboard copy.
//!
//! The native tier asks the terminal to set the system clipboard with an
//! OSC 52 escape sequence. When that fails the text is written to a scratch
//! file instead.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard write failed: {0}")]
    Io(#[from] io::Error),

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// A place copied text can go.
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;

    fn name(&self) -> &str;
}

/// Which tier ended up holding the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTier {
    Native,
    Fallback,
}

/// Try `native`, then `fallback`.
pub fn copy_with_fallback(
    native: &dyn Clipboard,
    fallback: &dyn Clipboard,
    text: &str,
) -> Result<CopyTier, ClipboardError> {
    match native.write_text(text) {
        Ok(()) => Ok(CopyTier::Native),
        Err(e) => {
            tracing::debug!(clipboard = native.name(), error = %e, "Native copy failed, using fallback");
            fallback.write_text(text).map(|()| CopyTier::Fallback)
        }
    }
}

/// OSC 52 terminal clipboard.
pub struct Osc52Clipboard<W> {
    out: Mutex<W>,
    enabled: bool,
}

impl Osc52Clipboard<io::Stdout> {
    /// Writes to stdout when it is a terminal.
    pub fn stdout() -> Self {
        use std::io::IsTerminal;
        let enabled = io::stdout().is_terminal();
        Self {
            out: Mutex::new(io::stdout()),
            enabled,
        }
    }
}

impl<W: Write + Send> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            enabled: true,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Escape sequence that sets the clipboard selection to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", general_purpose::STANDARD.encode(text))
}

impl<W: Write + Send> Clipboard for Osc52Clipboard<W> {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if !self.enabled {
            return Err(ClipboardError::Unavailable("output is not a terminal".into()));
        }
        let mut out = self
            .out
            .lock()
            .map_err(|_| ClipboardError::Unavailable("terminal writer poisoned".into()))?;
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "osc52"
    }
}

/// Scratch file that receives the text.
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `clarity-clipboard.txt` in the system temp directory.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("clarity-clipboard.txt"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        fs::write(&self.path, text)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Broken;

    impl Clipboard for Broken {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no clipboard".into()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    #[test]
    fn test_osc52_encodes_text() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
    }

    #[test]
    fn test_native_tier_preferred() {
        let native = Osc52Clipboard::new(Vec::new());
        let dir = tempfile::tempdir().unwrap();
        let fallback = FileClipboard::new(dir.path().join("clip.txt"));

        let tier = copy_with_fallback(&native, &fallback, "print(1)").unwrap();
        assert_eq!(tier, CopyTier::Native);
        assert_eq!(native.into_inner(), osc52_sequence("print(1)").into_bytes());
        assert!(!fallback.path().exists());
    }

    #[test]
    fn test_falls_back_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = FileClipboard::new(dir.path().join("clip.txt"));

        let tier = copy_with_fallback(&Broken, &fallback, "x = 1").unwrap();
        assert_eq!(tier, CopyTier::Fallback);
        assert_eq!(fs::read_to_string(fallback.path()).unwrap(), "x = 1");
    }
}
