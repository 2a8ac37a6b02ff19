//! Settings overlay visibility.

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The dimmed area around the dialog.
    Backdrop,
    /// The dialog itself.
    Content,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverlay {
    open: bool,
}

impl SettingsOverlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Clicking outside the dialog dismisses it.
    pub fn click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_click_dismisses() {
        let mut overlay = SettingsOverlay::default();
        overlay.open();
        overlay.click(ClickTarget::Content);
        assert!(overlay.is_open());
        overlay.click(ClickTarget::Backdrop);
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_close_button() {
        let mut overlay = SettingsOverlay::default();
        overlay.open();
        overlay.close();
        assert!(!overlay.is_open());
    }
}
