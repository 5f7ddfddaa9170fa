/// Open/closed state of the contact dialog launched from the hero. The form
/// inside keeps its own state, so closing does not discard a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactDialog {
    open: bool,
}

impl ContactDialog {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Keyboard handler for the page while the dialog is mounted. Returns
    /// true when the key dismissed the dialog.
    pub fn on_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.open = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!ContactDialog::default().is_open());
    }

    #[test]
    fn test_open_then_close() {
        let mut dialog = ContactDialog::default();
        dialog.open();
        assert!(dialog.is_open());
        dialog.close();
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_escape_dismisses_open_dialog() {
        let mut dialog = ContactDialog::default();
        dialog.open();
        assert!(!dialog.on_key("Enter"));
        assert!(dialog.is_open());
        assert!(dialog.on_key("Escape"));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_escape_ignored_while_closed() {
        let mut dialog = ContactDialog::default();
        assert!(!dialog.on_key("Escape"));
        assert!(!dialog.is_open());
    }
}
