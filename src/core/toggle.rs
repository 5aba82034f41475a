/// Open/closed flag for drawers and dropdowns. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Toggle {
    open: bool,
}

impl Toggle {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_toggles() {
        let mut toggle = Toggle::default();
        assert!(!toggle.is_open());
        toggle.toggle();
        assert!(toggle.is_open());
        toggle.toggle();
        assert!(!toggle.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut toggle = Toggle::default();
        toggle.open();
        toggle.close();
        toggle.close();
        assert!(!toggle.is_open());
    }
}
