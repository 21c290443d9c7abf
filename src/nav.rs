//! Mobile navigation toggle.

/// Whether the collapsible nav is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the nav, returning the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Collapse after a link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_close() {
        let mut nav = NavState::default();
        assert!(nav.toggle());
        assert!(!nav.toggle());
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());
    }
}
