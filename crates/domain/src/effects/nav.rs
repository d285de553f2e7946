//! Mobile navigation menu state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Clicking a menu link always closes the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Page scrolling is locked while the menu covers it
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    /// Class added to the toggle button and the menu
    pub fn active_class(&self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_locks_and_unlocks_scrolling() {
        let mut menu = NavMenu::default();
        assert_eq!(menu.body_overflow(), "");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.body_overflow(), "hidden");
        assert_eq!(menu.active_class(), "active");
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = NavMenu::default();
        menu.close();
        assert!(!menu.is_open());
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }
}
