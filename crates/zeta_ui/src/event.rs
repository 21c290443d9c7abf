/// Keyboard keys the site reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Tab,
    Char(char),
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    /// Whether this key activates a focused button-like element.
    pub fn activates(&self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Outcome of offering an event to a handler.
///
/// `Captured` means the handler owns the event and enclosing handlers must
/// not see it; `Ignored` lets it continue outwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Captured,
    Ignored,
}

impl EventStatus {
    pub fn is_captured(self) -> bool {
        self == EventStatus::Captured
    }
}

/// A click target that can report which page regions enclose it.
///
/// The browser binding implements this over `Element::closest`; tests use
/// a plain list of region selectors.
pub trait HitTest {
    /// Whether the target is inside (or is) an element matching `selector`.
    fn within(&self, selector: &str) -> bool;

    /// The `data-index` of the nearest enclosing element matching `selector`.
    fn index_within(&self, selector: &str) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom(" "), Key::Space);
        assert_eq!(Key::from_dom("Escape"), Key::Escape);
        assert_eq!(Key::from_dom("Esc"), Key::Escape);
        assert_eq!(Key::from_dom("a"), Key::Char('a'));
        assert_eq!(Key::from_dom("ArrowLeft"), Key::Other);
    }

    #[test]
    fn test_activating_keys() {
        assert!(Key::Enter.activates());
        assert!(Key::Space.activates());
        assert!(!Key::Escape.activates());
        assert!(!Key::Char('x').activates());
    }
}
