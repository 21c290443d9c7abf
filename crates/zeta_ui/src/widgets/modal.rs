//! Click classification for the detail modal overlay.
//!
//! The overlay covers the page and the content panel sits inside it. A click
//! closes the modal when it hits a close affordance or lands outside the
//! panel. Bubbling means the overlay's listener also sees clicks that started
//! inside the panel, so the decision is made on the target, not on which
//! element reported the event.

use crate::constants::modal;
use crate::event::HitTest;

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    /// An element marked as a close affordance
    Close,
    /// A thumbnail button
    Thumbnail(usize),
    /// Inside the content panel, on nothing interactive
    Panel,
    /// Outside the content panel
    Backdrop,
}

impl ModalHit {
    /// Classify a click target by the overlay regions enclosing it.
    ///
    /// Close affordances win even when they sit outside the panel.
    pub fn classify(target: &impl HitTest) -> Self {
        if target.within(modal::CLOSE) {
            ModalHit::Close
        } else if let Some(index) = target.index_within(modal::THUMB) {
            ModalHit::Thumbnail(index)
        } else if target.within(modal::PANEL) {
            ModalHit::Panel
        } else {
            ModalHit::Backdrop
        }
    }

    /// Classify within an overlay that may lack a content panel.
    ///
    /// Without a panel there is no outside to click, so what would be a
    /// backdrop hit counts as a panel hit and never closes.
    pub fn classify_in(target: &impl HitTest, has_panel: bool) -> Self {
        match Self::classify(target) {
            ModalHit::Backdrop if !has_panel => ModalHit::Panel,
            hit => hit,
        }
    }

    /// Whether this click dismisses the overlay.
    pub fn closes(self) -> bool {
        matches!(self, ModalHit::Close | ModalHit::Backdrop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::FakeTarget;

    #[test]
    fn test_close_control_inside_panel() {
        let target = FakeTarget::new(&[modal::CLOSE, modal::PANEL]);
        assert_eq!(ModalHit::classify(&target), ModalHit::Close);
        assert!(ModalHit::classify(&target).closes());
    }

    #[test]
    fn test_backdrop_close_control() {
        let target = FakeTarget::new(&[modal::CLOSE]);
        assert_eq!(ModalHit::classify(&target), ModalHit::Close);
    }

    #[test]
    fn test_panel_click_does_not_close() {
        let target = FakeTarget::new(&[modal::PANEL]);
        assert_eq!(ModalHit::classify(&target), ModalHit::Panel);
        assert!(!ModalHit::Panel.closes());
    }

    #[test]
    fn test_thumbnail() {
        let target = FakeTarget::new(&[modal::THUMB, modal::PANEL]).with_index(4);
        assert_eq!(ModalHit::classify(&target), ModalHit::Thumbnail(4));
        assert!(!ModalHit::Thumbnail(4).closes());
    }

    #[test]
    fn test_overlay_without_panel_never_closes_on_backdrop() {
        let bare = FakeTarget::new(&[]);
        assert_eq!(ModalHit::classify_in(&bare, false), ModalHit::Panel);
        assert_eq!(ModalHit::classify_in(&bare, true), ModalHit::Backdrop);

        let close = FakeTarget::new(&[modal::CLOSE]);
        assert_eq!(ModalHit::classify_in(&close, false), ModalHit::Close);
        let thumb = FakeTarget::new(&[modal::THUMB]).with_index(1);
        assert_eq!(ModalHit::classify_in(&thumb, false), ModalHit::Thumbnail(1));
    }

    #[test]
    fn test_outside_panel_closes() {
        let target = FakeTarget::new(&[]);
        assert_eq!(ModalHit::classify(&target), ModalHit::Backdrop);
        assert!(ModalHit::Backdrop.closes());
    }
}
