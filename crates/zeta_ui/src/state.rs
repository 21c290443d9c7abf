//! State types for the stateful interaction regions

use crate::constants::SCROLL_LOCK_PROPERTIES;

// =============================================================================
// Carousel
// =============================================================================

/// A navigation request for a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Next,
    Prev,
    Goto(usize),
}

/// Active-index cursor of a cyclic image viewer.
///
/// Images and their indicators are both marked from [`CarouselState::active`],
/// so the two sets cannot drift apart. A fresh state always starts at 0.
///
/// # Example
/// ```
/// use zeta_ui::CarouselState;
///
/// let mut carousel = CarouselState::new(3);
/// carousel.prev();
/// assert_eq!(carousel.active(), 2);
/// carousel.next();
/// assert_eq!(carousel.active(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    active: usize,
    len: usize,
}

impl CarouselState {
    /// Create a carousel over `len` images, positioned on the first one.
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    /// Index of the active image.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether prev/next controls and indicators are worth showing.
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.active
    }

    /// Active flag per position, shared by images and indicators.
    pub fn marks(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.is_active(i))
    }

    /// Advance one position, wrapping to the start.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
        self.active
    }

    /// Step back one position, wrapping to the end.
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
        self.active
    }

    /// Jump to `index`. Out-of-range indices leave the state untouched.
    pub fn goto(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.active = index;
            Some(index)
        } else {
            None
        }
    }

    /// Apply a transition, returning the new active index if it was valid.
    pub fn apply(&mut self, transition: Transition) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match transition {
            Transition::Next => Some(self.next()),
            Transition::Prev => Some(self.prev()),
            Transition::Goto(index) => self.goto(index),
        }
    }
}

// =============================================================================
// Scroll lock
// =============================================================================

/// Inline body styles that pin the page at a scroll offset.
///
/// A fixed-position body with a negative `top` keeps the page visually where
/// it was while preventing any scroll, touch-drag included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLock {
    pub offset: i32,
}

impl BodyLock {
    /// Property/value pairs to set on the body, in [`SCROLL_LOCK_PROPERTIES`] order.
    pub fn styles(&self) -> [(&'static str, String); 5] {
        let [position, top, left, right, width] = SCROLL_LOCK_PROPERTIES;
        [
            (position, "fixed".to_string()),
            (top, format!("-{}px", self.offset)),
            (left, "0".to_string()),
            (right, "0".to_string()),
            (width, "100%".to_string()),
        ]
    }
}

/// Records the page offset while an overlay is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollLock {
    locked_offset: Option<i32>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `offset` and return the styles that pin the body there.
    pub fn engage(&mut self, offset: i32) -> BodyLock {
        let offset = offset.max(0);
        self.locked_offset = Some(offset);
        BodyLock { offset }
    }

    /// Release the lock, returning the offset to scroll back to.
    pub fn release(&mut self) -> Option<i32> {
        self.locked_offset.take()
    }

    pub fn is_engaged(&self) -> bool {
        self.locked_offset.is_some()
    }

    pub fn locked_offset(&self) -> Option<i32> {
        self.locked_offset
    }
}

// =============================================================================
// Modal
// =============================================================================

/// What to put back when a modal closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restore<F> {
    /// Element that held focus before the modal opened
    pub focus: Option<F>,
    /// Page offset recorded when the scroll lock engaged
    pub scroll_offset: i32,
}

/// Open/closed lifecycle of the single detail overlay.
///
/// `C` is whatever identifies the shown content, `F` is the host's handle for a
/// focusable element.
#[derive(Debug, Clone)]
pub struct ModalState<C, F> {
    is_open: bool,
    content: Option<C>,
    previously_focused: Option<F>,
    scroll_lock: ScrollLock,
}

impl<C, F> Default for ModalState<C, F> {
    fn default() -> Self {
        Self {
            is_open: false,
            content: None,
            previously_focused: None,
            scroll_lock: ScrollLock::default(),
        }
    }
}

impl<C, F> ModalState<C, F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Content currently shown, `None` while closed.
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn previously_focused(&self) -> Option<&F> {
        self.previously_focused.as_ref()
    }

    pub fn locked_offset(&self) -> Option<i32> {
        self.scroll_lock.locked_offset()
    }

    /// Show `content`.
    ///
    /// From closed this captures `focused`, engages the scroll lock at
    /// `scroll_offset` and returns the body lock to apply. While already open
    /// only the content is replaced; the original focus and offset are kept
    /// so closing still returns the page to where it was before the overlay.
    pub fn open(&mut self, content: C, focused: Option<F>, scroll_offset: i32) -> Option<BodyLock> {
        self.content = Some(content);
        if self.is_open {
            return None;
        }
        self.is_open = true;
        self.previously_focused = focused;
        Some(self.scroll_lock.engage(scroll_offset))
    }

    /// Hide the overlay. Returns `None` when it was already closed.
    pub fn close(&mut self) -> Option<Restore<F>> {
        if !self.is_open {
            return None;
        }
        self.is_open = false;
        self.content = None;
        let scroll_offset = self.scroll_lock.release().unwrap_or(0);
        Some(Restore {
            focus: self.previously_focused.take(),
            scroll_offset,
        })
    }
}

// =============================================================================
// Chips
// =============================================================================

/// Mutually exclusive selection over a fixed group of controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipGroup {
    len: usize,
    active: Option<usize>,
}

impl ChipGroup {
    /// Create a group of `len` chips; an out-of-range `active` is dropped.
    pub fn new(len: usize, active: Option<usize>) -> Self {
        Self {
            len,
            active: active.filter(|&i| i < len),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Make `index` the only active chip. Returns false if it does not exist.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.active = Some(index);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_starts_at_zero() {
        let state = CarouselState::new(4);
        assert_eq!(state.active(), 0);
        assert_eq!(state.marks().collect::<Vec<_>>(), vec![true, false, false, false]);
    }

    #[test]
    fn test_carousel_wraps() {
        let mut state = CarouselState::new(3);
        assert_eq!(state.next(), 1);
        assert_eq!(state.next(), 2);
        assert_eq!(state.next(), 0);
        assert_eq!(state.prev(), 2);
    }

    #[test]
    fn test_next_prev_are_inverse() {
        for len in 1..=7 {
            for start in 0..len {
                let mut state = CarouselState::new(len);
                state.goto(start);
                state.next();
                state.prev();
                assert_eq!(state.active(), start, "prev(next) len={len} start={start}");
                state.prev();
                state.next();
                assert_eq!(state.active(), start, "next(prev) len={len} start={start}");
            }
        }
    }

    #[test]
    fn test_goto_rejects_out_of_range() {
        let mut state = CarouselState::new(2);
        assert_eq!(state.goto(1), Some(1));
        assert_eq!(state.goto(2), None);
        assert_eq!(state.active(), 1);
    }

    #[test]
    fn test_exactly_one_mark_after_transitions() {
        let mut state = CarouselState::new(5);
        for transition in [
            Transition::Next,
            Transition::Goto(3),
            Transition::Prev,
            Transition::Prev,
            Transition::Goto(9),
            Transition::Next,
        ] {
            state.apply(transition);
            let marks: Vec<bool> = state.marks().collect();
            assert_eq!(marks.iter().filter(|m| **m).count(), 1);
            assert!(marks[state.active()]);
        }
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut state = CarouselState::new(0);
        assert_eq!(state.apply(Transition::Next), None);
        assert_eq!(state.marks().count(), 0);
        assert!(!state.is_navigable());
    }

    #[test]
    fn test_body_lock_styles() {
        let lock = BodyLock { offset: 640 };
        let styles = lock.styles();
        assert_eq!(styles[0], ("position", "fixed".to_string()));
        assert_eq!(styles[1], ("top", "-640px".to_string()));
        assert_eq!(styles[4], ("width", "100%".to_string()));
    }

    #[test]
    fn test_scroll_lock_release_once() {
        let mut lock = ScrollLock::new();
        lock.engage(320);
        assert!(lock.is_engaged());
        assert_eq!(lock.release(), Some(320));
        assert_eq!(lock.release(), None);
    }

    #[test]
    fn test_modal_open_close_restores() {
        let mut modal: ModalState<usize, &str> = ModalState::new();
        let lock = modal.open(3, Some("card-3"), 1200);
        assert_eq!(lock, Some(BodyLock { offset: 1200 }));
        assert!(modal.is_open());
        assert_eq!(modal.content(), Some(&3));

        let restore = modal.close().unwrap();
        assert_eq!(restore.focus, Some("card-3"));
        assert_eq!(restore.scroll_offset, 1200);
        assert!(!modal.is_open());
        assert_eq!(modal.content(), None);
    }

    #[test]
    fn test_modal_close_when_closed_is_noop() {
        let mut modal: ModalState<usize, &str> = ModalState::new();
        assert!(modal.close().is_none());
        modal.open(0, None, 0);
        assert!(modal.close().is_some());
        assert!(modal.close().is_none());
    }

    #[test]
    fn test_modal_reopen_keeps_original_focus() {
        let mut modal: ModalState<usize, &str> = ModalState::new();
        modal.open(1, Some("card-1"), 80);
        assert_eq!(modal.open(2, Some("close-button"), 0), None);
        assert_eq!(modal.content(), Some(&2));

        let restore = modal.close().unwrap();
        assert_eq!(restore.focus, Some("card-1"));
        assert_eq!(restore.scroll_offset, 80);
    }

    #[test]
    fn test_chip_group_exclusive() {
        let mut chips = ChipGroup::new(3, Some(0));
        assert!(chips.set_active(2));
        assert!(chips.is_active(2));
        assert!(!chips.is_active(0));
        assert!(!chips.set_active(3));
        assert_eq!(chips.active(), Some(2));
    }

    #[test]
    fn test_chip_group_drops_invalid_initial() {
        let chips = ChipGroup::new(2, Some(5));
        assert_eq!(chips.active(), None);
    }
}
