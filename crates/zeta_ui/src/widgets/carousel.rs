//! Carousel region inside a clickable card.
//!
//! The card opens its detail view on click, but the carousel nested inside it
//! owns every click that lands in its region: controls navigate, the bare
//! image area advances, and neither reaches the card. Rather than relying on
//! propagation order, a click is classified up front and the carousel reports
//! whether it captured it.

use crate::constants::card;
use crate::event::{EventStatus, HitTest};
use crate::state::{CarouselState, Transition};

/// Where a click landed relative to a card's carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselHit {
    /// Previous-image control
    Prev,
    /// Next-image control
    Next,
    /// Position indicator for an image
    Indicator(usize),
    /// Image area outside any control
    Image,
    /// Somewhere on the card outside the carousel
    Outside,
}

impl CarouselHit {
    /// Classify a click target by the card regions enclosing it.
    ///
    /// Controls are checked before the surrounding media region since they
    /// sit inside it. An indicator without a readable index counts as image
    /// area so it still stays inside the carousel.
    pub fn classify(target: &impl HitTest) -> Self {
        if target.within(card::PREV) {
            CarouselHit::Prev
        } else if target.within(card::NEXT) {
            CarouselHit::Next
        } else if let Some(index) = target.index_within(card::INDICATOR) {
            CarouselHit::Indicator(index)
        } else if target.within(card::MEDIA) {
            CarouselHit::Image
        } else {
            CarouselHit::Outside
        }
    }

    /// The navigation this click requests, if any.
    pub fn transition(self) -> Option<Transition> {
        match self {
            CarouselHit::Prev => Some(Transition::Prev),
            CarouselHit::Next | CarouselHit::Image => Some(Transition::Next),
            CarouselHit::Indicator(index) => Some(Transition::Goto(index)),
            CarouselHit::Outside => None,
        }
    }

    pub fn is_inside(self) -> bool {
        self != CarouselHit::Outside
    }
}

/// Offer a classified click to a carousel.
///
/// Every hit inside the region is captured, navigating when the carousel has
/// more than one image. Only [`CarouselHit::Outside`] is left for the card.
pub fn handle_click(state: &mut CarouselState, hit: CarouselHit) -> EventStatus {
    let Some(transition) = hit.transition() else {
        return EventStatus::Ignored;
    };
    if state.is_navigable() {
        if let Some(index) = state.apply(transition) {
            log::trace!("carousel {:?} -> image {}", transition, index);
        }
    }
    EventStatus::Captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::FakeTarget;

    #[test]
    fn test_classify_controls_before_media() {
        let prev = FakeTarget::new(&[card::PREV, card::MEDIA, card::CARD]);
        let next = FakeTarget::new(&[card::NEXT, card::MEDIA, card::CARD]);
        let dot = FakeTarget::new(&[card::INDICATOR, card::MEDIA, card::CARD]).with_index(2);
        assert_eq!(CarouselHit::classify(&prev), CarouselHit::Prev);
        assert_eq!(CarouselHit::classify(&next), CarouselHit::Next);
        assert_eq!(CarouselHit::classify(&dot), CarouselHit::Indicator(2));
    }

    #[test]
    fn test_classify_image_and_outside() {
        let image = FakeTarget::new(&[card::MEDIA, card::CARD]);
        let body = FakeTarget::new(&[card::CARD]);
        assert_eq!(CarouselHit::classify(&image), CarouselHit::Image);
        assert_eq!(CarouselHit::classify(&body), CarouselHit::Outside);
    }

    #[test]
    fn test_indicator_without_index_stays_inside() {
        let dot = FakeTarget::new(&[card::INDICATOR, card::MEDIA]);
        assert_eq!(CarouselHit::classify(&dot), CarouselHit::Image);
    }

    #[test]
    fn test_controls_are_captured() {
        let mut state = CarouselState::new(3);
        for hit in [
            CarouselHit::Prev,
            CarouselHit::Next,
            CarouselHit::Indicator(1),
            CarouselHit::Image,
        ] {
            assert_eq!(handle_click(&mut state, hit), EventStatus::Captured);
        }
        assert_eq!(handle_click(&mut state, CarouselHit::Outside), EventStatus::Ignored);
    }

    #[test]
    fn test_image_click_advances() {
        let mut state = CarouselState::new(2);
        handle_click(&mut state, CarouselHit::Image);
        assert_eq!(state.active(), 1);
        handle_click(&mut state, CarouselHit::Image);
        assert_eq!(state.active(), 0);
    }

    #[test]
    fn test_single_image_captures_without_moving() {
        let mut state = CarouselState::new(1);
        assert_eq!(handle_click(&mut state, CarouselHit::Next), EventStatus::Captured);
        assert_eq!(state.active(), 0);
    }
}
