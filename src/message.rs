//! Message and effect types for the site.
//!
//! Page events become messages; [`crate::SiteApp`] answers each with the
//! effects the browser binding must perform, in order.

use zeta_ui::{BodyLock, CarouselHit, Key, ModalHit};

use crate::contact::ContactForm;
use crate::views::{CardView, DetailView, MainImage};

/// Messages that can be sent to update site state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Filters
    /// Filter chip clicked
    ChipSelected(usize),

    // Grid
    /// Click somewhere on a card
    CardClicked { card: usize, hit: CarouselHit },
    /// Key pressed while focus is on or inside a card
    CardKey {
        card: usize,
        key: Key,
        hit: CarouselHit,
    },

    // Modal
    /// Click inside the modal overlay
    ModalClicked(ModalHit),
    /// Key pressed anywhere on the page
    KeyPressed(Key),

    // Contact
    /// Contact form submitted
    ContactSubmitted(ContactForm),

    // Nav
    /// Mobile nav toggle clicked
    NavToggled,
    /// A nav link was followed
    NavLinkClicked,
}

/// Page side effects requested by an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<F> {
    /// Replace the grid's cards
    RenderGrid(Vec<CardView>),
    /// Make one chip the only active chip
    ActivateChip(usize),
    /// Mark image and indicator `active` in a card's carousel
    SetCarouselActive { card: usize, active: usize },
    /// Fill modal text, main image and thumbnails
    PopulateModal(DetailView),
    /// Swap the main image and make one thumbnail the only active one
    SelectThumbnail { index: usize, image: MainImage },
    /// Make the modal visible to sight and assistive technology
    ShowModal,
    /// Pin the body at its current offset
    LockScroll(BodyLock),
    /// Move focus to the close control, or the modal itself
    FocusModal,
    /// Hide the modal
    HideModal,
    /// Unpin the body and scroll back to `offset`
    UnlockScroll { offset: i32 },
    /// Give focus back to an element
    RestoreFocus(F),
    /// Navigate the window to a URL
    Navigate(String),
    /// Expand or collapse the mobile nav
    SetNavOpen(bool),
}
