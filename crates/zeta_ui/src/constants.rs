//! Centralized constants for zeta_ui
//!
//! Page selectors the hit classifiers look for, and the inline style values
//! the scroll lock pins the page body with.

// =============================================================================
// Selectors
// =============================================================================

/// Selectors for regions inside a project card.
pub mod card {
    /// The card itself
    pub const CARD: &str = ".project";
    /// Carousel region (images, controls and indicators)
    pub const MEDIA: &str = ".project__media";
    /// One carousel image
    pub const IMAGE: &str = ".carousel__img";
    /// Previous-image control
    pub const PREV: &str = ".carousel__btn.prev";
    /// Next-image control
    pub const NEXT: &str = ".carousel__btn.next";
    /// Position indicator, carries `data-index`
    pub const INDICATOR: &str = ".carousel__dot";
}

/// Selectors for regions inside the detail modal.
pub mod modal {
    /// Any close affordance
    pub const CLOSE: &str = "[data-close]";
    /// Thumbnail button, carries `data-index`
    pub const THUMB: &str = ".thumb";
    /// Content panel; clicks outside it close the modal
    pub const PANEL: &str = ".modal__panel";
}

// =============================================================================
// Classes & attributes
// =============================================================================

/// Class marking the active image, indicator, thumbnail, chip or open overlay
pub const ACTIVE_CLASS: &str = "is-active";

/// Class marking an open modal or nav
pub const OPEN_CLASS: &str = "is-open";

/// Class added to the body while the scroll lock is engaged
pub const SCROLL_LOCK_CLASS: &str = "modal-open";

/// Attribute carrying a control's position within its group
pub const INDEX_ATTRIBUTE: &str = "data-index";

// =============================================================================
// Scroll lock
// =============================================================================

/// Body style properties written by the scroll lock, cleared on release
pub const SCROLL_LOCK_PROPERTIES: [&str; 5] = ["position", "top", "left", "right", "width"];
