//! Project card view-model.
//!
//! A card is built from a record and the card's carousel state; the markup
//! renderer and the browser binding both consume the same structure.

use zeta_ui::CarouselState;

use crate::model::ProjectRecord;

/// One carousel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub active: bool,
}

/// One position indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorView {
    pub label: String,
    pub active: bool,
}

/// The carousel region of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub label: String,
    pub images: Vec<ImageView>,
    pub indicators: Vec<IndicatorView>,
    /// Prev/next and indicators are hidden when there is nothing to cycle
    pub controls_visible: bool,
}

impl CarouselView {
    fn build(record: &ProjectRecord, state: &CarouselState) -> Self {
        let images = record
            .card_images()
            .into_iter()
            .zip(state.marks())
            .enumerate()
            .map(|(i, (src, active))| ImageView {
                src: src.to_string(),
                alt: format!("{} image {}", record.title, i + 1),
                active,
            })
            .collect();
        let indicators = state
            .marks()
            .enumerate()
            .map(|(i, active)| IndicatorView {
                label: format!("Go to image {}", i + 1),
                active,
            })
            .collect();

        Self {
            label: format!("{} image carousel", record.title),
            images,
            indicators,
            controls_visible: state.is_navigable(),
        }
    }
}

/// Everything needed to draw one project card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Position in the grid
    pub index: usize,
    pub aria_label: String,
    /// Raw category, written to `data-category`
    pub category: String,
    pub carousel: CarouselView,
    pub title: String,
    pub subtitle: String,
    pub badge: String,
}

impl CardView {
    pub fn build(index: usize, record: &ProjectRecord, state: &CarouselState) -> Self {
        Self {
            index,
            aria_label: format!("Open project: {}", record.title),
            category: record.category().to_string(),
            carousel: CarouselView::build(record, state),
            title: record.title.clone(),
            subtitle: record.subtitle().to_string(),
            badge: record.category().to_string(),
        }
    }
}
