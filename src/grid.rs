//! The project grid: one card per visible record.

use zeta_ui::CarouselState;

use crate::model::ProjectStore;
use crate::views::CardView;

/// A rendered card: which record it shows and where its carousel is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub project: usize,
    pub carousel: CarouselState,
}

/// Cards currently in the grid, in display order.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    cards: Vec<CardState>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the grid with fresh cards for `projects`, in order.
    ///
    /// Every render starts each carousel back at its first image. Indices not
    /// in the store are dropped.
    pub fn render(&mut self, store: &ProjectStore, projects: &[usize]) {
        self.cards = projects
            .iter()
            .filter_map(|&project| {
                store.get(project).map(|record| CardState {
                    project,
                    carousel: CarouselState::new(record.card_images().len()),
                })
            })
            .collect();
        log::debug!("🧱 Grid rendered with {} cards", self.cards.len());
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&CardState> {
        self.cards.get(index)
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut CardState> {
        self.cards.get_mut(index)
    }

    /// View-models for every card.
    pub fn views(&self, store: &ProjectStore) -> Vec<CardView> {
        self.cards
            .iter()
            .enumerate()
            .filter_map(|(index, card)| {
                store
                    .get(card.project)
                    .map(|record| CardView::build(index, record, &card.carousel))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectRecord;

    fn store() -> ProjectStore {
        ProjectStore::new(vec![
            ProjectRecord::new("A", "a.jpg"),
            ProjectRecord::new("B", "b.jpg").with_gallery(["1", "2", "3", "4", "5", "6"]),
            ProjectRecord::new("C", "c.jpg"),
        ])
    }

    #[test]
    fn test_render_in_list_order() {
        let store = store();
        let mut grid = Grid::new();
        grid.render(&store, &[2, 0]);
        let titles: Vec<String> = grid.views(&store).into_iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["C", "A"]);
    }

    #[test]
    fn test_render_is_fresh_each_time() {
        let store = store();
        let mut grid = Grid::new();
        grid.render(&store, &store.all());
        if let Some(card) = grid.card_mut(1) {
            card.carousel.next();
            card.carousel.next();
        }
        let first = grid.views(&store);
        assert!(first[1].carousel.images[2].active);

        grid.render(&store, &store.all());
        let second = grid.views(&store);
        assert!(second[1].carousel.images[0].active);

        grid.render(&store, &store.all());
        assert_eq!(grid.views(&store), second);
    }

    #[test]
    fn test_card_carousel_size_is_capped() {
        let store = store();
        let mut grid = Grid::new();
        grid.render(&store, &[1]);
        assert_eq!(grid.card(0).map(|c| c.carousel.len()), Some(5));
    }

    #[test]
    fn test_empty_store_renders_empty_grid() {
        let store = ProjectStore::default();
        let mut grid = Grid::new();
        grid.render(&store, &store.all());
        assert!(grid.is_empty());
        assert!(grid.views(&store).is_empty());
    }

    #[test]
    fn test_unknown_index_dropped() {
        let store = store();
        let mut grid = Grid::new();
        grid.render(&store, &[0, 42]);
        assert_eq!(grid.len(), 1);
    }
}
