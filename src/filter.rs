//! Category filter chips.

use zeta_ui::ChipGroup;

use crate::constants::ALL_FILTER;
use crate::model::ProjectRecord;

/// What a chip selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Every project
    All,
    /// Projects whose category equals the key exactly
    Category(String),
}

impl Filter {
    /// Interpret a chip's `data-filter` value. Absent, empty and `all` mean no filtering.
    pub fn from_key(key: Option<&str>) -> Self {
        match key {
            None | Some("") | Some(ALL_FILTER) => Filter::All,
            Some(category) => Filter::Category(category.to_string()),
        }
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(category) => record.category.as_deref() == Some(category.as_str()),
        }
    }
}

/// The row of filter chips, exactly one of which is active.
#[derive(Debug, Clone, Default)]
pub struct FilterBar {
    filters: Vec<Filter>,
    chips: ChipGroup,
}

impl FilterBar {
    /// Build from each chip's key, in page order, and the initially active chip.
    pub fn new<'a>(keys: impl IntoIterator<Item = Option<&'a str>>, active: Option<usize>) -> Self {
        let filters: Vec<Filter> = keys.into_iter().map(Filter::from_key).collect();
        let chips = ChipGroup::new(filters.len(), active);
        Self { filters, chips }
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.chips.active()
    }

    /// The filter of the active chip; `All` when none is active.
    pub fn current(&self) -> &Filter {
        self.chips
            .active()
            .and_then(|i| self.filters.get(i))
            .unwrap_or(&Filter::All)
    }

    /// Activate chip `index`, deactivating the rest. Returns its filter.
    pub fn select(&mut self, index: usize) -> Option<&Filter> {
        if !self.chips.set_active(index) {
            log::warn!("⚠️  No filter chip at index {}", index);
            return None;
        }
        let filter = &self.filters[index];
        log::debug!("🔎 Filter selected: {:?}", filter);
        Some(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(Filter::from_key(None), Filter::All);
        assert_eq!(Filter::from_key(Some("")), Filter::All);
        assert_eq!(Filter::from_key(Some("all")), Filter::All);
        assert_eq!(
            Filter::from_key(Some("Interior")),
            Filter::Category("Interior".to_string())
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        let record = ProjectRecord::new("A", "a.jpg").with_category("Interior");
        assert!(Filter::Category("Interior".to_string()).matches(&record));
        assert!(!Filter::Category("interior".to_string()).matches(&record));
        let uncategorized = ProjectRecord::new("B", "b.jpg");
        assert!(!Filter::Category("Interior".to_string()).matches(&uncategorized));
        assert!(Filter::All.matches(&record));
    }

    #[test]
    fn test_select_switches_active_chip() {
        let mut bar = FilterBar::new([Some("all"), Some("Interior"), None], Some(0));
        assert_eq!(bar.current(), &Filter::All);

        assert_eq!(bar.select(1), Some(&Filter::Category("Interior".to_string())));
        assert_eq!(bar.active(), Some(1));

        assert_eq!(bar.select(2), Some(&Filter::All));
        assert_eq!(bar.active(), Some(2));

        assert_eq!(bar.select(9), None);
        assert_eq!(bar.active(), Some(2));
    }

    #[test]
    fn test_no_active_chip_means_all() {
        let bar = FilterBar::new([Some("Interior")], None);
        assert_eq!(bar.current(), &Filter::All);
    }
}
