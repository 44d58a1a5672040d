//! # Application State
//!
//! Core browsing state for toolshelf. Domain logic only; presentation state
//! (cursor position, open overlays, toasts) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Catalog            // loaded once, empty until then
//! ├── catalog_loaded: bool        // CatalogLoaded seen
//! ├── filter: FilterState         // category / price / search / sort
//! ├── default_sort: SortOrder     // what ResetFilters returns to
//! ├── compare_mode: bool          // selection instead of detail view
//! ├── selection: SelectionSet     // compare picks, ≤ 3
//! ├── favorites: Favorites        // persisted ids
//! └── status_message: String      // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::catalog::{Catalog, ToolRecord};
use crate::core::favorites::Favorites;
use crate::core::filter::{self, FilterState, SortOrder};
use crate::core::selection::SelectionSet;

pub struct App {
    pub catalog: Catalog,
    pub catalog_loaded: bool,
    pub filter: FilterState,
    pub default_sort: SortOrder,
    pub compare_mode: bool,
    pub selection: SelectionSet,
    pub favorites: Favorites,
    pub status_message: String,
}

impl App {
    pub fn new(favorites: Favorites) -> Self {
        Self {
            catalog: Catalog::default(),
            catalog_loaded: false,
            filter: FilterState::default(),
            default_sort: SortOrder::default(),
            compare_mode: false,
            selection: SelectionSet::new(),
            favorites,
            status_message: String::from("Loading catalog..."),
        }
    }

    /// Starts with `sort` instead of `popular`, and resets back to it.
    pub fn with_default_sort(mut self, sort: SortOrder) -> Self {
        self.default_sort = sort;
        self.filter = FilterState::sorted_by(sort);
        self
    }

    /// The filtered, ordered list for the current filter state.
    pub fn visible(&self) -> Vec<&ToolRecord> {
        filter::visible(&self.catalog, &self.filter)
    }

    /// Selected records in pick order; ids missing from the catalog are skipped.
    pub fn selected_records(&self) -> Vec<&ToolRecord> {
        self.selection
            .ids()
            .iter()
            .filter_map(|&id| self.catalog.get(id))
            .collect()
    }

    /// Favorited records in catalog order.
    pub fn favorite_records(&self) -> Vec<&ToolRecord> {
        self.catalog
            .records()
            .iter()
            .filter(|r| self.favorites.contains(r.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use crate::test_support::{catalog, record, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.catalog.is_empty());
        assert!(!app.catalog_loaded);
        assert!(!app.compare_mode);
        assert_eq!(app.filter, FilterState::default());
        assert!(app.visible().is_empty());
    }

    #[test]
    fn test_with_default_sort() {
        let app = test_app().with_default_sort(SortOrder::Newest);
        assert_eq!(app.filter.sort, SortOrder::Newest);
        assert_eq!(app.default_sort, SortOrder::Newest);
    }

    #[test]
    fn test_favorite_records_in_catalog_order() {
        let mut app = test_app();
        app.catalog = catalog(vec![
            record(1, "A", Price::Free, false),
            record(2, "B", Price::Free, false),
            record(3, "C", Price::Free, false),
        ]);
        app.favorites.toggle(3);
        app.favorites.toggle(1);
        app.favorites.toggle(99);
        let ids: Vec<u32> = app.favorite_records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
