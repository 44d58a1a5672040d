//! # Actions
//!
//! Everything the user can do to the browser becomes an `Action`.
//! Pick a category? That's `Action::SetCategory(..)`.
//! Catalog fetch finished? That's `Action::CatalogLoaded(catalog)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! telling the presentation layer what to do next (show a notice, open or
//! close the comparison view). The new visible list is always
//! `app.visible()`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::catalog::Catalog;
use crate::core::favorites::FavoriteOutcome;
use crate::core::filter::{CategoryFilter, FilterState, PriceFilter, SortOrder};
use crate::core::selection::{COMPARE_CAPACITY, SelectionOutcome};
use crate::core::state::App;

#[derive(Debug)]
pub enum Action {
    CatalogLoaded(Catalog),
    SetCategory(CategoryFilter),
    SetPrice(PriceFilter),
    SetSearch(String),
    SetSort(SortOrder),
    ResetFilters,
    ToggleCompareMode,
    ToggleSelection(u32),
    ClearComparison,
    ToggleFavorite(u32),
    OpenDetail(u32),
    Quit,
}

/// Side effect the presentation layer should carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Short user-facing notice (toast).
    Notify(String),
    /// Selection reached the compare threshold.
    OpenComparison,
    CloseComparison,
    OpenDetail(u32),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::CatalogLoaded(catalog) => {
            if app.catalog_loaded {
                warn!("Catalog already loaded, ignoring second load");
                return Effect::None;
            }
            info!("Catalog installed: {} tools", catalog.len());
            app.status_message = format!("{} tools", catalog.len());
            app.catalog = catalog;
            app.catalog_loaded = true;
            Effect::None
        }
        Action::SetCategory(category) => {
            app.filter.category = category;
            Effect::None
        }
        Action::SetPrice(price) => {
            app.filter.price = price;
            Effect::None
        }
        Action::SetSearch(text) => {
            app.filter.search = text;
            Effect::None
        }
        Action::SetSort(sort) => {
            app.filter.sort = sort;
            Effect::None
        }
        Action::ResetFilters => {
            app.filter = FilterState::sorted_by(app.default_sort);
            Effect::None
        }
        Action::ToggleCompareMode => {
            app.compare_mode = !app.compare_mode;
            if app.compare_mode {
                app.status_message = "Compare mode: pick up to 3 tools".to_string();
                Effect::None
            } else {
                app.selection.clear();
                app.status_message = format!("{} tools", app.catalog.len());
                Effect::CloseComparison
            }
        }
        Action::ToggleSelection(id) => {
            if !app.compare_mode || !app.catalog.contains(id) {
                return Effect::None;
            }
            match app.selection.toggle(id) {
                SelectionOutcome::Rejected => {
                    Effect::Notify(format!("You can compare at most {COMPARE_CAPACITY} tools"))
                }
                SelectionOutcome::Added | SelectionOutcome::Removed => {
                    if app.selection.ready_to_compare() {
                        Effect::OpenComparison
                    } else {
                        Effect::None
                    }
                }
            }
        }
        Action::ClearComparison => {
            app.selection.clear();
            Effect::CloseComparison
        }
        Action::ToggleFavorite(id) => {
            if !app.catalog.contains(id) {
                return Effect::None;
            }
            match app.favorites.toggle(id) {
                FavoriteOutcome::Favorited => Effect::Notify("Added to favorites ★".to_string()),
                FavoriteOutcome::Unfavorited => {
                    Effect::Notify("Removed from favorites".to_string())
                }
            }
        }
        Action::OpenDetail(id) => {
            if app.compare_mode || !app.catalog.contains(id) {
                return Effect::None;
            }
            Effect::OpenDetail(id)
        }
        Action::Quit => Effect::Quit,
    }
}
