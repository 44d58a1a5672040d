//! # Headless Listing
//!
//! `toolshelf --print` loads the catalog, applies the filters given on the
//! command line and writes the visible list to stdout without starting the
//! terminal UI. Uses the same `core::filter` engine as the TUI.

use std::io::{self, Write};

use crate::catalog::{Catalog, ToolRecord, load_catalog, source_for};
use crate::core::config::ResolvedConfig;
use crate::core::favorites::Favorites;
use crate::core::filter::{self, CategoryFilter, FilterState, PriceFilter};

/// Filter flags accepted alongside `--print`.
#[derive(Debug, Default, Clone)]
pub struct ListingFilters {
    pub category: Option<String>,
    pub price: Option<PriceFilter>,
    pub search: Option<String>,
}

impl ListingFilters {
    /// Build a `FilterState` starting from the configured sort.
    pub fn to_state(&self, config: &ResolvedConfig) -> FilterState {
        let mut state = FilterState::sorted_by(config.default_sort);
        if let Some(category) = &self.category {
            state.category = CategoryFilter::parse(category);
        }
        if let Some(price) = self.price {
            state.price = price;
        }
        if let Some(search) = &self.search {
            state.search = search.clone();
        }
        state
    }
}

fn format_row(record: &ToolRecord, favorited: bool) -> String {
    let star = if favorited { "★" } else { " " };
    let popular = if record.popular { "  [popular]" } else { "" };
    format!(
        "{star} {:>4}  {} {}  ({}, {}){popular}",
        record.id,
        record.icon,
        record.name,
        record.category,
        record.price.label(),
    )
}

/// Render the visible list as plain text, one tool per line plus a summary.
pub fn render_listing(catalog: &Catalog, state: &FilterState, favorites: &Favorites) -> String {
    let records = filter::visible(catalog, state);
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("No tools match the current filters.\n");
    }
    for record in &records {
        out.push_str(&format_row(record, favorites.contains(record.id)));
        out.push('\n');
    }
    out.push_str(&format!(
        "{} of {} tools | sort: {} | category: {} | price: {}\n",
        records.len(),
        catalog.len(),
        state.sort.label(),
        state.category.label(),
        state.price.label(),
    ));
    out
}

/// Load the catalog and print the filtered listing to stdout.
pub async fn print_listing(
    config: &ResolvedConfig,
    filters: &ListingFilters,
    favorites: &Favorites,
) -> io::Result<()> {
    let source = source_for(&config.catalog);
    let catalog = load_catalog(source.as_ref()).await;
    let state = filters.to_state(config);
    log::info!("Printing listing with filter {:?}", state);

    let listing = render_listing(&catalog, &state, favorites);
    let mut stdout = io::stdout().lock();
    stdout.write_all(listing.as_bytes())?;
    stdout.flush()
}
