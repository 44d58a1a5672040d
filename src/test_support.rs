//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::catalog::{Catalog, Price, ToolRecord};
use crate::core::action::{Action, update};
use crate::core::favorites::{Favorites, MemoryStore};
use crate::core::state::App;

/// A minimal record: category "general", no tags, no optional fields.
pub fn record(id: u32, name: &str, price: Price, popular: bool) -> ToolRecord {
    ToolRecord {
        id,
        name: name.to_string(),
        description: format!("{name} tool"),
        icon: "*".to_string(),
        category: "general".to_string(),
        price,
        tags: Vec::new(),
        link: format!("https://example.com/{id}"),
        popular,
        release_date: None,
        company: None,
        detailed_description: None,
        pricing_details: None,
        pros: None,
        cons: None,
        recommended_for: None,
    }
}

pub fn catalog(records: Vec<ToolRecord>) -> Catalog {
    Catalog::new(records)
}

/// Creates a test App with in-memory favorites and no catalog.
pub fn test_app() -> App {
    App::new(Favorites::load(Box::new(MemoryStore::new())))
}

/// Creates a test App with `catalog` already installed.
pub fn loaded_app(catalog: Catalog) -> App {
    let mut app = test_app();
    update(&mut app, Action::CatalogLoaded(catalog));
    app
}
