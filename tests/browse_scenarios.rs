use toolshelf::catalog::{Catalog, Price, ToolRecord};
use toolshelf::core::action::{Action, Effect, update};
use toolshelf::core::favorites::{Favorites, FileStore, MemoryStore};
use toolshelf::core::filter::{CategoryFilter, PriceFilter, SortOrder};
use toolshelf::core::state::App;

// ============================================================================
// Helper Functions
// ============================================================================

fn tool(id: u32, name: &str, category: &str, price: Price, popular: bool, released: Option<&str>) -> ToolRecord {
    ToolRecord {
        id,
        name: name.to_string(),
        description: format!("{name} for {category}"),
        icon: "*".to_string(),
        category: category.to_string(),
        price,
        tags: vec![category.to_string()],
        link: format!("https://tools.example/{id}"),
        popular,
        release_date: released.map(str::to_string),
        company: None,
        detailed_description: None,
        pricing_details: None,
        pros: None,
        cons: None,
        recommended_for: None,
    }
}

fn shelf() -> Catalog {
    Catalog::new(vec![
        tool(1, "Writer", "text", Price::Freemium, true, Some("2023-03-01")),
        tool(2, "painter", "image", Price::Paid, false, Some("2024-01-15")),
        tool(3, "Coder", "code", Price::Free, true, None),
        tool(4, "Narrator", "audio", Price::Paid, false, Some("2022")),
        tool(5, "Sketcher", "image", Price::Free, false, Some("2024-06")),
    ])
}

fn app_with(store: MemoryStore) -> App {
    let mut app = App::new(Favorites::load(Box::new(store)));
    update(&mut app, Action::CatalogLoaded(shelf()));
    app
}

fn visible_ids(app: &App) -> Vec<u32> {
    app.visible().iter().map(|r| r.id).collect()
}

// ============================================================================
// Filtering and Sorting
// ============================================================================

#[test]
fn test_default_view_lists_popular_first() {
    let app = app_with(MemoryStore::new());
    assert_eq!(visible_ids(&app), vec![1, 3, 2, 4, 5]);
}

#[test]
fn test_filters_combine() {
    let mut app = app_with(MemoryStore::new());
    update(&mut app, Action::SetCategory(CategoryFilter::Only("image".into())));
    assert_eq!(visible_ids(&app), vec![2, 5]);

    update(&mut app, Action::SetPrice(PriceFilter::Free));
    assert_eq!(visible_ids(&app), vec![5]);

    update(&mut app, Action::SetSearch("PAINT".into()));
    assert!(visible_ids(&app).is_empty());

    update(&mut app, Action::ResetFilters);
    assert_eq!(visible_ids(&app).len(), 5);
}

#[test]
fn test_sort_orders() {
    let mut app = app_with(MemoryStore::new());
    update(&mut app, Action::SetSort(SortOrder::Name));
    assert_eq!(visible_ids(&app), vec![3, 4, 2, 5, 1]);

    update(&mut app, Action::SetSort(SortOrder::Newest));
    assert_eq!(visible_ids(&app), vec![5, 2, 1, 4, 3]);
}

#[test]
fn test_reset_returns_to_configured_sort() {
    let store = MemoryStore::new();
    let mut app = App::new(Favorites::load(Box::new(store))).with_default_sort(SortOrder::Name);
    update(&mut app, Action::CatalogLoaded(shelf()));
    update(&mut app, Action::SetSort(SortOrder::Newest));
    update(&mut app, Action::ResetFilters);
    assert_eq!(app.filter.sort, SortOrder::Name);
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn test_compare_caps_at_three() {
    let mut app = app_with(MemoryStore::new());
    assert_eq!(update(&mut app, Action::ToggleSelection(1)), Effect::None);
    assert!(app.selection.is_empty(), "picking requires compare mode");

    update(&mut app, Action::ToggleCompareMode);
    assert_eq!(update(&mut app, Action::ToggleSelection(1)), Effect::None);
    assert_eq!(update(&mut app, Action::ToggleSelection(2)), Effect::OpenComparison);
    assert_eq!(update(&mut app, Action::ToggleSelection(3)), Effect::OpenComparison);

    let effect = update(&mut app, Action::ToggleSelection(4));
    assert_eq!(effect, Effect::Notify("You can compare at most 3 tools".into()));
    assert_eq!(app.selection.ids(), &[1, 2, 3]);

    update(&mut app, Action::ToggleSelection(2));
    assert_eq!(app.selection.ids(), &[1, 3]);
    let names: Vec<&str> = app.selected_records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Writer", "Coder"]);

    assert_eq!(update(&mut app, Action::ToggleCompareMode), Effect::CloseComparison);
    assert!(app.selection.is_empty());
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn test_favorites_write_through_to_store() {
    let store = MemoryStore::new();
    let mut app = app_with(store.clone());

    update(&mut app, Action::ToggleFavorite(5));
    update(&mut app, Action::ToggleFavorite(1));
    let names: Vec<&str> = app.favorite_records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Writer", "Sketcher"]);

    // A second session over the same store sees the same set
    let reopened = app_with(store);
    assert!(reopened.favorites.contains(1));
    assert!(reopened.favorites.contains(5));
    assert_eq!(reopened.favorites.len(), 2);
}

#[test]
fn test_favorites_survive_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = App::new(Favorites::load(Box::new(FileStore::new(dir.path()))));
    update(&mut app, Action::CatalogLoaded(shelf()));
    let effect = update(&mut app, Action::ToggleFavorite(3));
    assert_eq!(effect, Effect::Notify("Added to favorites ★".into()));
    assert!(dir.path().join("favorites.json").exists());

    let reloaded = Favorites::load(Box::new(FileStore::new(dir.path())));
    assert_eq!(reloaded.ids(), &[3]);
}

#[test]
fn test_corrupt_favorites_start_empty() {
    let app = app_with(MemoryStore::with_entry("favorites", "not json"));
    assert!(app.favorites.is_empty());
    assert!(app.favorite_records().is_empty());
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut app = app_with(MemoryStore::new());
    assert_eq!(update(&mut app, Action::ToggleFavorite(99)), Effect::None);
    assert_eq!(update(&mut app, Action::OpenDetail(99)), Effect::None);
    assert_eq!(update(&mut app, Action::OpenDetail(2)), Effect::OpenDetail(2));
}
