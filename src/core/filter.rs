//! # Filter/Sort Engine
//!
//! Derives the visible list from the catalog and a [`FilterState`].
//! Pure: no I/O, no hidden state, same inputs give the same ordering.
//!
//! ```text
//! catalog ─► category ─► price ─► search ─► stable sort ─► visible
//! ```
//!
//! The three predicates are ANDed. Sorting is always stable, so any tie
//! falls back to catalog order.

use std::cmp::Ordering;

use clap::ValueEnum;
use icu_collator::{Collator, CollatorOptions};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Price, ToolRecord};

/// Which category the list is narrowed to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parses the `"all"` sentinel, anything else is a category name.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(name) => name,
        }
    }

    /// Cycles All → first category → … → last category → All.
    pub fn next(&self, categories: &[&str]) -> Self {
        let position = match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(name) => categories.iter().position(|c| c == name),
        };
        let next = match position {
            None => 0,
            Some(i) => i + 1,
        };
        match categories.get(next) {
            Some(category) => CategoryFilter::Only(category.to_string()),
            None => CategoryFilter::All,
        }
    }

    /// Cycles in the opposite direction to [`next`](Self::next).
    pub fn prev(&self, categories: &[&str]) -> Self {
        let position = match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(name) => categories.iter().position(|c| c == name),
        };
        match position {
            None => categories
                .last()
                .map(|c| CategoryFilter::Only(c.to_string()))
                .unwrap_or_default(),
            Some(0) => CategoryFilter::All,
            Some(i) => CategoryFilter::Only(categories[i - 1].to_string()),
        }
    }

    fn matches(&self, record: &ToolRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => record.category == *name,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PriceFilter {
    #[default]
    All,
    /// Free and freemium tools.
    Free,
    /// Paid-only tools.
    Paid,
}

impl PriceFilter {
    pub fn next(self) -> PriceFilter {
        match self {
            PriceFilter::All => PriceFilter::Free,
            PriceFilter::Free => PriceFilter::Paid,
            PriceFilter::Paid => PriceFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceFilter::All => "All",
            PriceFilter::Free => "Free",
            PriceFilter::Paid => "Paid",
        }
    }

    fn matches(self, price: Price) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Free => price.is_free(),
            PriceFilter::Paid => price == Price::Paid,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Popular tools first, catalog order otherwise.
    #[default]
    Popular,
    /// Ascending by name.
    Name,
    /// Most recently released first.
    Newest,
}

impl SortOrder {
    pub fn next(self) -> SortOrder {
        match self {
            SortOrder::Popular => SortOrder::Name,
            SortOrder::Name => SortOrder::Newest,
            SortOrder::Newest => SortOrder::Popular,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Popular => "Popular",
            SortOrder::Name => "Name",
            SortOrder::Newest => "Newest",
        }
    }
}

/// The active category/price/search/sort selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub price: PriceFilter,
    /// Raw search text as typed; matching is case-insensitive.
    pub search: String,
    pub sort: SortOrder,
}

impl FilterState {
    /// Filter state with a non-default sort but nothing narrowed.
    pub fn sorted_by(sort: SortOrder) -> Self {
        Self {
            sort,
            ..Default::default()
        }
    }

    /// True when no predicate narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All
            && self.price == PriceFilter::All
            && self.search.is_empty()
    }

    pub fn matches(&self, record: &ToolRecord) -> bool {
        self.category.matches(record)
            && self.price.matches(record.price)
            && matches_search(record, &self.search.to_lowercase())
    }
}

fn matches_search(record: &ToolRecord, needle: &str) -> bool {
    needle.is_empty() || record.search_text().contains(needle)
}

thread_local! {
    // Root-locale collation data is compiled in, so this only fails on a broken build.
    static COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!("Collator unavailable, falling back to case-folded order: {}", e);
                None
            }
        };
}

/// Locale-aware name ordering (Unicode root collation), raw text as the tie-break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| match collator {
            Some(collator) => collator.compare(a, b),
            None => a.to_lowercase().cmp(&b.to_lowercase()),
        })
        .then_with(|| a.cmp(b))
}

/// The ordered subset of `catalog` that `state` lets through.
pub fn visible<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a ToolRecord> {
    let needle = state.search.to_lowercase();
    let mut out: Vec<&ToolRecord> = catalog
        .records()
        .iter()
        .filter(|r| {
            state.category.matches(r) && state.price.matches(r.price) && matches_search(r, &needle)
        })
        .collect();

    match state.sort {
        // Stable partition: sort_by_key is stable, so each group keeps catalog order.
        SortOrder::Popular => out.sort_by_key(|r| !r.popular),
        SortOrder::Name => out.sort_by(|a, b| compare_names(&a.name, &b.name)),
        // Missing dates sort as None, which is below every Some.
        SortOrder::Newest => out.sort_by(|a, b| b.released_on().cmp(&a.released_on())),
    }
    out
}
