use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use log::warn;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Pricing tier of a tool as published in the catalog.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    #[serde(rename = "free")]
    Free,
    #[serde(rename = "freemium")]
    Freemium,
    #[serde(rename = "paid")]
    Paid,
    /// Any value the catalog uses that we don't recognise.
    #[serde(other)]
    Unknown,
}

impl Price {
    /// Short badge text for list rows.
    pub fn label(self) -> &'static str {
        match self {
            Price::Free => "Free",
            Price::Freemium => "Freemium",
            Price::Paid => "Paid",
            Price::Unknown => "?",
        }
    }

    /// Longer wording used in the detail view.
    pub fn description(self) -> &'static str {
        match self {
            Price::Free => "Completely free",
            Price::Freemium => "Free + paid plans",
            Price::Paid => "Paid only",
            Price::Unknown => "Pricing unknown",
        }
    }

    /// True for tiers that can be used without paying.
    pub fn is_free(self) -> bool {
        matches!(self, Price::Free | Price::Freemium)
    }
}

/// One pricing plan, e.g. `("Pro", "$20/month")`.
pub type PricingPlan = (String, String);

/// A single catalog entry. Read-only once loaded.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    pub id: u32,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub category: String,
    pub price: Price,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    /// Plans in the order the catalog lists them.
    #[serde(default, deserialize_with = "ordered_plans")]
    pub pricing_details: Option<Vec<PricingPlan>>,
    #[serde(default)]
    pub pros: Option<Vec<String>>,
    #[serde(default)]
    pub cons: Option<Vec<String>>,
    #[serde(default)]
    pub recommended_for: Option<Vec<String>>,
}

impl ToolRecord {
    /// Parses `release_date`. Accepts `YYYY-MM-DD`, `YYYY-MM` and `YYYY`.
    pub fn released_on(&self) -> Option<NaiveDate> {
        let raw = self.release_date.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d"))
            .or_else(|_| NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d"))
            .ok()
    }

    /// Lowercased haystack for free-text search: name, description, tags.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.tags.join(" ")).to_lowercase()
    }
}

fn ordered_plans<'de, D>(deserializer: D) -> Result<Option<Vec<PricingPlan>>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PlansVisitor;

    impl<'de> Visitor<'de> for PlansVisitor {
        type Value = Option<Vec<PricingPlan>>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of plan name to description")
        }

        fn visit_none<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_map(self)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut plans = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((plan, detail)) = map.next_entry::<String, String>()? {
                plans.push((plan, detail));
            }
            Ok(Some(plans))
        }
    }

    deserializer.deserialize_option(PlansVisitor)
}

/// The immutable record set the browser works over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<ToolRecord>,
}

impl Catalog {
    /// Builds a catalog, keeping the first record for any repeated id.
    pub fn new(records: Vec<ToolRecord>) -> Self {
        let mut seen = HashSet::with_capacity(records.len());
        let records = records
            .into_iter()
            .filter(|record| {
                let fresh = seen.insert(record.id);
                if !fresh {
                    warn!("Duplicate tool id {} ({}), keeping first", record.id, record.name);
                }
                fresh
            })
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ToolRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for record in &self.records {
            if !out.contains(&record.category.as_str()) {
                out.push(&record.category);
            }
        }
        out
    }

    /// Number of tools usable without paying (free or freemium).
    pub fn free_count(&self) -> usize {
        self.records.iter().filter(|r| r.price.is_free()).count()
    }

    /// The first `limit` popular tools, in catalog order.
    pub fn featured(&self, limit: usize) -> Vec<&ToolRecord> {
        self.records.iter().filter(|r| r.popular).take(limit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_record_parses_camel_case_and_optionals() {
        let json = r#"{
            "id": 7,
            "name": "Writer",
            "description": "Drafts text",
            "icon": "W",
            "category": "writing",
            "price": "freemium",
            "tags": ["text", "blog"],
            "link": "https://example.com",
            "popular": true,
            "releaseDate": "2023-03-14",
            "company": "Acme",
            "pricingDetails": {"Free": "10 docs", "Pro": "$20/month", "Team": "$50/month"},
            "pros": ["fast"],
            "recommendedFor": ["bloggers"]
        }"#;
        let r: ToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.id, 7);
        assert_eq!(r.price, Price::Freemium);
        assert_eq!(r.company.as_deref(), Some("Acme"));
        assert_eq!(r.cons, None);
        assert_eq!(r.recommended_for, Some(vec!["bloggers".to_string()]));
        let plans = r.pricing_details.unwrap();
        let names: Vec<&str> = plans.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["Free", "Pro", "Team"]);
    }

    #[test]
    fn test_unknown_price_does_not_fail_parse() {
        let json = r#"{"id":1,"name":"X","description":"","category":"c","price":"enterprise"}"#;
        let r: ToolRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.price, Price::Unknown);
        assert!(!r.popular);
        assert!(r.tags.is_empty());
    }

    #[test]
    fn test_released_on_formats() {
        let mut r = record(1, "A", Price::Free, false);
        r.release_date = Some("2024-05-02".into());
        assert_eq!(r.released_on(), NaiveDate::from_ymd_opt(2024, 5, 2));
        r.release_date = Some("2024-05".into());
        assert_eq!(r.released_on(), NaiveDate::from_ymd_opt(2024, 5, 1));
        r.release_date = Some("2022".into());
        assert_eq!(r.released_on(), NaiveDate::from_ymd_opt(2022, 1, 1));
        r.release_date = Some("soon".into());
        assert_eq!(r.released_on(), None);
        r.release_date = None;
        assert_eq!(r.released_on(), None);
    }

    #[test]
    fn test_catalog_drops_duplicate_ids() {
        let catalog = Catalog::new(vec![
            record(1, "First", Price::Free, false),
            record(1, "Second", Price::Paid, false),
            record(2, "Other", Price::Paid, false),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().name, "First");
    }

    #[test]
    fn test_free_count_includes_freemium() {
        let catalog = Catalog::new(vec![
            record(1, "A", Price::Free, false),
            record(2, "B", Price::Freemium, false),
            record(3, "C", Price::Paid, false),
        ]);
        assert_eq!(catalog.free_count(), 2);
    }

    #[test]
    fn test_featured_takes_popular_in_order() {
        let catalog = Catalog::new(vec![
            record(1, "A", Price::Free, true),
            record(2, "B", Price::Free, false),
            record(3, "C", Price::Free, true),
            record(4, "D", Price::Free, true),
        ]);
        let ids: Vec<u32> = catalog.featured(2).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let mut a = record(1, "A", Price::Free, false);
        a.category = "video".into();
        let mut b = record(2, "B", Price::Free, false);
        b.category = "text".into();
        let mut c = record(3, "C", Price::Free, false);
        c.category = "video".into();
        let catalog = Catalog::new(vec![a, b, c]);
        assert_eq!(catalog.categories(), vec!["video", "text"]);
    }
}
