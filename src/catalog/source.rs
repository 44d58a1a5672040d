use std::fmt;

use async_trait::async_trait;
use log::{error, info, warn};

use super::sources::{FileSource, HttpSource};
use super::types::{Catalog, ToolRecord};

/// Errors that can occur while fetching the catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Reading a local catalog file failed.
    Io(std::io::Error),
    /// Network-level failure (DNS, connection refused, timeout).
    Network(String),
    /// Server answered with a non-success status.
    Http { status: u16, message: String },
    /// Body was not a JSON array of tool records.
    Parse(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Network(msg) => write!(f, "network error: {msg}"),
            CatalogError::Http { status, message } => {
                write!(f, "catalog request failed (HTTP {status}): {message}")
            }
            CatalogError::Parse(msg) => write!(f, "catalog parse error: {msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Somewhere a catalog can be read from, once.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<ToolRecord>, CatalogError>;
}

/// Picks a source implementation from a location string.
/// `http://` and `https://` go over the network; anything else is a file path.
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpSource::new(location.to_string()))
    } else {
        Box::new(FileSource::new(location))
    }
}

/// Parses a JSON array of records. A record that doesn't fit the model is
/// dropped with a warning; only a body that isn't an array is an error.
pub(crate) fn parse_records(body: &str) -> Result<Vec<ToolRecord>, CatalogError> {
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let total = entries.len();
    let records: Vec<ToolRecord> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping catalog entry {}: {}", index, e);
                None
            }
        })
        .collect();

    if records.len() < total {
        warn!("Dropped {} of {} catalog entries", total - records.len(), total);
    }
    Ok(records)
}

/// Fetch the catalog, degrading to an empty one on any failure.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.fetch().await {
        Ok(records) => {
            info!("Loaded {} tools from {}", records.len(), source.describe());
            Catalog::new(records)
        }
        Err(e) => {
            error!("Failed to load catalog from {}: {}", source.describe(), e);
            Catalog::default()
        }
    }
}
