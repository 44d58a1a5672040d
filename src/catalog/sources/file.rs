//! Catalog read from a JSON file on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use log::debug;

use crate::catalog::source::{CatalogError, CatalogSource, parse_records};
use crate::catalog::types::ToolRecord;

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<ToolRecord>, CatalogError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(CatalogError::Io)?;
        debug!("Read {} bytes from {}", body.len(), self.path.display());
        parse_records(&body)
    }
}
