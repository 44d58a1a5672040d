//! Catalog fetched with a single HTTP GET.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::catalog::source::{CatalogError, CatalogSource, parse_records};
use crate::catalog::types::ToolRecord;

pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<ToolRecord>, CatalogError> {
        info!("Fetching catalog: GET {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog request error: {} - {}", status, message);
            return Err(CatalogError::Http { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        parse_records(&body)
    }
}
