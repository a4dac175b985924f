use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::models::{PriceEntry, PriceTable};
use crate::traits::price_source::PriceSource;

/// Default public price feed.
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

/// Price source fetching a JSON feed over HTTP.
///
/// The feed is an array of dated quotes; it is reduced to the latest
/// entry per currency. The table is fetched once and cached for the
/// life of the process.
pub struct HttpPriceSource {
    client: Client,
    url: String,
    cache: Mutex<Option<PriceTable>>,
}

impl HttpPriceSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_feed(&self) -> anyhow::Result<PriceTable> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("failed to fetch price feed from {}", self.url))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("price feed {} returned status {}", self.url, status);
        }

        let feed: Vec<PriceEntry> = response
            .json()
            .await
            .context("price feed is not a valid quote array")?;
        debug!("Fetched {} quotes from {}", feed.len(), self.url);

        Ok(PriceTable::from_feed(feed))
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable> {
        let mut cache = self.cache.lock().await;
        if let Some(table) = cache.as_ref() {
            return Ok(table.clone());
        }

        let table = self.fetch_feed().await?;
        info!("Price table loaded: {} currencies", table.len());
        *cache = Some(table.clone());
        Ok(table)
    }
}
