use async_trait::async_trait;

use crate::models::PriceTable;

/// Supplier of the USD price table.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current price table. Implementations backed by a
    /// remote feed perform one retrieval and may cache it for the
    /// life of the process.
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable>;
}
