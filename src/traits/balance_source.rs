use async_trait::async_trait;

use crate::models::BalanceSnapshot;

/// Supplier of wallet balance snapshots.
///
/// A source may return stale or empty data; an empty snapshot is a
/// valid answer, not an error.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch a fresh snapshot for a wallet label.
    async fn fetch_balances(&self, wallet: &str) -> anyhow::Result<BalanceSnapshot>;
}
