use std::sync::Arc;

use tracing::{debug, info};

use crate::display::pipeline::compute_rows;
use crate::models::{DisplayRow, PriorityTable};
use crate::traits::balance_source::BalanceSource;
use crate::traits::price_source::PriceSource;
use crate::traits::renderer::RowRenderer;

/// One-pass display service: fetch a snapshot and the price table,
/// run the pipeline, hand the result to the renderer.
///
/// Holds no shared mutable state; each pass is independent.
pub struct BalanceDisplay {
    wallet: String,
    balance_source: Arc<dyn BalanceSource>,
    price_source: Arc<dyn PriceSource>,
    renderer: Arc<dyn RowRenderer>,
    priorities: PriorityTable,
}

impl BalanceDisplay {
    /// Create a new display service
    pub fn new(
        wallet: impl Into<String>,
        balance_source: Arc<dyn BalanceSource>,
        price_source: Arc<dyn PriceSource>,
        renderer: Arc<dyn RowRenderer>,
        priorities: PriorityTable,
    ) -> Self {
        Self {
            wallet: wallet.into(),
            balance_source,
            price_source,
            renderer,
            priorities,
        }
    }

    /// Wallet label this service displays
    pub fn wallet(&self) -> &str {
        &self.wallet
    }

    /// Fetch once and compute the ordered rows.
    pub async fn compute(&self) -> anyhow::Result<Vec<DisplayRow>> {
        let snapshot = self.balance_source.fetch_balances(&self.wallet).await?;
        debug!(
            "Snapshot for {}: {} records at {}",
            snapshot.wallet,
            snapshot.len(),
            snapshot.taken_at
        );

        let prices = self.price_source.fetch_prices().await?;
        debug!("Price table: {} currencies", prices.len());

        let rows = compute_rows(&snapshot.balances, &prices, &self.priorities)?;
        Ok(rows)
    }

    /// Run one full pass: compute and render.
    ///
    /// The renderer is handed either the rows or the error state; the
    /// error is also returned so the caller can set an exit status.
    pub async fn render_once(&self) -> anyhow::Result<()> {
        info!("Rendering balances for wallet: {}", self.wallet);

        match self.compute().await {
            Ok(rows) => {
                self.renderer.render_rows(&self.wallet, &rows).await;
                Ok(())
            }
            Err(e) => {
                self.renderer.render_error(&e).await;
                Err(e)
            }
        }
    }
}
