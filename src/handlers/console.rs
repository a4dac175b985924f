use async_trait::async_trait;
use tracing::{error, info};

use crate::display::pipeline::total_usd_value;
use crate::models::DisplayRow;
use crate::traits::renderer::RowRenderer;
use crate::utils::format_usd;

/// Console renderer: writes the row table to the log.
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Create a new console renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowRenderer for ConsoleRenderer {
    async fn render_rows(&self, wallet: &str, rows: &[DisplayRow]) {
        info!("{}", "=".repeat(80));
        info!("WALLET BALANCES");
        info!("{}", "=".repeat(80));
        info!("Wallet: {}", wallet);

        if rows.is_empty() {
            info!("No displayable balances");
            info!("{}", "=".repeat(80));
            return;
        }

        info!("");
        for (i, row) in rows.iter().enumerate() {
            info!("{}. {}", i + 1, row.currency);
            info!("   Amount: {}", row.formatted_amount);
            info!("   Value: {}", format_usd(row.usd_value));
            info!("");
        }

        info!("{}", "-".repeat(80));
        info!("Total Value: {}", format_usd(total_usd_value(rows)));
        info!("{}", "=".repeat(80));
    }

    async fn render_error(&self, error: &anyhow::Error) {
        error!("Wallet display error: {:#}", error);
    }
}
