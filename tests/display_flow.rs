//! End-to-end pass through the display service with in-memory
//! collaborators.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use wallet_display::display::service::BalanceDisplay;
use wallet_display::models::{Chain, DisplayRow, PriceTable, PriorityTable, WalletBalance};
use wallet_display::providers::memory_provider::{StaticBalanceSource, StaticPriceSource};
use wallet_display::traits::renderer::RowRenderer;

/// Renderer that records what it was asked to present.
#[derive(Default)]
struct CapturingRenderer {
    rows: Mutex<Option<Vec<DisplayRow>>>,
    errors: Mutex<Vec<String>>,
}

#[async_trait]
impl RowRenderer for CapturingRenderer {
    async fn render_rows(&self, _wallet: &str, rows: &[DisplayRow]) {
        *self.rows.lock().await = Some(rows.to_vec());
    }

    async fn render_error(&self, error: &anyhow::Error) {
        self.errors.lock().await.push(format!("{error:#}"));
    }
}

fn scenario_balances() -> Vec<WalletBalance> {
    vec![
        WalletBalance::new("ETH", 2.0, Chain::Ethereum),
        WalletBalance::new("OSMO", 5.0, Chain::Osmosis),
        WalletBalance::new("X", 3.0, Chain::Unrecognized),
    ]
}

fn scenario_priorities() -> PriorityTable {
    PriorityTable::from_ranks([(Chain::Osmosis, 100), (Chain::Ethereum, 50)])
}

#[tokio::test]
async fn one_pass_renders_the_ordered_rows() {
    let renderer = Arc::new(CapturingRenderer::default());
    let display = BalanceDisplay::new(
        "itest-wallet",
        Arc::new(StaticBalanceSource::new(scenario_balances())),
        Arc::new(StaticPriceSource::new(PriceTable::from_unit_prices([
            ("ETH", 2000.0),
            ("OSMO", 1.0),
        ]))),
        renderer.clone(),
        scenario_priorities(),
    );

    display.render_once().await.unwrap();

    let rows = renderer.rows.lock().await.clone().expect("rows rendered");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].currency, "OSMO");
    assert_eq!(rows[0].formatted_amount, "5.00");
    assert_eq!(rows[0].usd_value, 5.0);
    assert_eq!(rows[1].currency, "ETH");
    assert_eq!(rows[1].formatted_amount, "2.00");
    assert_eq!(rows[1].usd_value, 4000.0);
    assert!(renderer.errors.lock().await.is_empty());
}

#[tokio::test]
async fn missing_price_reaches_the_renderer_as_an_error() {
    let renderer = Arc::new(CapturingRenderer::default());
    let display = BalanceDisplay::new(
        "itest-wallet",
        Arc::new(StaticBalanceSource::new(scenario_balances())),
        // No ETH entry: the filtered-in record cannot be valued.
        Arc::new(StaticPriceSource::new(PriceTable::from_unit_prices([(
            "OSMO", 1.0,
        )]))),
        renderer.clone(),
        scenario_priorities(),
    );

    let result = display.render_once().await;

    assert!(result.is_err());
    assert!(renderer.rows.lock().await.is_none());
    let errors = renderer.errors.lock().await;
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("ETH"), "unexpected error: {}", errors[0]);
}

#[tokio::test]
async fn empty_snapshot_renders_an_empty_table() {
    let renderer = Arc::new(CapturingRenderer::default());
    let display = BalanceDisplay::new(
        "itest-wallet",
        Arc::new(StaticBalanceSource::new(Vec::new())),
        Arc::new(StaticPriceSource::demo()),
        renderer.clone(),
        PriorityTable::default(),
    );

    display.render_once().await.unwrap();

    let rows = renderer.rows.lock().await.clone().expect("rows rendered");
    assert!(rows.is_empty());
    assert!(renderer.errors.lock().await.is_empty());
}
