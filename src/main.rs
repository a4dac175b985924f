use std::sync::Arc;

use tracing::level_filters::LevelFilter;
use tracing::{error, info};

use wallet_display::config::Config;
use wallet_display::display::service::BalanceDisplay;
use wallet_display::handlers::console::ConsoleRenderer;
use wallet_display::models::chain::PriorityTable;
use wallet_display::providers::file_provider::JsonFileBalanceSource;
use wallet_display::providers::http_price_provider::HttpPriceSource;
use wallet_display::providers::memory_provider::{StaticBalanceSource, StaticPriceSource};
use wallet_display::traits::{balance_source::BalanceSource, price_source::PriceSource};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_level(true)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .with_file(true)
        .with_line_number(true)
        .init();

    dotenvy::dotenv().ok();

    tokio::runtime::Runtime::new()?.block_on(async {
        let config = Config::from_env();

        info!("Initializing wallet display...");
        info!("Wallet: {}", config.wallet);

        let balance_source: Arc<dyn BalanceSource> = match &config.balances_file {
            Some(path) => {
                info!("Balance source: {}", path);
                Arc::new(JsonFileBalanceSource::new(path))
            }
            None => {
                info!("Balance source: built-in demo snapshot");
                Arc::new(StaticBalanceSource::demo())
            }
        };

        let price_source: Arc<dyn PriceSource> = match &config.prices_url {
            Some(url) => {
                info!("Price source: {}", url);
                Arc::new(HttpPriceSource::new(url))
            }
            None => {
                info!("Price source: built-in demo table");
                Arc::new(StaticPriceSource::demo())
            }
        };

        let display = BalanceDisplay::new(
            config.wallet,
            balance_source,
            price_source,
            Arc::new(ConsoleRenderer::new()),
            PriorityTable::default(),
        );

        if let Err(e) = display.render_once().await {
            error!("Display pass failed: {:#}", e);
            std::process::exit(1);
        }

        Ok(())
    })
}
