//! Wallet Display Library
//!
//! A modular wallet balance display pipeline: fetch a balance snapshot
//! and a currency price table once, filter and order the balances by
//! chain priority, derive formatted amounts and USD values, and hand
//! the rows to a renderer.

// Public modules - these are the API surface
pub mod config;
pub mod display;
pub mod error;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use models::{
    balance::{BalanceSnapshot, WalletBalance},
    chain::{Chain, PriorityTable, SENTINEL_PRIORITY},
    price::{PriceEntry, PriceTable},
    row::DisplayRow,
};
pub use traits::{
    balance_source::BalanceSource, price_source::PriceSource, renderer::RowRenderer,
};
pub use providers::{
    file_provider::JsonFileBalanceSource,
    http_price_provider::{HttpPriceSource, DEFAULT_PRICES_URL},
    memory_provider::{StaticBalanceSource, StaticPriceSource},
};
pub use handlers::{composite::CompositeRenderer, console::ConsoleRenderer};
pub use display::{pipeline::compute_rows, pipeline::total_usd_value, service::BalanceDisplay};
pub use error::DisplayError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
