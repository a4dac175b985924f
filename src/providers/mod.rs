//! Concrete balance and price sources

pub mod file_provider;
pub mod http_price_provider;
pub mod memory_provider;

// Re-export for convenience
pub use file_provider::JsonFileBalanceSource;
pub use http_price_provider::{HttpPriceSource, DEFAULT_PRICES_URL};
pub use memory_provider::{StaticBalanceSource, StaticPriceSource};
