//! Data models for the wallet display pipeline

pub mod balance;
pub mod chain;
pub mod price;
pub mod row;

// Re-export for convenience
pub use balance::{BalanceSnapshot, WalletBalance};
pub use chain::{Chain, PriorityTable, SENTINEL_PRIORITY};
pub use price::{PriceEntry, PriceTable};
pub use row::DisplayRow;
