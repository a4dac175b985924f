//! The display pipeline and its one-pass service

pub mod pipeline;
pub mod service;

// Re-export for convenience
pub use pipeline::{
    compute_rows, filter_displayable, format_rows, sort_by_priority, total_usd_value,
};
pub use service::BalanceDisplay;
