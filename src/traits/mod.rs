//! Collaborator seams around the pure pipeline

pub mod balance_source;
pub mod price_source;
pub mod renderer;

// Re-export for convenience
pub use balance_source::BalanceSource;
pub use price_source::PriceSource;
pub use renderer::RowRenderer;
