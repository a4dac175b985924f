use async_trait::async_trait;

use crate::models::DisplayRow;

/// Consumer of the ordered display rows.
///
/// The renderer owns presentation entirely: it receives either the row
/// list or the error state, and the pipeline knows nothing about how
/// rows are shown.
#[async_trait]
pub trait RowRenderer: Send + Sync {
    /// Present the ordered rows.
    async fn render_rows(&self, wallet: &str, rows: &[DisplayRow]);

    /// Present an error state - using reference to avoid cloning issues
    async fn render_error(&self, error: &anyhow::Error);
}
