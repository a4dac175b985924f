use std::sync::Arc;

use async_trait::async_trait;

use crate::models::DisplayRow;
use crate::traits::renderer::RowRenderer;

/// Composite renderer that can combine multiple renderers
pub struct CompositeRenderer {
    renderers: Vec<Arc<dyn RowRenderer>>,
}

impl CompositeRenderer {
    /// Create a new composite renderer
    pub fn new() -> Self {
        Self {
            renderers: Vec::new(),
        }
    }

    /// Add a renderer to the composite
    pub fn add_renderer(&mut self, renderer: Arc<dyn RowRenderer>) {
        self.renderers.push(renderer);
    }

    /// Check if there are any renderers
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Number of renderers
    pub fn len(&self) -> usize {
        self.renderers.len()
    }
}

impl Default for CompositeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RowRenderer for CompositeRenderer {
    async fn render_rows(&self, wallet: &str, rows: &[DisplayRow]) {
        for renderer in &self.renderers {
            renderer.render_rows(wallet, rows).await;
        }
    }

    async fn render_error(&self, error: &anyhow::Error) {
        for renderer in &self.renderers {
            renderer.render_error(error).await;
        }
    }
}
