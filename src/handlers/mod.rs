//! Renderers consuming the ordered display rows

pub mod composite;
pub mod console;

// Re-export for convenience
pub use composite::CompositeRenderer;
pub use console::ConsoleRenderer;
