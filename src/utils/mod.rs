//! Shared helpers

pub mod helper;

pub use helper::{format_amount, format_usd, truncate_string};
