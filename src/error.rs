use thiserror::Error;

/// Typed failures of the pure display computations.
///
/// Transport-level failures (file reads, HTTP fetches) stay on
/// `anyhow::Result` at the provider boundary; this enum covers the
/// pure-data outcomes the renderer may need to present.
#[derive(Error, Debug)]
pub enum DisplayError {
    /// A balance passed the display filter but the price table has no
    /// entry for its currency. The whole row computation fails rather
    /// than emitting a value derived from absent data.
    #[error("no price available for currency '{0}'")]
    MissingPrice(String),

    /// Conversion input rejected (non-positive or non-finite amount).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}
