use serde::Serialize;

/// Render-ready representation of one balance.
///
/// Derived per call from a `WalletBalance` and the price table; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    pub currency: String,
    pub amount: f64,
    /// `amount` rendered with exactly two fraction digits.
    pub formatted_amount: String,
    /// `amount` times the USD unit price of `currency`.
    pub usd_value: f64,
}
