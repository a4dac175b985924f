use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chain::Chain;

/// One raw balance record as supplied by a balance source.
///
/// `amount` is signed and untrusted: zero, negative, and non-finite
/// values are legal here and are dropped later by the display filter.
/// A missing `amount` in the wire form defaults to zero, which the
/// filter likewise drops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    #[serde(default)]
    pub amount: f64,
    pub chain: Chain,
}

impl WalletBalance {
    pub fn new(currency: impl Into<String>, amount: f64, chain: Chain) -> Self {
        Self {
            currency: currency.into(),
            amount,
            chain,
        }
    }
}

/// Snapshot of wallet balances at a specific time.
///
/// Fresh per fetch; never persisted, no identity across calls.
#[derive(Debug, Clone)]
pub struct BalanceSnapshot {
    pub taken_at: DateTime<Utc>,
    pub wallet: String,
    pub balances: Vec<WalletBalance>,
}

impl BalanceSnapshot {
    /// Create a snapshot stamped with the current time.
    pub fn new(wallet: impl Into<String>, balances: Vec<WalletBalance>) -> Self {
        Self {
            taken_at: Utc::now(),
            wallet: wallet.into(),
            balances,
        }
    }

    /// Check if the snapshot holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Number of raw records in the snapshot.
    pub fn len(&self) -> usize {
        self.balances.len()
    }
}
