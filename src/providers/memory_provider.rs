use async_trait::async_trait;

use crate::models::{BalanceSnapshot, Chain, PriceTable, WalletBalance};
use crate::traits::balance_source::BalanceSource;
use crate::traits::price_source::PriceSource;

/// Balance source backed by a fixed in-memory record list.
///
/// Every fetch yields a fresh snapshot of the same records, stamped
/// with the fetch time.
pub struct StaticBalanceSource {
    balances: Vec<WalletBalance>,
}

impl StaticBalanceSource {
    pub fn new(balances: Vec<WalletBalance>) -> Self {
        Self { balances }
    }

    /// Fixture snapshot used by the demo binary. Carries a zero
    /// amount and an unrecognized chain alongside the displayable
    /// records.
    pub fn demo() -> Self {
        Self::new(vec![
            WalletBalance::new("ETH", 2.0, Chain::Ethereum),
            WalletBalance::new("OSMO", 5.0, Chain::Osmosis),
            WalletBalance::new("ARB", 12.5, Chain::Arbitrum),
            WalletBalance::new("ZIL", 1500.0, Chain::Zilliqa),
            WalletBalance::new("NEO", 0.0, Chain::Neo),
            WalletBalance::new("X", 3.0, Chain::Unrecognized),
        ])
    }
}

#[async_trait]
impl BalanceSource for StaticBalanceSource {
    async fn fetch_balances(&self, wallet: &str) -> anyhow::Result<BalanceSnapshot> {
        Ok(BalanceSnapshot::new(wallet, self.balances.clone()))
    }
}

/// Price source backed by a fixed table.
pub struct StaticPriceSource {
    table: PriceTable,
}

impl StaticPriceSource {
    pub fn new(table: PriceTable) -> Self {
        Self { table }
    }

    /// Fixed unit prices covering the demo snapshot.
    pub fn demo() -> Self {
        Self::new(PriceTable::from_unit_prices([
            ("ETH", 2000.0),
            ("OSMO", 1.0),
            ("ARB", 1.2),
            ("ZIL", 0.02),
            ("NEO", 10.0),
            ("USDC", 1.0),
        ]))
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_prices(&self) -> anyhow::Result<PriceTable> {
        Ok(self.table.clone())
    }
}
