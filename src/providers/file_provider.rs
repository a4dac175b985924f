use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;

use crate::models::{BalanceSnapshot, WalletBalance};
use crate::traits::balance_source::BalanceSource;

/// Balance source reading a JSON snapshot file: an array of balance
/// records. The file may be stale or empty; validation of amounts and
/// chain tags is the pipeline's job, not the reader's.
pub struct JsonFileBalanceSource {
    path: PathBuf,
}

impl JsonFileBalanceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode a raw snapshot document.
    pub fn parse_snapshot(raw: &str) -> anyhow::Result<Vec<WalletBalance>> {
        serde_json::from_str(raw).context("invalid balance snapshot document")
    }
}

#[async_trait]
impl BalanceSource for JsonFileBalanceSource {
    async fn fetch_balances(&self, wallet: &str) -> anyhow::Result<BalanceSnapshot> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read balances file {}", self.path.display()))?;
        let balances = Self::parse_snapshot(&raw)?;
        debug!(
            "Loaded {} balance records from {}",
            balances.len(),
            self.path.display()
        );
        Ok(BalanceSnapshot::new(wallet, balances))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chain;

    #[test]
    fn parses_a_snapshot_document() {
        let raw = r#"[
            {"currency": "ETH", "amount": 2.0, "chain": "Ethereum"},
            {"currency": "X", "amount": 3.0, "chain": "SomethingElse"},
            {"currency": "OSMO", "chain": "Osmosis"}
        ]"#;

        let balances = JsonFileBalanceSource::parse_snapshot(raw).unwrap();

        assert_eq!(balances.len(), 3);
        assert_eq!(balances[0].chain, Chain::Ethereum);
        assert_eq!(balances[1].chain, Chain::Unrecognized);
        // Missing amount defaults to zero; the filter drops it later.
        assert_eq!(balances[2].amount, 0.0);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(JsonFileBalanceSource::parse_snapshot("not json").is_err());
        assert!(JsonFileBalanceSource::parse_snapshot(r#"{"currency":"ETH"}"#).is_err());
    }

    #[tokio::test]
    async fn missing_file_is_a_transport_error() {
        let source = JsonFileBalanceSource::new("/nonexistent/balances.json");
        let err = source.fetch_balances("w").await.unwrap_err();
        assert!(err.to_string().contains("balances file"));
    }
}
