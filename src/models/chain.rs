use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Recognized blockchain tags. Anything else deserializes to
/// `Unrecognized` and is never eligible for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Chain::Osmosis => "Osmosis",
            Chain::Ethereum => "Ethereum",
            Chain::Arbitrum => "Arbitrum",
            Chain::Zilliqa => "Zilliqa",
            Chain::Neo => "Neo",
            Chain::Unrecognized => "Unrecognized",
        };
        f.write_str(name)
    }
}

/// Rank assigned to chains absent from the table. Lower than any real
/// entry, so unlisted chains always fail the display filter.
pub const SENTINEL_PRIORITY: i64 = -99;

/// Display rank per chain; higher sorts first.
#[derive(Debug, Clone)]
pub struct PriorityTable {
    ranks: HashMap<Chain, i64>,
}

impl PriorityTable {
    /// Empty table: every chain resolves to the sentinel.
    pub fn empty() -> Self {
        Self { ranks: HashMap::new() }
    }

    /// Build a table from explicit (chain, rank) pairs.
    pub fn from_ranks(pairs: impl IntoIterator<Item = (Chain, i64)>) -> Self {
        Self {
            ranks: pairs.into_iter().collect(),
        }
    }

    /// Resolved rank for a chain. `Unrecognized` and unlisted chains
    /// resolve to `SENTINEL_PRIORITY`.
    pub fn priority_of(&self, chain: Chain) -> i64 {
        if chain == Chain::Unrecognized {
            return SENTINEL_PRIORITY;
        }
        self.ranks.get(&chain).copied().unwrap_or(SENTINEL_PRIORITY)
    }

    /// A chain is displayable iff it resolves above the sentinel.
    pub fn is_displayable(&self, chain: Chain) -> bool {
        self.priority_of(chain) > SENTINEL_PRIORITY
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::from_ranks([
            (Chain::Osmosis, 100),
            (Chain::Ethereum, 50),
            (Chain::Arbitrum, 30),
            (Chain::Zilliqa, 20),
            (Chain::Neo, 20),
        ])
    }
}
