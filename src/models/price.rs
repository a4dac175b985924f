use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DisplayError;

/// One record of the price feed: a USD unit price observed at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub currency: String,
    pub date: DateTime<Utc>,
    pub price: f64,
}

/// USD unit prices keyed by currency.
///
/// Built from a price feed by keeping only the newest entry per
/// currency; the feed may carry several dated quotes for one ticker.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    entries: HashMap<String, PriceEntry>,
}

impl PriceTable {
    /// Reduce a feed to the latest entry per currency.
    pub fn from_feed(feed: impl IntoIterator<Item = PriceEntry>) -> Self {
        let mut entries: HashMap<String, PriceEntry> = HashMap::new();
        for entry in feed {
            match entries.get(&entry.currency) {
                Some(existing) if existing.date >= entry.date => {}
                _ => {
                    entries.insert(entry.currency.clone(), entry);
                }
            }
        }
        Self { entries }
    }

    /// Build a table of fixed unit prices, stamped with the current time.
    pub fn from_unit_prices<C>(prices: impl IntoIterator<Item = (C, f64)>) -> Self
    where
        C: Into<String>,
    {
        let now = Utc::now();
        Self {
            entries: prices
                .into_iter()
                .map(|(currency, price)| {
                    let currency = currency.into();
                    let entry = PriceEntry {
                        currency: currency.clone(),
                        date: now,
                        price,
                    };
                    (currency, entry)
                })
                .collect(),
        }
    }

    /// USD unit price for a currency, if listed.
    pub fn usd_price(&self, currency: &str) -> Option<f64> {
        self.entries.get(currency).map(|entry| entry.price)
    }

    /// Convert an amount between two listed currencies through USD.
    ///
    /// Rejects non-positive and non-finite amounts; both sides must be
    /// listed.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, DisplayError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DisplayError::InvalidAmount(format!(
                "conversion amount must be a positive number, got {amount}"
            )));
        }
        let from_price = self
            .usd_price(from)
            .ok_or_else(|| DisplayError::MissingPrice(from.to_string()))?;
        let to_price = self
            .usd_price(to)
            .ok_or_else(|| DisplayError::MissingPrice(to.to_string()))?;

        let amount_in_usd = amount * from_price;
        Ok(amount_in_usd / to_price)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of listed currencies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(currency: &str, day: u32, price: f64) -> PriceEntry {
        PriceEntry {
            currency: currency.to_string(),
            date: Utc.with_ymd_and_hms(2023, 8, day, 9, 10, 0).unwrap(),
            price,
        }
    }

    #[test]
    fn feed_reduction_keeps_latest_entry_per_currency() {
        let table = PriceTable::from_feed([
            entry("ETH", 1, 1600.0),
            entry("ETH", 20, 2000.0),
            entry("ETH", 10, 1800.0),
            entry("OSMO", 5, 1.0),
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.usd_price("ETH"), Some(2000.0));
        assert_eq!(table.usd_price("OSMO"), Some(1.0));
    }

    #[test]
    fn lookup_of_unlisted_currency_is_none() {
        let table = PriceTable::from_unit_prices([("ETH", 2000.0)]);
        assert_eq!(table.usd_price("ZIL"), None);
    }

    #[test]
    fn convert_goes_through_usd() {
        let table = PriceTable::from_unit_prices([("ETH", 2000.0), ("OSMO", 0.5)]);
        let converted = table.convert(2.0, "ETH", "OSMO").unwrap();
        assert!((converted - 8000.0).abs() < 1e-9);
    }

    #[test]
    fn convert_rejects_unlisted_currencies() {
        let table = PriceTable::from_unit_prices([("ETH", 2000.0)]);
        match table.convert(1.0, "ETH", "ZIL") {
            Err(DisplayError::MissingPrice(currency)) => assert_eq!(currency, "ZIL"),
            other => panic!("expected MissingPrice, got {other:?}"),
        }
        match table.convert(1.0, "ZIL", "ETH") {
            Err(DisplayError::MissingPrice(currency)) => assert_eq!(currency, "ZIL"),
            other => panic!("expected MissingPrice, got {other:?}"),
        }
    }

    #[test]
    fn convert_rejects_bad_amounts() {
        let table = PriceTable::from_unit_prices([("ETH", 2000.0), ("OSMO", 0.5)]);
        for amount in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                table.convert(amount, "ETH", "OSMO"),
                Err(DisplayError::InvalidAmount(_))
            ));
        }
    }
}
