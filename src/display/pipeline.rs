//! The pure display pipeline: filter, order, format.
//!
//! Three stages composed by [`compute_rows`]. Each stage is a pure
//! function over its inputs; the composition is deterministic and
//! re-entrant, so callers may memoize on input equality if they want
//! to avoid recomputation.

use crate::error::DisplayError;
use crate::models::{DisplayRow, PriceTable, PriorityTable, WalletBalance, SENTINEL_PRIORITY};
use crate::utils::format_amount;

/// Keep the records eligible for display: recognized chain (resolved
/// priority above the sentinel) and strictly positive amount. Zero,
/// negative, and NaN amounts all fail the `> 0` test.
pub fn filter_displayable<'a>(
    balances: &'a [WalletBalance],
    priorities: &PriorityTable,
) -> Vec<&'a WalletBalance> {
    balances
        .iter()
        .filter(|balance| {
            priorities.priority_of(balance.chain) > SENTINEL_PRIORITY && balance.amount > 0.0
        })
        .collect()
}

/// Order records by resolved chain priority, descending.
///
/// Records with equal priority keep their input order: the sort is
/// stable, so the original position acts as the secondary key.
pub fn sort_by_priority<'a>(
    mut balances: Vec<&'a WalletBalance>,
    priorities: &PriorityTable,
) -> Vec<&'a WalletBalance> {
    balances.sort_by(|lhs, rhs| {
        let lhs_priority = priorities.priority_of(lhs.chain);
        let rhs_priority = priorities.priority_of(rhs.chain);
        rhs_priority.cmp(&lhs_priority)
    });
    balances
}

/// Derive display rows from the ordered records.
///
/// Every record must have a listed price; a missing entry fails the
/// whole call with [`DisplayError::MissingPrice`] rather than emitting
/// a row built from absent data.
pub fn format_rows(
    balances: &[&WalletBalance],
    prices: &PriceTable,
) -> Result<Vec<DisplayRow>, DisplayError> {
    balances
        .iter()
        .map(|balance| {
            let unit_price = prices
                .usd_price(&balance.currency)
                .ok_or_else(|| DisplayError::MissingPrice(balance.currency.clone()))?;

            Ok(DisplayRow {
                currency: balance.currency.clone(),
                amount: balance.amount,
                formatted_amount: format_amount(balance.amount),
                usd_value: balance.amount * unit_price,
            })
        })
        .collect()
}

/// Run the full pipeline: filter, order, format.
///
/// Pure and deterministic for fixed inputs. An empty (or fully
/// filtered-out) snapshot yields an empty row list, not an error.
pub fn compute_rows(
    balances: &[WalletBalance],
    prices: &PriceTable,
    priorities: &PriorityTable,
) -> Result<Vec<DisplayRow>, DisplayError> {
    let survivors = filter_displayable(balances, priorities);
    let ordered = sort_by_priority(survivors, priorities);
    format_rows(&ordered, prices)
}

/// Sum of the per-row USD values.
pub fn total_usd_value(rows: &[DisplayRow]) -> f64 {
    rows.iter().map(|row| row.usd_value).sum()
}
