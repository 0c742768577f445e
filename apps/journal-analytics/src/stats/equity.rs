//! Cumulative equity series for the dashboard chart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Trade;

/// One point on an equity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquityPoint {
    /// Display-formatted date.
    pub date: String,
    /// Cumulative value at this point.
    pub equity: Decimal,
}

/// Running-sum equity series over the given trades, ordered by entry
/// timestamp.
///
/// The sort is stable: trades sharing a timestamp keep their relative
/// order, so the same collection always produces the same series. The last
/// point's value equals the collection's net P/L.
#[must_use]
pub fn cumulative_equity<'a, I>(trades: I) -> Vec<EquityPoint>
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut ordered: Vec<&Trade> = trades.into_iter().collect();
    ordered.sort_by_key(|t| t.entry_time);

    let mut running = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|t| {
            running += t.pnl;
            EquityPoint {
                date: t.entry_time.format("%b %-d").to_string(),
                equity: running,
            }
        })
        .collect()
}
