//! Per-tag P/L breakdown.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Trade;

/// Summed P/L for one tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPnl {
    /// The tag label.
    pub tag: String,
    /// Summed P/L of every trade carrying the tag.
    pub pnl: Decimal,
}

/// Group P/L by tag, descending by value.
///
/// A trade carrying several tags contributes its full P/L to every one of
/// them - buckets overlap rather than splitting the amount. The tag
/// collection is the caller's choice: setups, strategies, mistakes, or any
/// other label set on the trade. Ties sort alphabetically.
#[must_use]
pub fn pnl_by_tag<'a, I, F>(trades: I, tags: F) -> Vec<TagPnl>
where
    I: IntoIterator<Item = &'a Trade>,
    F: Fn(&'a Trade) -> &'a [String],
{
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for trade in trades {
        for tag in tags(trade) {
            *buckets.entry(tag.clone()).or_insert(Decimal::ZERO) += trade.pnl;
        }
    }

    let mut rows: Vec<TagPnl> = buckets
        .into_iter()
        .map(|(tag, pnl)| TagPnl { tag, pnl })
        .collect();
    rows.sort_by(|a, b| b.pnl.cmp(&a.pnl));
    rows
}
