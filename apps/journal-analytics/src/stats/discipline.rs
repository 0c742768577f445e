//! Rule-adherence measures for the discipline view.

use std::cmp::Reverse;

use crate::models::Trade;

/// Length of the current streak of trades free of the given mistake label.
///
/// Trades are taken most-recent first (by entry timestamp); the count stops
/// at the first trade whose mistake tags carry the label. The label match
/// is exact.
#[must_use]
pub fn clean_streak<'a, I>(trades: I, mistake: &str) -> usize
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut ordered: Vec<&Trade> = trades.into_iter().collect();
    ordered.sort_by_key(|t| Reverse(t.entry_time));

    ordered
        .iter()
        .take_while(|t| !t.mistakes.iter().any(|m| m == mistake))
        .count()
}
