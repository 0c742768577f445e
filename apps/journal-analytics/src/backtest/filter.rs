//! Trade selection for a backtest run.

use chrono::{DateTime, Utc};

use super::config::BacktestConfig;
use crate::models::Trade;

/// Inclusive UTC window for the run: midnight at the start date through the
/// last millisecond of the end date, so a trade entered at any time of day
/// on the end date still qualifies.
pub(crate) fn run_window(config: &BacktestConfig) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = config
        .start_date
        .and_hms_opt(0, 0, 0)
        .unwrap_or_default()
        .and_utc();
    let end = config
        .end_date
        .and_hms_milli_opt(23, 59, 59, 999)
        .unwrap_or_default()
        .and_utc();
    (start, end)
}

/// Select and order the trades a run replays: closed, inside the window,
/// matching strategy, side, and condition, ascending by entry timestamp.
///
/// The sort is stable, so trades sharing a timestamp replay in their
/// original relative order.
pub(crate) fn select_trades<'a>(trades: &'a [Trade], config: &BacktestConfig) -> Vec<&'a Trade> {
    let (start, end) = run_window(config);
    let needle = config.condition.trim().to_lowercase();

    let mut selected: Vec<&Trade> = trades
        .iter()
        .filter(|t| t.is_closed())
        .filter(|t| t.entry_time >= start && t.entry_time <= end)
        .filter(|t| config.strategy.matches(&t.strategies))
        .filter(|t| config.side.matches(t.side))
        .filter(|t| matches_condition(t, &needle))
        .collect();
    selected.sort_by_key(|t| t.entry_time);
    selected
}

/// Case-insensitive substring match against setup tags or notes. An empty
/// needle matches every trade.
fn matches_condition(trade: &Trade, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    trade
        .setups
        .iter()
        .any(|setup| setup.to_lowercase().contains(needle))
        || trade.notes.to_lowercase().contains(needle)
}
