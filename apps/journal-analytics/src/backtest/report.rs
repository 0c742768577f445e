//! Backtest run results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::stats::EquityPoint;

/// Statistics from a run that matched at least one trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestSummary {
    /// Resolved strategy label (`"All Strategies"` when unfiltered).
    pub strategy: String,
    /// Trades replayed.
    pub trade_count: u64,
    /// Net P/L across the replayed trades, rounded to cents.
    pub total_pnl: Decimal,
    /// Percentage of winning trades.
    pub win_rate: Decimal,
    /// Gross profit over gross loss, capped at 100 when the run had no
    /// losing trades.
    pub profit_factor: Decimal,
    /// Deepest peak-to-trough equity decline, as a percentage of the peak.
    pub max_drawdown: Decimal,
    /// Simulated balance after each trade, seeded with the starting balance
    /// at the window's start date.
    pub equity_curve: Vec<EquityPoint>,
}

/// Outcome of a backtest run.
///
/// A run that matched nothing carries no statistics at all - an empty
/// journal slice is different from a slice that happened to sum to zero,
/// and the variant split keeps callers from reading numbers that do not
/// exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BacktestReport {
    /// At least one trade matched; full statistics are available.
    Completed(BacktestSummary),
    /// Nothing matched the criteria.
    NoMatches {
        /// Resolved strategy label the run asked for.
        strategy: String,
    },
}

impl BacktestReport {
    /// Number of trades the run replayed.
    #[must_use]
    pub const fn trade_count(&self) -> u64 {
        match self {
            Self::Completed(summary) => summary.trade_count,
            Self::NoMatches { .. } => 0,
        }
    }

    /// Resolved strategy label.
    #[must_use]
    pub fn strategy(&self) -> &str {
        match self {
            Self::Completed(summary) => &summary.strategy,
            Self::NoMatches { strategy } => strategy,
        }
    }

    /// The statistics, when the run matched anything.
    #[must_use]
    pub const fn summary(&self) -> Option<&BacktestSummary> {
        match self {
            Self::Completed(summary) => Some(summary),
            Self::NoMatches { .. } => None,
        }
    }
}
