//! Summary statistics over a trade collection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RiskReward, Trade};

/// Sentinel profit factor when the collection has winners but no losers.
/// Ten sits above any gross-profit/gross-loss ratio a real journal
/// produces, so the dashboard gauge pins at the top instead of dividing by
/// zero.
const PROFIT_FACTOR_CAP: Decimal = Decimal::TEN;

/// The dashboard's summary record, computed in one pass.
///
/// Callers aggregating realized results pass the collection through
/// [`closed`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalSummary {
    /// Net profit/loss across the collection.
    pub net_pnl: Decimal,
    /// Number of trades in the collection.
    pub total_trades: u64,
    /// Trades with a strictly positive result.
    pub wins: u64,
    /// Trades with a strictly negative result.
    pub losses: u64,
    /// Trades that came out flat.
    pub break_evens: u64,
    /// Percentage of wins over the whole collection.
    pub win_rate: Decimal,
    /// Sum of positive results.
    pub gross_profit: Decimal,
    /// Sum of negative results, as a positive value.
    pub gross_loss: Decimal,
    /// Gross profit over gross loss, capped at 10 when there are no losses.
    pub profit_factor: Decimal,
    /// Mean winning result.
    pub average_win: Decimal,
    /// Mean losing result, as a positive value.
    pub average_loss: Decimal,
    /// Mean of the usable risk:reward ratios.
    pub average_risk_reward: Decimal,
}

/// Trades with a recorded final exit - the realized subset the dashboard
/// and reports aggregate over.
pub fn closed(trades: &[Trade]) -> impl Iterator<Item = &Trade> {
    trades.iter().filter(|t| t.is_closed())
}

/// Net profit/loss: the sum of every `pnl` in the collection.
#[must_use]
pub fn net_pnl<'a, I>(trades: I) -> Decimal
where
    I: IntoIterator<Item = &'a Trade>,
{
    trades.into_iter().map(|t| t.pnl).sum()
}

/// Percentage of winning trades over the whole collection; zero when the
/// collection is empty. Break-even results count against the rate.
#[must_use]
pub fn win_rate<'a, I>(trades: I) -> Decimal
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut wins = 0u64;
    let mut total = 0u64;
    for trade in trades {
        total += 1;
        if trade.is_win() {
            wins += 1;
        }
    }
    win_rate_from_counts(wins, total)
}

pub(crate) fn win_rate_from_counts(wins: u64, total: u64) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(wins) / Decimal::from(total) * Decimal::ONE_HUNDRED
}

/// Gross profit over gross loss.
///
/// A collection with winners and no losers yields `cap`; one with neither
/// yields zero. The cap must be a fixed constant above any realistic ratio
/// so the display layer can read it as "off the chart".
#[must_use]
pub fn profit_factor(gross_profit: Decimal, gross_loss: Decimal, cap: Decimal) -> Decimal {
    if gross_loss > Decimal::ZERO {
        gross_profit / gross_loss
    } else if gross_profit > Decimal::ZERO {
        cap
    } else {
        Decimal::ZERO
    }
}

/// Mean of the strictly positive results; zero when there are none.
#[must_use]
pub fn average_win<'a, I>(trades: I) -> Decimal
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut sum = Decimal::ZERO;
    let mut count = 0u64;
    for trade in trades {
        if trade.pnl > Decimal::ZERO {
            sum += trade.pnl;
            count += 1;
        }
    }
    mean(sum, count)
}

/// Mean magnitude of the strictly negative results; zero when there are
/// none.
#[must_use]
pub fn average_loss<'a, I>(trades: I) -> Decimal
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut sum = Decimal::ZERO;
    let mut count = 0u64;
    for trade in trades {
        if trade.pnl < Decimal::ZERO {
            sum += trade.pnl.abs();
            count += 1;
        }
    }
    mean(sum, count)
}

/// Mean of the usable risk:reward ratios; unparsable and non-positive
/// values drop out, and a collection with none of them yields zero.
#[must_use]
pub fn average_risk_reward<'a, I>(trades: I) -> Decimal
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut sum = Decimal::ZERO;
    let mut count = 0u64;
    for trade in trades {
        if let Some(value) = trade.rr_ratio.as_ref().and_then(RiskReward::value) {
            sum += value;
            count += 1;
        }
    }
    mean(sum, count)
}

fn mean(sum: Decimal, count: u64) -> Decimal {
    if count == 0 {
        Decimal::ZERO
    } else {
        sum / Decimal::from(count)
    }
}

/// Compute the full summary record in one pass.
#[must_use]
pub fn summarize<'a, I>(trades: I) -> JournalSummary
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut net = Decimal::ZERO;
    let mut gross_profit = Decimal::ZERO;
    let mut gross_loss = Decimal::ZERO;
    let mut total = 0u64;
    let mut wins = 0u64;
    let mut losses = 0u64;
    let mut rr_sum = Decimal::ZERO;
    let mut rr_count = 0u64;

    for trade in trades {
        total += 1;
        net += trade.pnl;
        if trade.pnl > Decimal::ZERO {
            wins += 1;
            gross_profit += trade.pnl;
        } else if trade.pnl < Decimal::ZERO {
            losses += 1;
            gross_loss += trade.pnl.abs();
        }
        if let Some(value) = trade.rr_ratio.as_ref().and_then(RiskReward::value) {
            rr_sum += value;
            rr_count += 1;
        }
    }

    JournalSummary {
        net_pnl: net,
        total_trades: total,
        wins,
        losses,
        break_evens: total - wins - losses,
        win_rate: win_rate_from_counts(wins, total),
        gross_profit,
        gross_loss,
        profit_factor: profit_factor(gross_profit, gross_loss, PROFIT_FACTOR_CAP),
        average_win: mean(gross_profit, wins),
        average_loss: mean(gross_loss, losses),
        average_risk_reward: mean(rr_sum, rr_count),
    }
}
