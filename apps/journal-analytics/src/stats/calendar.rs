//! Monthly calendar aggregation for the journal's calendar view.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Trade;

/// Realized activity for one calendar day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    /// Realized P/L for the day.
    pub pnl: Decimal,
    /// Closed trades entered that day.
    pub trades: u32,
    /// How many of them won.
    pub wins: u32,
}

/// One month of realized activity, keyed by day of month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCalendar {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Days with activity; quiet days are absent.
    pub days: BTreeMap<u32, DayStats>,
    /// Total realized P/L for the month.
    pub month_pnl: Decimal,
}

/// Bucket closed trades into the days of one calendar month, by entry
/// date. Open trades and trades outside the month are ignored.
#[must_use]
pub fn monthly_calendar<'a, I>(trades: I, year: i32, month: u32) -> MonthlyCalendar
where
    I: IntoIterator<Item = &'a Trade>,
{
    let mut days: BTreeMap<u32, DayStats> = BTreeMap::new();
    let mut month_pnl = Decimal::ZERO;

    for trade in trades {
        if !trade.is_closed() {
            continue;
        }
        let entered = trade.entry_time.date_naive();
        if entered.year() != year || entered.month() != month {
            continue;
        }

        let day = days.entry(entered.day()).or_default();
        day.pnl += trade.pnl;
        day.trades += 1;
        if trade.is_win() {
            day.wins += 1;
        }
        month_pnl += trade.pnl;
    }

    MonthlyCalendar {
        year,
        month,
        days,
        month_pnl,
    }
}
