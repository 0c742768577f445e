//! Trade aggregation: pure reductions of the journal into the numbers the
//! dashboard and reports display.
//!
//! Every operation is total - empty input, zero denominators, and dirty
//! values produce zeros or empty output, never an error - and none of them
//! filters by status internally. Views that want realized-only numbers pass
//! the collection through [`closed`] first; that contract belongs to the
//! caller so the same reductions can serve open-position views too.

mod breakdown;
mod calendar;
mod discipline;
mod equity;
mod summary;

pub use breakdown::{TagPnl, pnl_by_tag};
pub use calendar::{DayStats, MonthlyCalendar, monthly_calendar};
pub use discipline::clean_streak;
pub use equity::{EquityPoint, cumulative_equity};
pub use summary::{
    JournalSummary, average_loss, average_risk_reward, average_win, closed, net_pnl,
    profit_factor, summarize, win_rate,
};
