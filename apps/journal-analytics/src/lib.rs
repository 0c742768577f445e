// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines
    )
)]

//! Journal Analytics - Rust Core Library
//!
//! Analysis core for the Quill trading journal. The surrounding application
//! (forms, routing, persistence, AI coaching) materializes the user's trade
//! log and hands it to this crate as an in-memory collection; everything
//! here is a synchronous, pure computation over that collection.
//!
//! # Modules
//!
//! - `models`: journal records (`Trade`, `Strategy`) and their wire tolerance
//! - `stats`: trade aggregation (summary statistics, equity series,
//!   tag/calendar breakdowns, discipline streaks)
//! - `backtest`: filtered chronological replay against a simulated balance
//! - `sizing`: fixed-fractional position sizing
//!
//! No function here mutates a trade or retains state between calls, so
//! concurrent callers can share one collection freely.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Backtest engine - filtered replay of the trade log.
pub mod backtest;

/// Error types for invalid caller input.
pub mod error;

/// Journal domain records.
pub mod models;

/// Fixed-fractional position sizing.
pub mod sizing;

/// Trade aggregation and summary statistics.
pub mod stats;

pub use backtest::{
    BacktestConfig, BacktestEngine, BacktestReport, BacktestSummary, SideFilter, StrategyFilter,
};
pub use error::AnalyticsError;
pub use models::{
    AssetClass, MarketCondition, Mood, RiskReward, Strategy, Trade, TradeSide, TradeStatus,
    strategy_name_catalog,
};
pub use sizing::{PositionSize, position_size};
pub use stats::{
    DayStats, EquityPoint, JournalSummary, MonthlyCalendar, TagPnl, average_loss,
    average_risk_reward, average_win, clean_streak, closed, cumulative_equity, monthly_calendar,
    net_pnl, pnl_by_tag, profit_factor, summarize, win_rate,
};
