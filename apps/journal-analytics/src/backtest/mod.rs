//! Backtest engine: filtered chronological replay of the journal.
//!
//! "What would my equity curve have looked like if I had only taken trades
//! matching these criteria" - the engine selects closed trades by strategy
//! tag, date window, side, and a free-text condition, then replays them in
//! entry order against a simulated starting balance, tracking the running
//! peak and the deepest drawdown from it.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use journal_analytics::backtest::{
//!     BacktestConfig, BacktestEngine, SideFilter, StrategyFilter,
//! };
//! use rust_decimal::Decimal;
//!
//! let config = BacktestConfig {
//!     strategy: StrategyFilter::All,
//!     start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!     end_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
//!     side: SideFilter::All,
//!     condition: String::new(),
//!     initial_capital: Decimal::from(100_000),
//! };
//!
//! let engine = BacktestEngine::new(config)?;
//! let report = engine.run(&[]);
//! assert_eq!(report.trade_count(), 0);
//! # Ok::<(), journal_analytics::AnalyticsError>(())
//! ```

mod config;
mod engine;
mod filter;
mod report;

pub use config::{BacktestConfig, SideFilter, StrategyFilter};
pub use engine::BacktestEngine;
pub use report::{BacktestReport, BacktestSummary};
