//! Journal domain records.
//!
//! Rows arrive from the remote store as camelCase JSON written by the web
//! client, and historical data can be dirty: numeric fields stored as
//! strings, absent tag lists, half-formed exit dates. Deserialization here
//! is tolerant in the same places the aggregations are (`pnl` and the other
//! amounts coerce to zero, an unparsable exit date reads as "still open"),
//! so an old journal always loads and always renders a best-effort report.

mod strategy;
mod trade;
pub(crate) mod wire;

pub use strategy::{Strategy, strategy_name_catalog};
pub use trade::{AssetClass, MarketCondition, Mood, RiskReward, Trade, TradeSide, TradeStatus};
