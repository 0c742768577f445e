//! The trade record: one journal entry and its realized result.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::wire;

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeSide {
    /// Bought first, profits when price rises.
    Long,
    /// Sold first, profits when price falls.
    Short,
}

/// Trade lifecycle status. Only closed trades take part in aggregation and
/// backtesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Position still open; result not realized.
    Open,
    /// Final exit recorded.
    Closed,
    /// Closed flat.
    BreakEven,
}

/// Asset class of the traded instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    /// Single-name stock.
    Equity,
    /// Index instrument.
    Index,
    /// Futures contract.
    Futures,
    /// Options contract.
    Options,
    /// Cryptocurrency.
    Crypto,
}

/// Market condition at entry, as the trader judged it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCondition {
    /// Strong directional trend.
    #[serde(rename = "Trending (Strong)")]
    TrendingStrong,
    /// Mild directional trend.
    #[serde(rename = "Trending (Mild)")]
    TrendingMild,
    /// Range-bound market.
    #[serde(rename = "Range Bound")]
    RangeBound,
    /// Choppy or volatile market.
    #[serde(rename = "Choppy/Volatile")]
    Choppy,
}

/// Mood at entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    /// Calm, no notable state.
    Neutral,
    /// Stressed.
    Stressed,
    /// Excited.
    Excited,
    /// Bored.
    Bored,
    /// Distracted.
    Distracted,
}

/// Risk:reward ratio, in either of the forms the entry form accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskReward {
    /// Plain numeric ratio, e.g. `2.5`.
    Numeric(Decimal),
    /// Free-text form, e.g. `"1:2.5"`.
    Text(String),
}

impl RiskReward {
    /// Numeric value of the ratio, if a usable one can be extracted.
    ///
    /// The text form takes the value after the last colon (`"1:2.5"`
    /// yields `2.5`). Unparsable or non-positive values yield `None` and
    /// drop out of averages.
    #[must_use]
    pub fn value(&self) -> Option<Decimal> {
        let parsed = match self {
            Self::Numeric(value) => Some(*value),
            Self::Text(text) => text
                .rsplit(':')
                .next()
                .and_then(|token| token.trim().parse().ok()),
        };
        parsed.filter(|v| *v > Decimal::ZERO)
    }
}

/// A single journal entry: one execution with its realized or open result.
///
/// `pnl` is whatever the trade-entry workflow recorded and is treated as
/// ground truth - nothing in this crate recomputes it from the priced legs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    /// Unique trade identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Instrument symbol.
    pub symbol: String,
    /// Asset class of the instrument.
    pub asset_class: AssetClass,
    /// Trade direction.
    #[serde(rename = "type")]
    pub side: TradeSide,
    /// Entry timestamp.
    #[serde(rename = "entryDate", deserialize_with = "wire::required_timestamp")]
    pub entry_time: DateTime<Utc>,
    /// Exit timestamp, absent while the position is open.
    #[serde(
        rename = "exitDate",
        default,
        deserialize_with = "wire::optional_timestamp"
    )]
    pub exit_time: Option<DateTime<Utc>>,
    /// Entry price.
    #[serde(default, deserialize_with = "wire::lenient_decimal")]
    pub entry_price: Decimal,
    /// Exit price (zero until closed).
    #[serde(default, deserialize_with = "wire::lenient_decimal")]
    pub exit_price: Decimal,
    /// Quantity traded.
    #[serde(default, deserialize_with = "wire::lenient_decimal")]
    pub quantity: Decimal,
    /// Stop-loss price, when one was set.
    #[serde(default)]
    pub stop_loss: Option<Decimal>,
    /// Target price, when one was set.
    #[serde(default)]
    pub target: Option<Decimal>,
    /// Fees paid. Already subtracted from `pnl` by the entry workflow.
    #[serde(default, deserialize_with = "wire::lenient_decimal")]
    pub fees: Decimal,
    /// Realized (or running) net profit/loss. Authoritative.
    #[serde(default, deserialize_with = "wire::lenient_decimal")]
    pub pnl: Decimal,
    /// Risk:reward ratio, numeric or `"N:M"` text.
    #[serde(default)]
    pub rr_ratio: Option<RiskReward>,
    /// Lifecycle status.
    pub status: TradeStatus,
    /// Setup labels.
    #[serde(default)]
    pub setups: Vec<String>,
    /// Strategy labels; the backtester filters on these.
    #[serde(default)]
    pub strategies: Vec<String>,
    /// Market condition at entry.
    #[serde(default)]
    pub market_condition: Option<MarketCondition>,
    /// Market events in play (FOMC, earnings, ...).
    #[serde(default)]
    pub market_events: Vec<String>,
    /// Mistake labels.
    #[serde(default)]
    pub mistakes: Vec<String>,
    /// Mood at entry.
    #[serde(default)]
    pub mood: Option<Mood>,
    /// Emotion labels.
    #[serde(default)]
    pub emotions: Vec<String>,
    /// Execution notes.
    #[serde(default)]
    pub notes: String,
    /// Psychology notes.
    #[serde(default)]
    pub psychology_notes: Option<String>,
    /// Self-rating, 1-5.
    #[serde(default)]
    pub rating: Option<u8>,
    /// Attachment URLs (opaque to the analysis core).
    #[serde(default)]
    pub image_urls: Vec<String>,
}

impl Trade {
    /// Whether the trade has a recorded final exit.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.status == TradeStatus::Closed
    }

    /// Whether the trade counts as a win: strictly positive result.
    /// Break-even and losses both count as non-wins.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.pnl > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn parse(row: serde_json::Value) -> Trade {
        serde_json::from_value(row).unwrap()
    }

    #[test]
    fn full_row_round_trips() {
        let trade = parse(json!({
            "id": "t-1",
            "userId": "u-1",
            "symbol": "NIFTY",
            "assetClass": "Index",
            "type": "LONG",
            "entryDate": "2024-01-05T09:20:00Z",
            "exitDate": "2024-01-05T11:45:00Z",
            "entryPrice": 21650.5,
            "exitPrice": 21710.0,
            "quantity": 50,
            "stopLoss": 21600.0,
            "target": 21750.0,
            "fees": 42.5,
            "pnl": 2932.5,
            "rrRatio": "1:2.5",
            "status": "CLOSED",
            "setups": ["ORB"],
            "strategies": ["Opening Range"],
            "marketCondition": "Trending (Strong)",
            "mistakes": [],
            "mood": "Neutral",
            "emotions": ["Confident"],
            "notes": "clean breakout",
            "rating": 4,
            "imageUrls": []
        }));

        assert_eq!(trade.symbol, "NIFTY");
        assert_eq!(trade.side, TradeSide::Long);
        assert_eq!(trade.status, TradeStatus::Closed);
        assert_eq!(trade.pnl, dec!(2932.5));
        assert_eq!(trade.market_condition, Some(MarketCondition::TrendingStrong));
        assert!(trade.is_closed());
        assert!(trade.is_win());

        let back = serde_json::to_value(&trade).unwrap();
        assert_eq!(back["type"], "LONG");
        assert_eq!(back["status"], "CLOSED");
        assert_eq!(back["marketCondition"], "Trending (Strong)");
        let again: Trade = serde_json::from_value(back).unwrap();
        assert_eq!(again, trade);
    }

    #[test]
    fn dirty_row_still_loads() {
        let trade = parse(json!({
            "id": "t-2",
            "userId": "u-1",
            "symbol": "BTCUSDT",
            "assetClass": "Crypto",
            "type": "SHORT",
            "entryDate": "2023-11-12",
            "exitDate": "unknown",
            "pnl": "not-a-number",
            "status": "CLOSED"
        }));

        assert_eq!(trade.pnl, Decimal::ZERO);
        assert_eq!(trade.exit_time, None);
        assert_eq!(trade.entry_price, Decimal::ZERO);
        assert!(trade.setups.is_empty());
        assert!(trade.notes.is_empty());
        assert_eq!(trade.entry_time.to_rfc3339(), "2023-11-12T00:00:00+00:00");
    }

    #[test]
    fn unparsable_entry_date_is_rejected() {
        let result: Result<Trade, _> = serde_json::from_value(json!({
            "id": "t-3",
            "userId": "u-1",
            "symbol": "AAPL",
            "assetClass": "Equity",
            "type": "LONG",
            "entryDate": "a while ago",
            "status": "OPEN"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn break_even_wire_spelling() {
        let status: TradeStatus = serde_json::from_value(json!("BREAK_EVEN")).unwrap();
        assert_eq!(status, TradeStatus::BreakEven);
    }

    #[test]
    fn risk_reward_numeric() {
        assert_eq!(RiskReward::Numeric(dec!(2.5)).value(), Some(dec!(2.5)));
        assert_eq!(RiskReward::Numeric(dec!(0)).value(), None);
        assert_eq!(RiskReward::Numeric(dec!(-1)).value(), None);
    }

    #[test]
    fn risk_reward_text_takes_last_colon_token() {
        assert_eq!(RiskReward::Text("1:2.5".to_string()).value(), Some(dec!(2.5)));
        assert_eq!(RiskReward::Text("3".to_string()).value(), Some(dec!(3)));
        assert_eq!(RiskReward::Text("a:b:4".to_string()).value(), Some(dec!(4)));
        assert_eq!(RiskReward::Text("1: 2".to_string()).value(), Some(dec!(2)));
    }

    #[test]
    fn risk_reward_text_skips_unusable_values() {
        assert_eq!(RiskReward::Text("1:zero".to_string()).value(), None);
        assert_eq!(RiskReward::Text("1:-2".to_string()).value(), None);
        assert_eq!(RiskReward::Text("1:0".to_string()).value(), None);
        assert_eq!(RiskReward::Text(String::new()).value(), None);
    }

    #[test]
    fn risk_reward_deserializes_both_forms() {
        let numeric: RiskReward = serde_json::from_value(json!(1.8)).unwrap();
        assert_eq!(numeric.value(), Some(dec!(1.8)));

        let text: RiskReward = serde_json::from_value(json!("1:3")).unwrap();
        assert_eq!(text.value(), Some(dec!(3)));
    }
}
