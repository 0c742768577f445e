//! Backtest run configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;
use crate::models::TradeSide;

/// Strategy selector: one named strategy, or every strategy at once.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StrategyFilter {
    /// No strategy filter (the `"ALL"` sentinel on the wire).
    #[default]
    All,
    /// Match trades tagged with this strategy name, case-insensitively.
    Named(String),
}

impl StrategyFilter {
    /// Display label for reports.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Strategies",
            Self::Named(name) => name,
        }
    }

    /// Whether the given strategy-tag set satisfies this filter.
    #[must_use]
    pub fn matches(&self, strategy_tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => strategy_tags.iter().any(|tag| tag.eq_ignore_ascii_case(name)),
        }
    }
}

impl From<String> for StrategyFilter {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("ALL") {
            Self::All
        } else {
            Self::Named(value)
        }
    }
}

impl From<StrategyFilter> for String {
    fn from(value: StrategyFilter) -> Self {
        match value {
            StrategyFilter::All => "ALL".to_string(),
            StrategyFilter::Named(name) => name,
        }
    }
}

/// Direction selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SideFilter {
    /// Both directions.
    #[default]
    All,
    /// Long trades only.
    Long,
    /// Short trades only.
    Short,
}

impl SideFilter {
    /// Whether a trade's direction satisfies this filter.
    #[must_use]
    pub const fn matches(self, side: TradeSide) -> bool {
        match self {
            Self::All => true,
            Self::Long => matches!(side, TradeSide::Long),
            Self::Short => matches!(side, TradeSide::Short),
        }
    }
}

/// Criteria for one backtest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacktestConfig {
    /// Strategy to replay.
    #[serde(default)]
    pub strategy: StrategyFilter,
    /// First entry date considered, inclusive.
    pub start_date: NaiveDate,
    /// Last entry date considered, inclusive of the whole day.
    pub end_date: NaiveDate,
    /// Direction filter.
    #[serde(default)]
    pub side: SideFilter,
    /// Free-text condition: case-insensitive substring matched against a
    /// trade's setup tags or its notes. Blank matches everything.
    #[serde(default)]
    pub condition: String,
    /// Simulated starting balance. Must be positive.
    pub initial_capital: Decimal,
}

impl BacktestConfig {
    /// Check the criteria before a run.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive starting balance: the drawdown percentage
    /// divides by the running equity peak, which a zero or negative start
    /// would make meaningless.
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        if self.initial_capital <= Decimal::ZERO {
            return Err(AnalyticsError::InvalidValue {
                field: "initialCapital".to_string(),
                message: "starting balance must be positive".to_string(),
            });
        }
        Ok(())
    }
}
