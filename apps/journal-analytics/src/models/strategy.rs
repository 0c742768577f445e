//! Strategy definitions: named rule bundles used as backtest filter keys.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Trade;

/// A user-defined strategy: a named bundle of rule text plus a timeframe
/// label. The analysis core only ever reads the name - the rules are for
/// the trader, not the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    /// Unique strategy identifier.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Display name; the key trades are tagged with.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Timeframe label ("Intraday", "Swing", ...).
    #[serde(default)]
    pub timeframe: Option<String>,
    /// Entry rule text.
    #[serde(default)]
    pub entry_rules: Option<String>,
    /// Exit rule text.
    #[serde(default)]
    pub exit_rules: Option<String>,
    /// Stop-loss rule text.
    #[serde(default)]
    pub stop_loss_logic: Option<String>,
    /// Take-profit rule text.
    #[serde(default)]
    pub take_profit_logic: Option<String>,
    /// Risk-management rule text.
    #[serde(default)]
    pub risk_management: Option<String>,
    /// Creation timestamp, as recorded by the store.
    #[serde(default)]
    pub created_at: String,
}

/// Every strategy name a backtest can filter on: defined strategies unioned
/// with the strategy tags already present on trades, deduplicated and
/// sorted.
#[must_use]
pub fn strategy_name_catalog(strategies: &[Strategy], trades: &[Trade]) -> Vec<String> {
    let mut names: BTreeSet<String> = strategies.iter().map(|s| s.name.clone()).collect();
    for trade in trades {
        for tag in &trade.strategies {
            names.insert(tag.clone());
        }
    }
    names.into_iter().collect()
}
