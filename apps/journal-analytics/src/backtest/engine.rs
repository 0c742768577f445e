//! Backtest replay.

use rust_decimal::Decimal;
use tracing::{debug, info};

use super::config::BacktestConfig;
use super::filter::select_trades;
use super::report::{BacktestReport, BacktestSummary};
use crate::error::AnalyticsError;
use crate::models::Trade;
use crate::stats::{EquityPoint, profit_factor};

/// Sentinel profit factor for a run with no losing trades. A narrow backtest
/// slice with zero losses is common, so this sits an order of magnitude
/// above the dashboard's cap while staying a plain, comparable number.
const PROFIT_FACTOR_CAP: Decimal = Decimal::ONE_HUNDRED;

/// Replays a filtered slice of the journal against a simulated balance.
///
/// The engine holds only its criteria; [`BacktestEngine::run`] is a pure
/// function of the collection it is handed, so one engine can serve
/// concurrent callers over independent collections.
#[derive(Debug, Clone)]
pub struct BacktestEngine {
    config: BacktestConfig,
}

impl BacktestEngine {
    /// Create an engine from validated criteria.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidValue`] for a non-positive starting
    /// balance.
    pub fn new(config: BacktestConfig) -> Result<Self, AnalyticsError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The criteria this engine replays.
    #[must_use]
    pub const fn config(&self) -> &BacktestConfig {
        &self.config
    }

    /// Run the backtest over the given journal.
    #[must_use]
    pub fn run(&self, trades: &[Trade]) -> BacktestReport {
        let selected = select_trades(trades, &self.config);
        let strategy = self.config.strategy.label().to_string();

        info!(
            strategy = %strategy,
            matched = selected.len(),
            available = trades.len(),
            "backtest run"
        );

        if selected.is_empty() {
            return BacktestReport::NoMatches { strategy };
        }

        let initial = self.config.initial_capital;
        let mut equity = initial;
        let mut peak = initial;
        let mut max_drawdown = Decimal::ZERO;
        let mut total_pnl = Decimal::ZERO;
        let mut wins = 0u64;
        let mut gross_profit = Decimal::ZERO;
        let mut gross_loss = Decimal::ZERO;

        // Pre-trade origin point so the chart starts at the starting balance.
        let mut curve = Vec::with_capacity(selected.len() + 1);
        curve.push(EquityPoint {
            date: self.config.start_date.format("%Y-%m-%d").to_string(),
            equity: initial.round_dp(2),
        });

        for trade in &selected {
            total_pnl += trade.pnl;
            equity += trade.pnl;
            if equity > peak {
                peak = equity;
            }
            let drawdown = (peak - equity) / peak * Decimal::ONE_HUNDRED;
            if drawdown > max_drawdown {
                max_drawdown = drawdown;
            }
            if trade.is_win() {
                wins += 1;
                gross_profit += trade.pnl;
            } else {
                gross_loss += trade.pnl.abs();
            }
            curve.push(EquityPoint {
                date: trade.entry_time.format("%Y-%m-%d").to_string(),
                equity: equity.round_dp(2),
            });

            debug!(trade_id = %trade.id, pnl = %trade.pnl, equity = %equity, "replayed trade");
        }

        let count = selected.len() as u64;
        let win_rate = Decimal::from(wins) / Decimal::from(count) * Decimal::ONE_HUNDRED;

        BacktestReport::Completed(BacktestSummary {
            strategy,
            trade_count: count,
            total_pnl: total_pnl.round_dp(2),
            win_rate,
            profit_factor: profit_factor(gross_profit, gross_loss, PROFIT_FACTOR_CAP),
            max_drawdown,
            equity_curve: curve,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::backtest::config::{SideFilter, StrategyFilter};

    fn trade(id: &str, entry: &str, pnl: f64) -> Trade {
        serde_json::from_value(json!({
            "id": id,
            "userId": "u-1",
            "symbol": "NIFTY",
            "assetClass": "Index",
            "type": "LONG",
            "entryDate": entry,
            "status": "CLOSED",
            "pnl": pnl,
        }))
        .unwrap()
    }

    fn engine() -> BacktestEngine {
        BacktestEngine::new(BacktestConfig {
            strategy: StrategyFilter::All,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            side: SideFilter::All,
            condition: String::new(),
            initial_capital: dec!(100000),
        })
        .unwrap()
    }

    #[test]
    fn rejects_non_positive_capital() {
        let mut config = engine().config().clone();
        config.initial_capital = Decimal::ZERO;
        assert!(BacktestEngine::new(config).is_err());
    }

    #[test]
    fn empty_journal_yields_no_matches() {
        let report = engine().run(&[]);
        assert_eq!(
            report,
            BacktestReport::NoMatches {
                strategy: "All Strategies".to_string()
            }
        );
    }

    #[test]
    fn replay_produces_the_full_summary() {
        let trades = vec![
            trade("t-1", "2024-01-01", 1000.0),
            trade("t-2", "2024-01-05", -400.0),
            trade("t-3", "2024-01-10", 1000.0),
        ];
        let report = engine().run(&trades);
        let summary = report.summary().unwrap();

        assert_eq!(summary.strategy, "All Strategies");
        assert_eq!(summary.trade_count, 3);
        assert_eq!(summary.total_pnl, dec!(1600));
        assert_eq!(summary.win_rate.round_dp(2), dec!(66.67));
        assert_eq!(summary.profit_factor, dec!(5));
        // Deepest decline: 400 off a 101,000 peak.
        assert_eq!(summary.max_drawdown.round_dp(4), dec!(0.3960));
    }

    #[test]
    fn equity_curve_is_seeded_with_the_starting_balance() {
        let trades = vec![
            trade("t-1", "2024-01-05", 1000.0),
            trade("t-2", "2024-01-10", -400.0),
        ];
        let report = engine().run(&trades);
        let curve = &report.summary().unwrap().equity_curve;

        assert_eq!(curve.len(), 3);
        assert_eq!(curve[0].date, "2024-01-01");
        assert_eq!(curve[0].equity, dec!(100000));
        assert_eq!(curve[1].equity, dec!(101000));
        assert_eq!(curve[2].equity, dec!(100600));
    }

    #[test]
    fn last_curve_point_reflects_total_pnl() {
        let trades = vec![
            trade("t-1", "2024-01-03", 512.25),
            trade("t-2", "2024-01-07", -130.5),
        ];
        let report = engine().run(&trades);
        let summary = report.summary().unwrap();

        let last = summary.equity_curve.last().unwrap();
        assert_eq!(last.equity, dec!(100000) + summary.total_pnl);
    }

    #[test]
    fn drawdown_is_zero_when_equity_only_rises() {
        let trades = vec![
            trade("t-1", "2024-01-03", 500.0),
            trade("t-2", "2024-01-07", 700.0),
        ];
        let summary = engine().run(&trades).summary().cloned().unwrap();
        assert_eq!(summary.max_drawdown, Decimal::ZERO);
        assert_eq!(summary.profit_factor, dec!(100));
        assert_eq!(summary.win_rate, dec!(100));
    }

    #[test]
    fn break_even_trades_count_against_the_win_rate() {
        let trades = vec![
            trade("t-1", "2024-01-03", 500.0),
            trade("t-2", "2024-01-07", 0.0),
        ];
        let summary = engine().run(&trades).summary().cloned().unwrap();
        assert_eq!(summary.trade_count, 2);
        assert_eq!(summary.win_rate, dec!(50));
        // A flat trade adds nothing to gross loss, so the cap applies.
        assert_eq!(summary.profit_factor, dec!(100));
    }

    #[test]
    fn long_and_short_runs_partition_the_journal() {
        let mut trades = vec![
            trade("l-1", "2024-01-03", 500.0),
            trade("l-2", "2024-01-10", -250.0),
        ];
        let mut short = trade("s-1", "2024-01-05", 300.0);
        short.side = crate::models::TradeSide::Short;
        trades.push(short);

        let mut long_config = engine().config().clone();
        long_config.side = SideFilter::Long;
        let mut short_config = engine().config().clone();
        short_config.side = SideFilter::Short;

        let longs = BacktestEngine::new(long_config).unwrap().run(&trades);
        let shorts = BacktestEngine::new(short_config).unwrap().run(&trades);

        assert_eq!(longs.trade_count() + shorts.trade_count(), trades.len() as u64);
        assert_eq!(longs.trade_count(), 2);
        assert_eq!(shorts.trade_count(), 1);
    }
}
