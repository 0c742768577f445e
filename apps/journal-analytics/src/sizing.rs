//! Fixed-fractional position sizing.
//!
//! The journal's tools page sizes a position from the account balance, the
//! fraction of it the trader is willing to lose, and the distance between
//! entry and stop.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a position-size calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSize {
    /// Amount at risk: balance times the risk percentage.
    pub risk_amount: Decimal,
    /// Adverse move per unit: |entry - stop|.
    pub risk_per_unit: Decimal,
    /// Units to trade, floored to a whole number.
    pub quantity: Decimal,
    /// Capital required at the entry price.
    pub capital_required: Decimal,
}

/// Size a position so that a stop-out loses `risk_percent` of `balance`.
///
/// Returns `None` when the inputs cannot produce a meaningful size: a
/// non-positive balance, percentage, or entry price, or a stop equal to the
/// entry (zero risk per unit).
#[must_use]
pub fn position_size(
    balance: Decimal,
    risk_percent: Decimal,
    entry_price: Decimal,
    stop_price: Decimal,
) -> Option<PositionSize> {
    if balance <= Decimal::ZERO || risk_percent <= Decimal::ZERO || entry_price <= Decimal::ZERO {
        return None;
    }

    let risk_per_unit = (entry_price - stop_price).abs();
    if risk_per_unit == Decimal::ZERO {
        return None;
    }

    let risk_amount = balance * risk_percent / Decimal::ONE_HUNDRED;
    let quantity = (risk_amount / risk_per_unit).floor();
    let capital_required = quantity * entry_price;

    Some(PositionSize {
        risk_amount,
        risk_per_unit,
        quantity,
        capital_required,
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn sizes_a_one_percent_risk_position() {
        let size = position_size(dec!(100000), dec!(1), dec!(500), dec!(490)).unwrap();

        assert_eq!(size.risk_amount, dec!(1000));
        assert_eq!(size.risk_per_unit, dec!(10));
        assert_eq!(size.quantity, dec!(100));
        assert_eq!(size.capital_required, dec!(50000));
    }

    #[test]
    fn quantity_floors_to_whole_units() {
        let size = position_size(dec!(100000), dec!(1), dec!(500), dec!(493)).unwrap();
        // 1000 / 7 = 142.857...
        assert_eq!(size.quantity, dec!(142));
    }

    #[test]
    fn short_side_stop_above_entry_works_too() {
        let size = position_size(dec!(50000), dec!(2), dec!(200), dec!(204)).unwrap();
        assert_eq!(size.risk_per_unit, dec!(4));
        assert_eq!(size.quantity, dec!(250));
    }

    #[test]
    fn stop_at_entry_is_unusable() {
        assert!(position_size(dec!(100000), dec!(1), dec!(500), dec!(500)).is_none());
    }

    #[test]
    fn non_positive_inputs_are_unusable() {
        assert!(position_size(dec!(0), dec!(1), dec!(500), dec!(490)).is_none());
        assert!(position_size(dec!(100000), dec!(0), dec!(500), dec!(490)).is_none());
        assert!(position_size(dec!(100000), dec!(1), dec!(0), dec!(490)).is_none());
        assert!(position_size(dec!(-5), dec!(1), dec!(500), dec!(490)).is_none());
    }
}
