//! # Pricing and Currency Conversion
//!
//! Pure derivation functions shared by the cart drawer, the checkout
//! workflow and order history.
//!
//! All stored amounts are base-currency (USDT) cents. ARS amounts exist only
//! at display/settlement time, produced here from a whole `ARS per USDT`
//! rate (a snapshot's `max_price`). Conversion uses integer math with i128
//! intermediates; the ARS→USDT direction rounds half away from zero, so a
//! round-trip reproduces the original value within one cent.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Currency, ShippingMethod};

// =============================================================================
// Conversion
// =============================================================================

/// Converts a base-currency amount to ARS at the given whole rate.
///
/// Exact: `cents × rate` has no fractional part when the rate is whole.
pub fn convert_usdt_to_ars(amount: Money, rate: i64) -> Money {
    let rate = rate.max(1); // rates are whole ARS per USDT, never below 1
    let ars = amount.cents() as i128 * rate as i128;
    Money::from_cents(ars as i64)
}

/// Converts an ARS amount back to base-currency cents at the given rate.
///
/// Rounds half away from zero. `convert_ars_to_usdt(convert_usdt_to_ars(v))`
/// equals `v` exactly; independent ARS inputs round within one cent.
pub fn convert_ars_to_usdt(amount: Money, rate: i64) -> Money {
    let rate = rate.max(1) as i128;
    let v = amount.cents() as i128;
    let usdt = if v >= 0 {
        (v * 2 + rate) / (rate * 2)
    } else {
        (v * 2 - rate) / (rate * 2)
    };
    Money::from_cents(usdt as i64)
}

/// Converts a base-currency amount into the selected display currency.
pub fn display_amount(amount: Money, currency: Currency, rate: i64) -> Money {
    match currency {
        Currency::Usdt => amount,
        Currency::Ars => convert_usdt_to_ars(amount, rate),
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Derived totals for a checkout in progress, in base currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Money,
    pub shipping_cost: Money,
    pub total: Money,
}

impl OrderTotals {
    /// Converts all three amounts into the selected display currency.
    pub fn in_currency(&self, currency: Currency, rate: i64) -> OrderTotals {
        OrderTotals {
            subtotal: display_amount(self.subtotal, currency, rate),
            shipping_cost: display_amount(self.shipping_cost, currency, rate),
            total: display_amount(self.total, currency, rate),
        }
    }
}

/// Computes order totals from the cart subtotal and the shipping method.
pub fn order_totals(subtotal: Money, method: ShippingMethod) -> OrderTotals {
    let shipping_cost = method.cost();
    OrderTotals {
        subtotal,
        shipping_cost,
        total: subtotal + shipping_cost,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pickup_totals() {
        // Cart: one product at 500, quantity 2, picked up in store.
        let subtotal = Money::from_major(500).multiply_quantity(2);
        let totals = order_totals(subtotal, ShippingMethod::Pickup);

        assert_eq!(totals.subtotal, Money::from_major(1000));
        assert_eq!(totals.shipping_cost, Money::zero());
        assert_eq!(totals.total, Money::from_major(1000));
    }

    #[test]
    fn test_viacargo_totals_displayed_in_ars() {
        // Same cart, branch delivery, settled in ARS at 1300.
        let subtotal = Money::from_major(500).multiply_quantity(2);
        let totals = order_totals(subtotal, ShippingMethod::Viacargo);

        assert_eq!(totals.total, Money::from_major(17_000));

        let displayed = totals.in_currency(Currency::Ars, 1300);
        // Shipping is a base-currency constant, converted at display time.
        assert_eq!(displayed.shipping_cost, Money::from_major(16_000 * 1300));
        assert_eq!(displayed.total, Money::from_major(22_100_000));
    }

    #[test]
    fn test_usdt_display_is_identity() {
        let amount = Money::from_cents(123_456);
        assert_eq!(display_amount(amount, Currency::Usdt, 1300), amount);
    }

    #[test]
    fn test_conversion_round_trip_within_one_cent() {
        let rate = 1298;
        for cents in [0, 1, 99, 100, 50_000, 1_700_000, 987_654_321] {
            let original = Money::from_cents(cents);
            let ars = convert_usdt_to_ars(original, rate);
            let back = convert_ars_to_usdt(ars, rate);
            let drift = (back.cents() - original.cents()).abs();
            assert!(drift <= 1, "round-trip drift {} for {}", drift, cents);
        }
    }

    #[test]
    fn test_ars_to_usdt_rounds_half_away_from_zero() {
        // 650 ARS cents at rate 1300 is exactly half a cent.
        assert_eq!(
            convert_ars_to_usdt(Money::from_cents(650), 1300),
            Money::from_cents(1)
        );
        assert_eq!(
            convert_ars_to_usdt(Money::from_cents(649), 1300),
            Money::from_cents(0)
        );
        assert_eq!(
            convert_ars_to_usdt(Money::from_cents(-650), 1300),
            Money::from_cents(-1)
        );
    }
}
