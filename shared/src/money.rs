//! Money arithmetic using rust_decimal for precision
//!
//! All monetary computation is done in `Decimal` and stays in `Decimal`
//! until the display layer; rounding happens exactly once, at formatting
//! time. The wire format is plain JSON numbers (`serde-with-float`).

use rust_decimal::prelude::*;
use crate::models::OrderType;

/// Rounding strategy for monetary display (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for precise calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round a monetary value to display precision
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a monetary value as a currency string
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use shared::money::format_money;
///
/// assert_eq!(format_money(Decimal::new(1250, 2)), "₹12.50");
/// assert_eq!(format_money(Decimal::from(100)), "₹100.00");
/// ```
pub fn format_money(value: Decimal) -> String {
    format!("₹{:.2}", to_f64(value))
}

/// Tax and service-charge percentages for one deployment
///
/// The percentages are configuration, not business logic: the defaults
/// match the standard deployment (5% GST on everything, 10% service
/// charge on dine-in), but a venue can override either.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// GST percentage applied to every order
    pub gst_percent: Decimal,
    /// Service charge percentage, dine-in orders only
    pub service_charge_percent: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            gst_percent: Decimal::from(5),
            service_charge_percent: Decimal::from(10),
        }
    }
}

impl PricingConfig {
    pub fn new(gst_percent: Decimal, service_charge_percent: Decimal) -> Self {
        Self {
            gst_percent,
            service_charge_percent,
        }
    }
}

/// Computed order amounts, full precision
///
/// Recomputed from the current lines on every cart change; never cached as
/// authoritative. The server repeats the same computation at creation time
/// and its result is what ends up on the order row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub service_charge: Decimal,
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute totals over `(unit_price, quantity)` pairs
    ///
    /// `subtotal = Σ price × qty`, GST on the subtotal for every order
    /// type, service charge on the subtotal for dine-in only. An empty
    /// iterator yields all zeros. Quantities are trusted to be positive
    /// (the cart never holds a non-positive line).
    pub fn compute<I>(lines: I, order_type: OrderType, config: &PricingConfig) -> Self
    where
        I: IntoIterator<Item = (Decimal, i32)>,
    {
        let subtotal: Decimal = lines
            .into_iter()
            .map(|(price, qty)| price * Decimal::from(qty))
            .sum();

        let gst = subtotal * config.gst_percent / Decimal::ONE_HUNDRED;
        let service_charge = match order_type {
            OrderType::DineIn => subtotal * config.service_charge_percent / Decimal::ONE_HUNDRED,
            OrderType::Takeaway => Decimal::ZERO,
        };

        Self {
            subtotal,
            gst,
            service_charge,
            total: subtotal + gst + service_charge,
        }
    }
}
