//! In-progress order cart
//!
//! Session-local collection of selected menu items. Owned by one order
//! draft; discarded on submission or navigation away. All operations are
//! synchronous and in-memory, and the invariant is: at most one line per
//! menu id, and no line with a non-positive quantity.

use rust_decimal::Decimal;

use crate::models::{MenuItem, OrderType};
use crate::money::{OrderTotals, PricingConfig};

/// One selected menu item with quantity and kitchen note
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub menu_id: i64,
    pub item_name: String,
    /// Unit price in currency units, captured when the item was added
    pub unit_price: Decimal,
    pub quantity: i32,
    /// Free-text customization ("extra spicy", "no onions"); not validated
    pub customization: String,
}

impl CartLine {
    /// Line total (unit_price × quantity)
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// The cart itself, in insertion order
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item`
    ///
    /// Idempotent insert: a second add of the same menu id increments the
    /// existing line instead of creating a duplicate.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.line_mut(item.menu_id) {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine {
            menu_id: item.menu_id,
            item_name: item.item_name.clone(),
            unit_price: item.price,
            quantity: 1,
            customization: String::new(),
        });
    }

    /// Set a line's quantity; `qty <= 0` removes the line
    pub fn set_quantity(&mut self, menu_id: i64, qty: i32) {
        if qty <= 0 {
            self.lines.retain(|line| line.menu_id != menu_id);
        } else if let Some(line) = self.line_mut(menu_id) {
            line.quantity = qty;
        }
    }

    /// Remove a line outright
    pub fn remove(&mut self, menu_id: i64) {
        self.set_quantity(menu_id, 0);
    }

    /// Update the free-text note on a line; no-op if the line is absent
    pub fn set_customization(&mut self, menu_id: i64, text: impl Into<String>) {
        if let Some(line) = self.line_mut(menu_id) {
            line.customization = text.into();
        }
    }

    pub fn line(&self, menu_id: i64) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.menu_id == menu_id)
    }

    fn line_mut(&mut self, menu_id: i64) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.menu_id == menu_id)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recompute totals from the current lines
    pub fn totals(&self, order_type: OrderType, config: &PricingConfig) -> OrderTotals {
        OrderTotals::compute(
            self.lines.iter().map(|line| (line.unit_price, line.quantity)),
            order_type,
            config,
        )
    }
}
