//! Order submission draft
//!
//! Everything the create-order form holds before it becomes a request:
//! the cart, customer details, and order type. Validation short-circuits
//! on the first failure so each problem gets its own message, and no
//! request is assembled until the whole draft passes.

use thiserror::Error;

use crate::cart::Cart;
use crate::models::{CreateOrderRequest, CustomerInfo, OrderLine, OrderType};
use crate::money::{OrderTotals, PricingConfig};

/// Why a draft cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Cart is empty! Add items first.")]
    EmptyCart,
    #[error("Please enter table number!")]
    MissingTableNumber,
    #[error("Please enter customer name!")]
    MissingCustomerName,
    #[error("Please enter customer phone number!")]
    MissingCustomerPhone,
}

/// An order being assembled, not yet sent
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub order_type: OrderType,
    /// Required iff dine-in, and must be positive
    pub table_number: Option<i32>,
    pub customer_name: String,
    pub customer_phone: String,
    pub special_instructions: String,
    pub cart: Cart,
}

impl OrderDraft {
    pub fn new(order_type: OrderType) -> Self {
        Self {
            order_type,
            ..Self::default()
        }
    }

    /// Current totals for display; recomputed on every call
    pub fn totals(&self, config: &PricingConfig) -> OrderTotals {
        self.cart.totals(self.order_type, config)
    }

    /// Check the draft, first failure wins
    ///
    /// Order: cart non-empty → dine-in table number → customer name →
    /// customer phone. Name and phone are trimmed before the check.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.cart.is_empty() {
            return Err(DraftError::EmptyCart);
        }
        if self.order_type == OrderType::DineIn
            && !self.table_number.is_some_and(|table| table > 0)
        {
            return Err(DraftError::MissingTableNumber);
        }
        if self.customer_name.trim().is_empty() {
            return Err(DraftError::MissingCustomerName);
        }
        if self.customer_phone.trim().is_empty() {
            return Err(DraftError::MissingCustomerPhone);
        }
        Ok(())
    }

    /// Validate and assemble the creation request
    ///
    /// Empty customizations and instructions are dropped rather than sent
    /// as empty strings; the table number is `None` for takeaway even if
    /// the form still holds a stale value.
    pub fn try_into_request(self) -> Result<CreateOrderRequest, DraftError> {
        self.validate()?;

        let table_number = match self.order_type {
            OrderType::DineIn => self.table_number,
            OrderType::Takeaway => None,
        };
        let instructions = self.special_instructions.trim();

        Ok(CreateOrderRequest {
            customer: CustomerInfo {
                name: self.customer_name.trim().to_string(),
                phone: self.customer_phone.trim().to_string(),
                email: None,
            },
            order_type: self.order_type,
            table_number,
            special_instructions: (!instructions.is_empty())
                .then(|| instructions.to_string()),
            items: self
                .cart
                .lines()
                .iter()
                .map(|line| OrderLine {
                    menu_id: line.menu_id,
                    quantity: line.quantity,
                    customization: (!line.customization.trim().is_empty())
                        .then(|| line.customization.clone()),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Cuisine, MenuItem};
    use rust_decimal::Decimal;

    fn draft_with_cart(order_type: OrderType) -> OrderDraft {
        let item = MenuItem {
            menu_id: 7,
            item_name: "Masala Dosa".to_string(),
            description: None,
            category: Category::Main,
            cuisine: Cuisine::SouthIndian,
            price: Decimal::from(120),
            preparation_time: Some(10),
            is_available: true,
        };
        let mut draft = OrderDraft::new(order_type);
        draft.cart.add_item(&item);
        draft.customer_name = "Asha".to_string();
        draft.customer_phone = "9876543210".to_string();
        draft
    }

    #[test]
    fn empty_cart_blocks_first() {
        // even with every other field missing, the cart message wins
        let draft = OrderDraft::new(OrderType::DineIn);
        assert_eq!(draft.validate(), Err(DraftError::EmptyCart));
    }

    #[test]
    fn dine_in_requires_positive_table_number() {
        let mut draft = draft_with_cart(OrderType::DineIn);
        draft.table_number = None;
        assert_eq!(draft.validate(), Err(DraftError::MissingTableNumber));

        draft.table_number = Some(0);
        assert_eq!(draft.validate(), Err(DraftError::MissingTableNumber));

        draft.table_number = Some(5);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn takeaway_needs_no_table() {
        let draft = draft_with_cart(OrderType::Takeaway);
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn blank_name_and_phone_are_rejected_in_order() {
        let mut draft = draft_with_cart(OrderType::Takeaway);
        draft.customer_name = "   ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingCustomerName));

        draft.customer_name = "Asha".to_string();
        draft.customer_phone = String::new();
        assert_eq!(draft.validate(), Err(DraftError::MissingCustomerPhone));
    }

    #[test]
    fn request_drops_stale_table_for_takeaway() {
        let mut draft = draft_with_cart(OrderType::Takeaway);
        // user toggled from dine-in, leaving the field populated
        draft.table_number = Some(4);
        let req = draft.try_into_request().unwrap();
        assert_eq!(req.table_number, None);
    }

    #[test]
    fn request_normalizes_optional_text() {
        let mut draft = draft_with_cart(OrderType::DineIn);
        draft.table_number = Some(2);
        draft.customer_name = "  Asha  ".to_string();
        draft.special_instructions = "   ".to_string();
        draft.cart.set_customization(7, "");

        let req = draft.try_into_request().unwrap();
        assert_eq!(req.customer.name, "Asha");
        assert_eq!(req.special_instructions, None);
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].customization, None);
    }

    #[test]
    fn request_carries_cart_lines() {
        let mut draft = draft_with_cart(OrderType::DineIn);
        draft.table_number = Some(5);
        draft.cart.set_quantity(7, 3);
        draft.cart.set_customization(7, "less oil");

        let req = draft.try_into_request().unwrap();
        assert_eq!(req.order_type, OrderType::DineIn);
        assert_eq!(req.table_number, Some(5));
        assert_eq!(req.items[0].menu_id, 7);
        assert_eq!(req.items[0].quantity, 3);
        assert_eq!(req.items[0].customization.as_deref(), Some("less oil"));
    }

    #[test]
    fn invalid_draft_never_yields_a_request() {
        let draft = OrderDraft::new(OrderType::DineIn);
        assert!(draft.try_into_request().is_err());
    }
}
