//! Payment Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, OrderType};

/// Payment method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Upi,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::Upi => "upi",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub order_id: i64,
    pub payment_method: PaymentMethod,
    /// Amount handed over in currency units; must cover the order total
    pub amount_received: Decimal,
}

/// Process response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub payment_id: i64,
    pub change_returned: Decimal,
}

/// Payment entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub order_id: i64,
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    pub service_charge: Decimal,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub amount_received: Decimal,
    pub change_returned: Decimal,
    pub payment_date: Option<DateTime<Utc>>,
    /// Joined order/customer context (present on get-one lookups)
    #[serde(default)]
    pub order_token: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// One printed line of a bill preview
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillItem {
    pub item_name: String,
    pub category: Category,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
    pub customization: Option<String>,
}

/// Bill preview document (read-only, no payment is recorded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub order_id: i64,
    pub order_token: String,
    pub order_type: OrderType,
    pub table_number: Option<i32>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub items: Vec<BillItem>,
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    /// GST percentage the server applied
    pub gst_percentage: i32,
    pub service_charge: Decimal,
    /// 0 for takeaway
    pub service_charge_percentage: i32,
    pub total_amount: Decimal,
    pub order_date: Option<String>,
}

/// Today's takings, grouped by method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub total_transactions: i64,
    pub total_revenue: Option<Decimal>,
    pub cash_total: Option<Decimal>,
    pub card_total: Option<Decimal>,
    pub upi_total: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_wire_form_is_lowercase() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Upi).unwrap(), "\"upi\"");
        let back: PaymentMethod = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(back, PaymentMethod::Card);
    }

    #[test]
    fn decodes_bill_with_percentages() {
        let raw = r#"{
            "order_id": 41,
            "order_token": "D5-01",
            "order_type": "dine-in",
            "table_number": 5,
            "customer_name": "Asha",
            "customer_phone": "9876543210",
            "items": [{
                "item_name": "Paneer Tikka",
                "category": "appetizer",
                "quantity": 2,
                "unit_price": 100.0,
                "subtotal": 200.0,
                "customization": "extra spicy"
            }],
            "subtotal": 200.0,
            "gst_amount": 10.0,
            "gst_percentage": 5,
            "service_charge": 20.0,
            "service_charge_percentage": 10,
            "total_amount": 230.0,
            "order_date": "2026-03-14 12:00:00"
        }"#;
        let bill: Bill = serde_json::from_str(raw).unwrap();
        assert_eq!(bill.gst_percentage, 5);
        assert_eq!(bill.service_charge_percentage, 10);
        assert_eq!(bill.items.len(), 1);
        assert_eq!(bill.total_amount, Decimal::from(230));
    }

    #[test]
    fn summary_tolerates_empty_day() {
        // SUM() over zero rows comes back null
        let raw = r#"{
            "total_transactions": 0,
            "total_revenue": null,
            "cash_total": null,
            "card_total": null,
            "upi_total": null
        }"#;
        let summary: PaymentSummary = serde_json::from_str(raw).unwrap();
        assert_eq!(summary.total_transactions, 0);
        assert!(summary.total_revenue.is_none());
    }
}
