//! Order Model

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::OrderStatus;

/// Order service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderType {
    /// Consumed at a table on premises; incurs service charge
    #[default]
    DineIn,
    /// Picked up by the customer; no service charge
    Takeaway,
}

impl OrderType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DineIn => "dine-in",
            Self::Takeaway => "takeaway",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item (immutable once submitted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_id: i64,
    pub item_name: String,
    pub quantity: i32,
    /// Unit price in currency units, captured at order time
    pub unit_price: Decimal,
    /// Line subtotal (unit_price × quantity)
    pub subtotal: Decimal,
    pub customization: Option<String>,
    /// Preparation time in minutes, joined from the menu for the kitchen
    pub preparation_time: Option<i32>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    /// Human-facing token shown to customers and kitchen
    /// (`T-001` takeaway, `D5-01` dine-in table 5)
    pub order_token: String,
    pub order_type: OrderType,
    /// Present iff dine-in
    pub table_number: Option<i32>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub order_status: OrderStatus,
    pub special_instructions: Option<String>,
    /// Amounts in currency units, computed by the server at creation
    pub subtotal: Decimal,
    pub gst_amount: Decimal,
    pub service_charge: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    /// Line items (populated by get-one and the kitchen queue; list rows omit them)
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Minutes elapsed since the order was created
    pub fn age_minutes(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_minutes()
    }

    /// Derived display attribute: active and older than the urgency threshold
    pub fn is_urgent(&self, now: DateTime<Utc>) -> bool {
        crate::order::is_urgent(self.order_status, self.created_at, now)
    }
}

/// Customer details carried on the creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One line of the creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_id: i64,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<String>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub customer: CustomerInfo,
    pub order_type: OrderType,
    /// `None` for takeaway
    pub table_number: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    pub items: Vec<OrderLine>,
}

/// Create response payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: i64,
    pub order_token: String,
    pub total_amount: Decimal,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusPatch {
    pub order_status: OrderStatus,
}

/// List query filter
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub order_type: Option<OrderType>,
    pub status: Option<OrderStatus>,
    pub date: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn for_type(order_type: OrderType) -> Self {
        Self {
            order_type: Some(order_type),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Query-string pairs for the list endpoint
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(order_type) = self.order_type {
            pairs.push(("order_type", order_type.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(date) = self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_order(status: OrderStatus) -> Order {
        Order {
            order_id: 41,
            order_token: "D5-01".to_string(),
            order_type: OrderType::DineIn,
            table_number: Some(5),
            customer_name: Some("Asha".to_string()),
            customer_phone: Some("9876543210".to_string()),
            order_status: status,
            special_instructions: None,
            subtotal: Decimal::from(200),
            gst_amount: Decimal::from(10),
            service_charge: Decimal::from(20),
            total_amount: Decimal::from(230),
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap(),
            items: vec![],
        }
    }

    #[test]
    fn order_type_wire_form_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&OrderType::DineIn).unwrap(),
            "\"dine-in\""
        );
        let back: OrderType = serde_json::from_str("\"takeaway\"").unwrap();
        assert_eq!(back, OrderType::Takeaway);
    }

    #[test]
    fn list_rows_decode_without_items() {
        let raw = r#"{
            "order_id": 3,
            "order_token": "T-002",
            "order_type": "takeaway",
            "table_number": null,
            "customer_name": "Ravi",
            "customer_phone": "9123456780",
            "order_status": "preparing",
            "special_instructions": null,
            "subtotal": 200.0,
            "gst_amount": 10.0,
            "service_charge": 0.0,
            "total_amount": 210.0,
            "created_at": "2026-03-14T12:00:00Z"
        }"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.order_status, OrderStatus::Preparing);
        assert!(order.items.is_empty());
    }

    #[test]
    fn age_and_urgency_derive_from_created_at() {
        let order = sample_order(OrderStatus::Pending);
        let sixteen_later = order.created_at + chrono::Duration::minutes(16);
        assert_eq!(order.age_minutes(sixteen_later), 16);
        assert!(order.is_urgent(sixteen_later));

        // completed orders are never urgent, regardless of age
        let done = sample_order(OrderStatus::Completed);
        assert!(!done.is_urgent(sixteen_later));
    }

    #[test]
    fn filter_builds_query_pairs() {
        let filter = OrderFilter::for_type(OrderType::DineIn).with_status(OrderStatus::Ready);
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("order_type", "dine-in".to_string()),
                ("status", "ready".to_string())
            ]
        );
    }

    #[test]
    fn creation_request_omits_empty_optionals() {
        let req = CreateOrderRequest {
            customer: CustomerInfo {
                name: "Asha".to_string(),
                phone: "9876543210".to_string(),
                email: None,
            },
            order_type: OrderType::Takeaway,
            table_number: None,
            special_instructions: None,
            items: vec![OrderLine {
                menu_id: 12,
                quantity: 2,
                customization: None,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("special_instructions").is_none());
        assert!(json["customer"].get("email").is_none());
        // table_number is always carried, null for takeaway
        assert!(json["table_number"].is_null());
        assert!(json["items"][0].get("customization").is_none());
    }
}
