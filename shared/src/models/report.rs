//! Report Models
//!
//! Read-only dashboard rows. Aggregates over zero rows come back as
//! nulls from the server, hence the `Option` amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Category, Cuisine};
use crate::order::OrderStatus;

/// Daily sales totals, completed orders only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySales {
    pub total_orders: i64,
    pub total_revenue: Option<Decimal>,
    pub avg_order_value: Option<Decimal>,
    pub dine_in_orders: i64,
    pub takeaway_orders: i64,
    pub dine_in_revenue: Option<Decimal>,
    pub takeaway_revenue: Option<Decimal>,
}

/// Most-ordered menu items over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularItem {
    pub menu_id: i64,
    pub item_name: String,
    pub category: Category,
    pub cuisine: Cuisine,
    pub price: Decimal,
    pub times_ordered: i64,
    pub total_quantity: i64,
    pub total_revenue: Decimal,
}

/// Revenue aggregated by cuisine over a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuisineRevenue {
    pub cuisine: Cuisine,
    pub order_count: i64,
    pub items_sold: i64,
    pub total_revenue: Decimal,
    pub avg_item_value: Decimal,
}

/// Today's order count and value per status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusCount {
    pub order_status: OrderStatus,
    pub count: i64,
    pub total_value: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_daily_sales_with_null_aggregates() {
        let raw = r#"{
            "total_orders": 0,
            "total_revenue": null,
            "avg_order_value": null,
            "dine_in_orders": 0,
            "takeaway_orders": 0,
            "dine_in_revenue": null,
            "takeaway_revenue": null
        }"#;
        let sales: DailySales = serde_json::from_str(raw).unwrap();
        assert_eq!(sales.total_orders, 0);
        assert!(sales.total_revenue.is_none());
    }

    #[test]
    fn decodes_status_summary_row() {
        let raw = r#"{"order_status": "ready", "count": 3, "total_value": 690.0}"#;
        let row: OrderStatusCount = serde_json::from_str(raw).unwrap();
        assert_eq!(row.order_status, OrderStatus::Ready);
        assert_eq!(row.count, 3);
    }
}
