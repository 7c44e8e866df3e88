//! Order endpoints

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{CreateOrderRequest, Order, OrderCreated, OrderFilter, StatusPatch};
use shared::order::OrderStatus;

/// `/api/orders` operations
pub struct OrdersApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl OrdersApi<'_> {
    /// List orders, filtered by type/status/date
    pub async fn list(&self, filter: &OrderFilter) -> ClientResult<Vec<Order>> {
        let response = self
            .http
            .get_query::<ApiResponse<Vec<Order>>>("/api/orders", &filter.query_pairs())
            .await?;
        super::require_data(response, "orders")
    }

    /// Get one order with its line items
    pub async fn get(&self, order_id: i64) -> ClientResult<Order> {
        let response = self
            .http
            .get::<ApiResponse<Order>>(&format!("/api/orders/{order_id}"))
            .await?;
        super::require_data(response, "order")
    }

    /// Kitchen queue: every order not yet completed or cancelled, oldest first
    pub async fn active(&self) -> ClientResult<Vec<Order>> {
        let response = self
            .http
            .get::<ApiResponse<Vec<Order>>>("/api/orders/active")
            .await?;
        super::require_data(response, "active orders")
    }

    /// Create an order; the response carries the issued token
    pub async fn create(&self, request: &CreateOrderRequest) -> ClientResult<OrderCreated> {
        let response = self
            .http
            .post::<ApiResponse<OrderCreated>, _>("/api/orders", request)
            .await?;
        super::require_data(response, "created order")
    }

    /// Request a status transition
    ///
    /// The server validates the transition; on success the caller should
    /// re-fetch rather than assume the new state.
    pub async fn set_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()> {
        self.http
            .patch::<ApiResponse<()>, _>(
                &format!("/api/orders/{order_id}/status"),
                &StatusPatch {
                    order_status: status,
                },
            )
            .await?;
        Ok(())
    }

    /// Cancel an order (soft delete; the row stays, status becomes cancelled)
    pub async fn cancel(&self, order_id: i64) -> ClientResult<()> {
        self.http
            .delete::<ApiResponse<()>>(&format!("/api/orders/{order_id}"))
            .await?;
        Ok(())
    }
}
