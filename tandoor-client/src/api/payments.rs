//! Payment endpoints

use crate::{ClientResult, HttpClient};
use shared::ApiResponse;
use shared::models::{Bill, Payment, PaymentReceipt, PaymentRequest, PaymentSummary};

/// `/api/payments` operations
pub struct PaymentsApi<'a> {
    pub(crate) http: &'a HttpClient,
}

impl PaymentsApi<'_> {
    /// Record a payment against an order
    ///
    /// On success the server also moves the order to `completed`; that
    /// side effect belongs to the server, not this call.
    pub async fn process(&self, request: &PaymentRequest) -> ClientResult<PaymentReceipt> {
        let response = self
            .http
            .post::<ApiResponse<PaymentReceipt>, _>("/api/payments", request)
            .await?;
        super::require_data(response, "payment receipt")
    }

    /// Get one payment
    pub async fn get(&self, payment_id: i64) -> ClientResult<Payment> {
        let response = self
            .http
            .get::<ApiResponse<Payment>>(&format!("/api/payments/{payment_id}"))
            .await?;
        super::require_data(response, "payment")
    }

    /// Get the payment recorded for an order, if any
    pub async fn by_order(&self, order_id: i64) -> ClientResult<Payment> {
        let response = self
            .http
            .get::<ApiResponse<Payment>>(&format!("/api/payments/order/{order_id}"))
            .await?;
        super::require_data(response, "payment")
    }

    /// Bill preview for an order; nothing is recorded
    pub async fn bill(&self, order_id: i64) -> ClientResult<Bill> {
        let response = self
            .http
            .get::<ApiResponse<Bill>>(&format!("/api/payments/bill/{order_id}"))
            .await?;
        super::require_data(response, "bill")
    }

    /// Today's takings grouped by method
    pub async fn today_summary(&self) -> ClientResult<PaymentSummary> {
        let response = self
            .http
            .get::<ApiResponse<PaymentSummary>>("/api/payments/summary/today")
            .await?;
        super::require_data(response, "payment summary")
    }
}
