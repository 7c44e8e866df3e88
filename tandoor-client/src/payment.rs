//! Payment collection flow
//!
//! Loads one order, validates the tendered amount against its total, and
//! submits the payment record. Completing the order is the server's side
//! effect, not ours: after a successful payment the session re-fetches
//! instead of flipping the status locally.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{Order, PaymentMethod, PaymentReceipt, PaymentRequest};
use shared::order::OrderStatus;

/// Why a payment cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("Amount paid is less than order total!")]
    Insufficient,
    #[error("Cannot process payment for cancelled order")]
    OrderCancelled,
}

/// One order being paid for
#[derive(Debug, Clone)]
pub struct PaymentSession {
    order: Order,
}

impl PaymentSession {
    /// Load the order to pay for
    pub async fn load(http: &HttpClient, order_id: i64) -> ClientResult<Self> {
        let order = http.orders().get(order_id).await?;
        Ok(Self::new(order))
    }

    /// Build a session around an already-fetched order
    pub fn new(order: Order) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Amount the payment must cover
    pub fn total(&self) -> Decimal {
        self.order.total_amount
    }

    /// Client-side copy of the server's acceptance check
    ///
    /// The server is the source of truth and repeats both checks; failing
    /// early here just saves the round trip.
    pub fn validate(&self, amount_received: Decimal) -> Result<(), PaymentError> {
        if self.order.order_status == OrderStatus::Cancelled {
            return Err(PaymentError::OrderCancelled);
        }
        if amount_received < self.total() {
            return Err(PaymentError::Insufficient);
        }
        Ok(())
    }

    /// Change to hand back, only when there is any
    pub fn change(&self, amount_received: Decimal) -> Option<Decimal> {
        let change = amount_received - self.total();
        (change > Decimal::ZERO).then_some(change)
    }

    /// Validate and assemble the payment request
    pub fn request(
        &self,
        method: PaymentMethod,
        amount_received: Decimal,
    ) -> Result<PaymentRequest, PaymentError> {
        self.validate(amount_received)?;
        Ok(PaymentRequest {
            order_id: self.order.order_id,
            payment_method: method,
            amount_received,
        })
    }

    /// Submit the payment
    ///
    /// Local validation failures surface as [`ClientError::Validation`],
    /// the same bucket a server rejection would land in.
    pub async fn submit(
        &self,
        http: &HttpClient,
        method: PaymentMethod,
        amount_received: Decimal,
    ) -> ClientResult<PaymentReceipt> {
        let request = self
            .request(method, amount_received)
            .map_err(|err| ClientError::Validation(err.to_string()))?;
        http.payments().process(&request).await
    }

    /// Re-fetch the order's authoritative state (e.g. after payment)
    pub async fn reload(&mut self, http: &HttpClient) -> ClientResult<&Order> {
        self.order = http.orders().get(self.order.order_id).await?;
        Ok(&self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shared::models::OrderType;

    fn order(status: OrderStatus, total: Decimal) -> Order {
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
            total_amount: total,
            created_at: Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap(),
            items: vec![],
        }
    }

    #[test]
    fn rejects_amount_below_total() {
        let session = PaymentSession::new(order(OrderStatus::Ready, Decimal::from(230)));
        assert_eq!(
            session.validate(Decimal::from(200)),
            Err(PaymentError::Insufficient)
        );
        assert_eq!(session.validate(Decimal::from(230)), Ok(()));
        assert_eq!(session.validate(Decimal::from(250)), Ok(()));
    }

    #[test]
    fn rejects_cancelled_order() {
        let session = PaymentSession::new(order(OrderStatus::Cancelled, Decimal::from(230)));
        assert_eq!(
            session.validate(Decimal::from(500)),
            Err(PaymentError::OrderCancelled)
        );
    }

    #[test]
    fn change_is_only_surfaced_when_positive() {
        // total 230.00, tendered 250 ⇒ change 20.00
        let session = PaymentSession::new(order(OrderStatus::Ready, Decimal::from(230)));
        assert_eq!(session.change(Decimal::from(250)), Some(Decimal::from(20)));
        assert_eq!(session.change(Decimal::from(230)), None);
    }

    #[test]
    fn request_carries_method_and_amount() {
        let session = PaymentSession::new(order(OrderStatus::Ready, Decimal::from(230)));
        let request = session
            .request(PaymentMethod::Upi, Decimal::from(230))
            .unwrap();
        assert_eq!(request.order_id, 41);
        assert_eq!(request.payment_method, PaymentMethod::Upi);
        assert_eq!(request.amount_received, Decimal::from(230));

        assert!(session.request(PaymentMethod::Cash, Decimal::from(10)).is_err());
    }
}
