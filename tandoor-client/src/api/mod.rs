//! Typed endpoint wrappers
//!
//! One accessor per API resource, all borrowing the same [`HttpClient`].
//! Each call decodes the response envelope and unwraps the payload;
//! acknowledgements (`data` absent) map to `()`.

pub mod menu;
pub mod orders;
pub mod payments;
pub mod reports;

pub use menu::MenuApi;
pub use orders::OrdersApi;
pub use payments::PaymentsApi;
pub use reports::ReportsApi;

use crate::{ClientError, ClientResult, HttpClient};
use shared::ApiResponse;

impl HttpClient {
    pub fn menu(&self) -> MenuApi<'_> {
        MenuApi { http: self }
    }

    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi { http: self }
    }

    pub fn payments(&self) -> PaymentsApi<'_> {
        PaymentsApi { http: self }
    }

    pub fn reports(&self) -> ReportsApi<'_> {
        ReportsApi { http: self }
    }
}

/// Unwrap the envelope payload, or fail with a named decode error
pub(crate) fn require_data<T>(response: ApiResponse<T>, what: &str) -> ClientResult<T> {
    response
        .into_data()
        .ok_or_else(|| ClientError::InvalidResponse(format!("Missing {what} data")))
}
