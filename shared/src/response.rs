//! API Response types
//!
//! Every endpoint of the order-management API replies with the same
//! envelope:
//!
//! ```json
//! {
//!     "status": "success",
//!     "message": "Order created successfully",
//!     "data": { ... }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Response discriminant (`"success"` or `"error"`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    /// Human-readable message
    pub message: String,
    /// Response data (absent on errors and bare acknowledgements)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: "Success".to_string(),
            data: Some(data),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Consume the envelope, keeping only the payload
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_envelope() {
        let raw = r#"{"status":"success","message":"Success","data":{"menu_id":7}}"#;
        let resp: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.into_data().unwrap()["menu_id"], 7);
    }

    #[test]
    fn decodes_error_envelope_without_data() {
        let raw = r#"{"status":"error","message":"Order not found"}"#;
        let resp: ApiResponse<()> = serde_json::from_str(raw).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.message, "Order not found");
        assert!(resp.data.is_none());
    }

    #[test]
    fn acknowledgement_has_no_data() {
        let raw = r#"{"status":"success","message":"Order status updated successfully"}"#;
        let resp: ApiResponse<()> = serde_json::from_str(raw).unwrap();
        assert!(resp.is_success());
        assert!(resp.into_data().is_none());
    }
}
