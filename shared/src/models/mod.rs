//! Data models
//!
//! Entities and payloads of the order-management REST API.
//! Field names mirror the wire contract exactly; all IDs are `i64`.

pub mod menu;
pub mod order;
pub mod payment;
pub mod report;

// Re-exports
pub use menu::*;
pub use order::*;
pub use payment::*;
pub use report::*;
