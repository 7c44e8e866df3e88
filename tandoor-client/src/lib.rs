//! Tandoor Client - HTTP client for the order-management API
//!
//! The network half of the front-end: typed wrappers over the REST API,
//! the payment flow, and the cancellable polling boards. All session
//! state and pure logic (cart, pricing, status machine) lives in the
//! `shared` crate.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod http;
pub mod payment;

pub use config::{ClientConfig, PollConfig};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{ApiResponse, OrderStatus};

// Flow and board types
pub use board::{
    BoardHandle, BoardSnapshot, BoardState, KitchenQueue, OrderBoard, OrderSource, TypedOrders,
};
pub use payment::{PaymentError, PaymentSession};
