//! Shared types for the Tandoor order-management client
//!
//! Domain types and pure logic used by every front-end surface:
//! API entity models, the response envelope, money arithmetic,
//! the in-progress cart, and the order lifecycle state machine.

pub mod cart;
pub mod models;
pub mod money;
pub mod order;
pub mod response;

// Re-exports
pub use response::{ApiResponse, ResponseStatus};
pub use serde::{Deserialize, Serialize};

// Order lifecycle re-exports (for convenient access)
pub use order::{DraftError, OrderDraft, OrderStatus};
