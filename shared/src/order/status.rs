//! Order status state machine
//!
//! `pending → preparing → ready → completed`, with `cancelled` reachable
//! from any non-terminal state. The machine decides which actions a view
//! may offer; it never applies a transition locally. Callers PATCH the
//! server and re-fetch, so the displayed state is always the confirmed
//! one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

/// Lifecycle action a view may offer for an order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    StartPreparing,
    MarkReady,
    /// Opens the payment flow; completion happens server-side on payment
    GenerateBill,
    Cancel,
}

/// Centralized presentation attributes, one row per status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub label: &'static str,
    /// Hex color used by badge and card accents
    pub color: &'static str,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Active orders appear on the kitchen board
    pub fn is_active(self) -> bool {
        !self.is_terminal()
    }

    /// States legally reachable from this one
    pub fn allowed_next(self) -> &'static [OrderStatus] {
        match self {
            Self::Pending => &[Self::Preparing, Self::Cancelled],
            Self::Preparing => &[Self::Ready, Self::Cancelled],
            Self::Ready => &[Self::Completed, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.allowed_next().contains(&next)
    }

    /// Actions a view may offer for an order in this state
    ///
    /// Offering is not applying: the server may still reject the request,
    /// and the caller must re-fetch rather than assume success.
    pub fn offered_actions(self) -> &'static [OrderAction] {
        match self {
            Self::Pending => &[OrderAction::StartPreparing, OrderAction::Cancel],
            Self::Preparing => &[OrderAction::MarkReady, OrderAction::Cancel],
            Self::Ready => &[OrderAction::GenerateBill, OrderAction::Cancel],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Badge label and color, shared by every view
    pub fn style(self) -> StatusStyle {
        match self {
            Self::Pending => StatusStyle {
                label: "Pending",
                color: "#f093fb",
            },
            Self::Preparing => StatusStyle {
                label: "Preparing",
                color: "#4facfe",
            },
            Self::Ready => StatusStyle {
                label: "Ready",
                color: "#43e97b",
            },
            Self::Completed => StatusStyle {
                label: "Completed",
                color: "#11998e",
            },
            Self::Cancelled => StatusStyle {
                label: "Cancelled",
                color: "#eb3349",
            },
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OrderAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::StartPreparing => "Start Preparing",
            Self::MarkReady => "Mark Ready",
            Self::GenerateBill => "Generate Bill",
            Self::Cancel => "Cancel",
        }
    }

    /// Status this action PATCHes to, if it is a direct transition
    ///
    /// `GenerateBill` has no direct target: it opens the payment flow and
    /// the server moves the order to `completed` when payment lands.
    pub fn target_status(self) -> Option<OrderStatus> {
        match self {
            Self::StartPreparing => Some(OrderStatus::Preparing),
            Self::MarkReady => Some(OrderStatus::Ready),
            Self::GenerateBill => None,
            Self::Cancel => Some(OrderStatus::Cancelled),
        }
    }
}

/// Minutes after which an active order counts as urgent
pub const URGENT_AGE_MINUTES: i64 = 15;

/// Derived, non-authoritative urgency flag
pub fn is_urgent(status: OrderStatus, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    status.is_active() && (now - created_at).num_minutes() > URGENT_AGE_MINUTES
}

/// Kitchen timer color bucket for an order's age
pub fn age_color(minutes: i64) -> &'static str {
    if minutes < 10 {
        "#43e97b"
    } else if minutes < 20 {
        "#f5a623"
    } else {
        "#e74c3c"
    }
}
