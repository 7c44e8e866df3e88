//! Polling order boards
//!
//! Each board owns one cancellable timer loop that fetches a slice of the
//! order list and publishes snapshots over a `watch` channel. The loop is
//! torn down with the owning view via its `CancellationToken`; a response
//! that lands after cancellation is discarded, never applied. Fetch
//! failures keep the previous snapshot on screen and record the error for
//! a dismissible alert.
//!
//! Mutating actions never touch the snapshot directly: they PATCH the
//! server and nudge an immediate re-fetch, so the board always shows
//! server-confirmed state.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::{Notify, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{ClientResult, HttpClient};
use shared::models::{Order, OrderFilter, OrderType};
use shared::order::OrderStatus;

/// Where a board gets its orders from
///
/// The seam exists so board behavior is testable without a server.
#[async_trait]
pub trait OrderSource: Send + Sync + 'static {
    /// Label used in logs
    fn label(&self) -> &str;

    async fn fetch(&self) -> ClientResult<Vec<Order>>;
}

/// Orders of one type, optionally narrowed by status
pub struct TypedOrders {
    http: HttpClient,
    filter: OrderFilter,
}

impl TypedOrders {
    pub fn new(http: HttpClient, filter: OrderFilter) -> Self {
        Self { http, filter }
    }
}

#[async_trait]
impl OrderSource for TypedOrders {
    fn label(&self) -> &str {
        "orders"
    }

    async fn fetch(&self) -> ClientResult<Vec<Order>> {
        self.http.orders().list(&self.filter).await
    }
}

/// The kitchen queue: every active order, oldest first
pub struct KitchenQueue {
    http: HttpClient,
}

impl KitchenQueue {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl OrderSource for KitchenQueue {
    fn label(&self) -> &str {
        "kitchen"
    }

    async fn fetch(&self) -> ClientResult<Vec<Order>> {
        self.http.orders().active().await
    }
}

/// One successful fetch
#[derive(Debug, Clone)]
pub struct BoardSnapshot {
    pub orders: Vec<Order>,
    pub fetched_at: DateTime<Utc>,
    /// Monotonic fetch counter; later snapshots supersede earlier ones
    pub generation: u64,
}

/// What a view renders: the latest snapshot plus any standing error
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    pub snapshot: Option<BoardSnapshot>,
    /// Most recent fetch failure; cleared by the next success
    pub last_error: Option<String>,
}

/// Handle to a running board loop
///
/// Dropping the handle does not stop the loop; call [`shutdown`] (or
/// [`join`]) when the owning view goes away.
///
/// [`shutdown`]: BoardHandle::shutdown
/// [`join`]: BoardHandle::join
pub struct BoardHandle {
    state: watch::Receiver<BoardState>,
    refresh: Arc<Notify>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl BoardHandle {
    /// Start a board loop polling `source` every `period`
    ///
    /// The first fetch happens immediately; afterwards the loop ticks at
    /// the fixed period.
    pub fn spawn<S: OrderSource>(source: S, period: Duration) -> Self {
        let (tx, rx) = watch::channel(BoardState::default());
        let refresh = Arc::new(Notify::new());
        let cancel = CancellationToken::new();
        let task = tokio::spawn(poll_loop(
            source,
            period,
            tx,
            Arc::clone(&refresh),
            cancel.clone(),
        ));
        Self {
            state: rx,
            refresh,
            cancel,
            task,
        }
    }

    /// Watch for new snapshots
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.clone()
    }

    /// Clone the current state
    pub fn state(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Nudge an immediate out-of-band fetch
    ///
    /// Used after every mutating action so the list reflects
    /// server-confirmed state as soon as possible.
    pub fn refresh_now(&self) {
        self.refresh.notify_one();
    }

    /// Stop the loop; in-flight responses are discarded
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the loop and wait for it to exit
    pub async fn join(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

async fn poll_loop<S: OrderSource>(
    source: S,
    period: Duration,
    tx: watch::Sender<BoardState>,
    refresh: Arc<Notify>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut generation = 0u64;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
            _ = refresh.notified() => {
                // manual refresh restarts the cadence
                ticker.reset();
            }
        }

        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            result = source.fetch() => result,
        };
        if cancel.is_cancelled() {
            // the view is gone; a stale response must not be applied
            break;
        }

        match result {
            Ok(orders) => {
                generation += 1;
                tracing::debug!(board = source.label(), count = orders.len(), "refreshed");
                tx.send_modify(|state| {
                    state.snapshot = Some(BoardSnapshot {
                        orders,
                        fetched_at: Utc::now(),
                        generation,
                    });
                    state.last_error = None;
                });
            }
            Err(err) => {
                tracing::warn!(
                    board = source.label(),
                    error = %err,
                    "refresh failed, keeping last snapshot"
                );
                tx.send_modify(|state| state.last_error = Some(err.to_string()));
            }
        }
    }
    tracing::debug!(board = source.label(), "board loop stopped");
}

/// A board bound to its client: polling plus lifecycle actions
///
/// One parameterized implementation serves the dine-in list, the takeaway
/// list, and the kitchen display; the constructor picks the source.
pub struct OrderBoard {
    http: HttpClient,
    handle: BoardHandle,
}

impl OrderBoard {
    /// Board over one order type (dine-in or takeaway page)
    pub fn for_type(http: HttpClient, order_type: OrderType, period: Duration) -> Self {
        Self::filtered(http, OrderFilter::for_type(order_type), period)
    }

    /// Board over an arbitrary list filter
    pub fn filtered(http: HttpClient, filter: OrderFilter, period: Duration) -> Self {
        let handle = BoardHandle::spawn(TypedOrders::new(http.clone(), filter), period);
        Self { http, handle }
    }

    /// Kitchen display board (active orders only)
    pub fn kitchen(http: HttpClient, period: Duration) -> Self {
        let handle = BoardHandle::spawn(KitchenQueue::new(http.clone()), period);
        Self { http, handle }
    }

    pub fn handle(&self) -> &BoardHandle {
        &self.handle
    }

    pub fn state(&self) -> BoardState {
        self.handle.state()
    }

    pub fn refresh_now(&self) {
        self.handle.refresh_now();
    }

    pub fn shutdown(&self) {
        self.handle.shutdown();
    }

    pub async fn join(self) {
        self.handle.join().await;
    }

    // ── Lifecycle actions ───────────────────────────────────────────
    // Request the transition, then re-fetch; the snapshot is never
    // mutated optimistically.

    pub async fn start_preparing(&self, order_id: i64) -> ClientResult<()> {
        self.set_status(order_id, OrderStatus::Preparing).await
    }

    pub async fn mark_ready(&self, order_id: i64) -> ClientResult<()> {
        self.set_status(order_id, OrderStatus::Ready).await
    }

    /// Kitchen-side completion ("Served") for orders already ready
    pub async fn complete(&self, order_id: i64) -> ClientResult<()> {
        self.set_status(order_id, OrderStatus::Completed).await
    }

    pub async fn cancel_order(&self, order_id: i64) -> ClientResult<()> {
        self.http.orders().cancel(order_id).await?;
        self.handle.refresh_now();
        Ok(())
    }

    async fn set_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<()> {
        self.http.orders().set_status(order_id, status).await?;
        self.handle.refresh_now();
        Ok(())
    }
}
