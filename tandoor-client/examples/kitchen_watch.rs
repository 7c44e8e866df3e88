//! Kitchen display in a terminal
//!
//! Polls the active-order queue and prints each refresh, flagging orders
//! past the urgency threshold. Ctrl-C tears the board down.
//!
//! ```sh
//! TANDOOR_API_URL=http://localhost:5000 cargo run --example kitchen_watch
//! ```

use anyhow::Result;

use tandoor_client::{BoardSnapshot, ClientConfig, OrderBoard, PollConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env();
    let http = config.build_http_client();
    let board = OrderBoard::kitchen(http, PollConfig::default().kitchen);
    let mut rx = board.handle().subscribe();

    println!("Kitchen display, polling {} (Ctrl-C to quit)", config.base_url);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = rx.borrow_and_update().clone();
                if let Some(error) = &state.last_error {
                    eprintln!("refresh failed: {error}");
                }
                if let Some(snapshot) = &state.snapshot {
                    render(snapshot);
                }
            }
        }
    }

    board.join().await;
    Ok(())
}

fn render(snapshot: &BoardSnapshot) {
    let now = chrono::Utc::now();
    println!(
        "── {} active orders @ {} ──",
        snapshot.orders.len(),
        snapshot.fetched_at.format("%H:%M:%S")
    );
    for order in &snapshot.orders {
        let place = match order.table_number {
            Some(table) => format!("table {table}"),
            None => order.order_type.to_string(),
        };
        let urgent = if order.is_urgent(now) { "  URGENT" } else { "" };
        println!(
            "  #{:<8} {:<10} {:<9} {:>3} min{}",
            order.order_token,
            place,
            order.order_status,
            order.age_minutes(now),
            urgent
        );
        for item in &order.items {
            match item.customization.as_deref() {
                Some(note) => println!("      {}x {} ({note})", item.quantity, item.item_name),
                None => println!("      {}x {}", item.quantity, item.item_name),
            }
        }
    }
}
