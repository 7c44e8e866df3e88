//! End-to-end walkthrough against a running API
//!
//! Browses the available menu, builds a dine-in cart, places the order,
//! walks it through the kitchen lifecycle, and settles the bill in cash.
//!
//! ```sh
//! TANDOOR_API_URL=http://localhost:5000 cargo run --example place_order
//! ```

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use shared::models::{MenuFilter, OrderType, PaymentMethod};
use shared::money::{PricingConfig, format_money};
use shared::order::{OrderDraft, OrderStatus};
use tandoor_client::{ClientConfig, PaymentSession};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let http = ClientConfig::from_env().build_http_client();

    let menu = http.menu().list(&MenuFilter::available_only()).await?;
    println!("{} items available", menu.len());

    let mut draft = OrderDraft::new(OrderType::DineIn);
    draft.table_number = Some(5);
    draft.customer_name = "Walk-in".to_string();
    draft.customer_phone = "9000000000".to_string();
    for item in menu.iter().take(2) {
        draft.cart.add_item(item);
    }

    let totals = draft.totals(&PricingConfig::default());
    println!(
        "cart: subtotal {}  gst {}  service {}  total {}",
        format_money(totals.subtotal),
        format_money(totals.gst),
        format_money(totals.service_charge),
        format_money(totals.total),
    );

    let request = draft.try_into_request().context("draft failed validation")?;
    let created = http.orders().create(&request).await?;
    println!(
        "order {} created (#{}), total {}",
        created.order_token,
        created.order_id,
        format_money(created.total_amount)
    );

    // kitchen takes it through the lifecycle
    http.orders()
        .set_status(created.order_id, OrderStatus::Preparing)
        .await?;
    http.orders()
        .set_status(created.order_id, OrderStatus::Ready)
        .await?;

    // settle the bill with a little extra cash
    let mut session = PaymentSession::load(&http, created.order_id).await?;
    let tendered = session.total() + Decimal::from(20);
    if let Some(change) = session.change(tendered) {
        println!("change due: {}", format_money(change));
    }
    let receipt = session
        .submit(&http, PaymentMethod::Cash, tendered)
        .await?;
    println!(
        "payment #{} recorded, change {}",
        receipt.payment_id,
        format_money(receipt.change_returned)
    );

    // confirm the server moved the order to completed
    let order = session.reload(&http).await?;
    println!("order {} is now {}", order.order_token, order.order_status);
    Ok(())
}
