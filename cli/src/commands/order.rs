use anyhow::{bail, Context};
use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::{client::ApiClient, models::Order};

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// List orders
    List {
        #[arg(short, long)]
        user: Option<Uuid>,
        #[arg(short, long)]
        restaurant: Option<Uuid>,
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show one order with its items
    Get { id: Uuid },
    /// Place an order
    Create {
        #[arg(short, long)]
        user: Uuid,
        #[arg(short, long)]
        restaurant: Uuid,
        #[arg(short, long)]
        address: String,
        #[arg(short, long, default_value = "cash")]
        payment_method: String,
        #[arg(short, long)]
        notes: Option<String>,
        /// Order line as PIZZA_ID:QTY[:INSTRUCTIONS], repeatable
        #[arg(short, long = "item", required = true)]
        items: Vec<String>,
    },
    /// Update an order's status or details
    Update {
        id: Uuid,
        #[arg(short, long)]
        status: Option<String>,
        #[arg(short, long)]
        payment_status: Option<String>,
        #[arg(short, long)]
        address: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
}

/// Parses a PIZZA_ID:QTY[:INSTRUCTIONS] line spec.
fn parse_item(spec: &str) -> anyhow::Result<serde_json::Value> {
    let mut parts = spec.splitn(3, ':');
    let pizza_id: Uuid = parts
        .next()
        .unwrap_or_default()
        .parse()
        .with_context(|| format!("invalid pizza id in '{spec}'"))?;
    let quantity: i32 = match parts.next() {
        Some(q) => q
            .parse()
            .with_context(|| format!("invalid quantity in '{spec}'"))?,
        None => bail!("missing quantity in '{spec}' (expected PIZZA_ID:QTY)"),
    };
    if quantity < 1 {
        bail!("quantity must be at least 1 in '{spec}'");
    }
    let instructions = parts.next();
    Ok(json!({
        "pizzaId": pizza_id,
        "quantity": quantity,
        "specialInstructions": instructions,
    }))
}

fn print_order(order: &Order) {
    println!("Order {}", order.id);
    println!("  status:   {} / {}", order.status, order.payment_status);
    println!("  total:    {}", order.total_amount);
    println!("  deliver:  {}", order.delivery_address);
    println!("  payment:  {}", order.payment_method);
    if let Some(notes) = &order.notes {
        println!("  notes:    {notes}");
    }
    for item in &order.items {
        let extra = item
            .special_instructions
            .as_deref()
            .map(|s| format!("  ({s})"))
            .unwrap_or_default();
        println!(
            "  - {} x{} @ {} = {}{}",
            item.pizza_id, item.quantity, item.price_per_item, item.subtotal, extra
        );
    }
}

pub async fn run(client: &ApiClient, command: OrderCommand) -> anyhow::Result<()> {
    match command {
        OrderCommand::List {
            user,
            restaurant,
            status,
        } => {
            let path = if let Some(user) = user {
                format!("/orders?userId={user}")
            } else if let Some(restaurant) = restaurant {
                format!("/orders?restaurantId={restaurant}")
            } else if let Some(status) = status {
                format!("/orders?status={status}")
            } else {
                "/orders".into()
            };
            let orders: Vec<Order> = client.get(&path).await?;
            if orders.is_empty() {
                println!("No orders found");
                return Ok(());
            }
            for o in orders {
                println!(
                    "{}  {:<10} {:>8}  {}  {}",
                    o.id, o.status, o.total_amount, o.payment_status, o.created_at
                );
            }
        }
        OrderCommand::Get { id } => {
            let order: Order = client.get(&format!("/orders/{id}")).await?;
            print_order(&order);
        }
        OrderCommand::Create {
            user,
            restaurant,
            address,
            payment_method,
            notes,
            items,
        } => {
            let items = items
                .iter()
                .map(|spec| parse_item(spec))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let order: Order = client
                .post(
                    "/orders",
                    &json!({
                        "userId": user,
                        "restaurantId": restaurant,
                        "deliveryAddress": address,
                        "paymentMethod": payment_method,
                        "notes": notes,
                        "items": items,
                    }),
                )
                .await?;
            println!("Order placed, total {}", order.total_amount);
            print_order(&order);
        }
        OrderCommand::Update {
            id,
            status,
            payment_status,
            address,
            notes,
        } => {
            let order: Order = client
                .put(
                    &format!("/orders/{id}"),
                    &json!({
                        "status": status,
                        "paymentStatus": payment_status,
                        "deliveryAddress": address,
                        "notes": notes,
                    }),
                )
                .await?;
            print_order(&order);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_item_spec() {
        let item =
            parse_item("b0c9d7de-1021-4a3a-8f3f-40f0a59d7b1f:2:extra cheese").unwrap();
        assert_eq!(item["quantity"], 2);
        assert_eq!(item["specialInstructions"], "extra cheese");
    }

    #[test]
    fn parses_spec_without_instructions() {
        let item = parse_item("b0c9d7de-1021-4a3a-8f3f-40f0a59d7b1f:3").unwrap();
        assert_eq!(item["quantity"], 3);
        assert!(item["specialInstructions"].is_null());
    }

    #[test]
    fn rejects_missing_quantity() {
        assert!(parse_item("b0c9d7de-1021-4a3a-8f3f-40f0a59d7b1f").is_err());
    }

    #[test]
    fn rejects_zero_quantity() {
        assert!(parse_item("b0c9d7de-1021-4a3a-8f3f-40f0a59d7b1f:0").is_err());
    }

    #[test]
    fn rejects_bad_uuid() {
        assert!(parse_item("not-a-uuid:1").is_err());
    }
}
