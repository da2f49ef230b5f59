use clap::Subcommand;
use rust_decimal::Decimal;
use serde_json::json;
use uuid::Uuid;

use crate::{client::ApiClient, models::Pizza};

#[derive(Debug, Subcommand)]
pub enum PizzaCommand {
    /// List pizzas, optionally filtered by category
    List {
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one pizza
    Get { id: Uuid },
    /// Add a pizza to the catalog
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        price: Decimal,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, default_value = "classic")]
        category: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Remove a pizza from the catalog
    Delete { id: Uuid },
}

pub async fn run(client: &ApiClient, command: PizzaCommand) -> anyhow::Result<()> {
    match command {
        PizzaCommand::List { category } => {
            let path = match category {
                Some(c) => format!("/pizzas?category={c}"),
                None => "/pizzas".into(),
            };
            let pizzas: Vec<Pizza> = client.get(&path).await?;
            if pizzas.is_empty() {
                println!("No pizzas found");
                return Ok(());
            }
            for p in pizzas {
                println!("{}  {:<24} {:>8}  [{}]", p.id, p.name, p.base_price, p.category);
            }
        }
        PizzaCommand::Get { id } => {
            let p: Pizza = client.get(&format!("/pizzas/{id}")).await?;
            println!("{} ({})", p.name, p.category);
            println!("  id:         {}", p.id);
            println!("  base price: {}", p.base_price);
            if let Some(d) = p.description {
                println!("  about:      {d}");
            }
        }
        PizzaCommand::Create {
            name,
            price,
            description,
            category,
            image_url,
        } => {
            let p: Pizza = client
                .post(
                    "/pizzas",
                    &json!({
                        "name": name,
                        "basePrice": price,
                        "description": description,
                        "category": category,
                        "imageUrl": image_url,
                    }),
                )
                .await?;
            println!("Created pizza {} ({})", p.name, p.id);
        }
        PizzaCommand::Delete { id } => {
            let _: bool = client.delete(&format!("/pizzas/{id}")).await?;
            println!("Deleted pizza {id}");
        }
    }
    Ok(())
}
