use clap::Subcommand;
use serde_json::json;
use uuid::Uuid;

use crate::{
    client::ApiClient,
    models::{Pizza, Restaurant, RestaurantPizza},
};

#[derive(Debug, Subcommand)]
pub enum RestaurantCommand {
    /// List restaurants
    List {
        #[arg(short, long)]
        active: Option<bool>,
        #[arg(short, long)]
        owner: Option<Uuid>,
    },
    /// Show one restaurant
    Get { id: Uuid },
    /// Show a restaurant's menu with its prices
    Menu { id: Uuid },
    /// Register a restaurant
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        address: String,
        #[arg(short, long)]
        owner: Uuid,
        #[arg(short, long)]
        phone: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
    },
}

pub async fn run(client: &ApiClient, command: RestaurantCommand) -> anyhow::Result<()> {
    match command {
        RestaurantCommand::List { active, owner } => {
            let path = if let Some(owner) = owner {
                format!("/restaurants?ownerId={owner}")
            } else if let Some(active) = active {
                format!("/restaurants?active={active}")
            } else {
                "/restaurants".into()
            };
            let restaurants: Vec<Restaurant> = client.get(&path).await?;
            if restaurants.is_empty() {
                println!("No restaurants found");
                return Ok(());
            }
            for r in restaurants {
                let state = if r.is_active { "open" } else { "closed" };
                println!("{}  {:<24} {:>5}  {}  ({})", r.id, r.name, r.rating, state, r.address);
            }
        }
        RestaurantCommand::Get { id } => {
            let r: Restaurant = client.get(&format!("/restaurants/{id}")).await?;
            println!("{}", r.name);
            println!("  id:      {}", r.id);
            println!("  address: {}", r.address);
            println!("  rating:  {}", r.rating);
            println!("  owner:   {}", r.owner_id);
            println!("  active:  {}", r.is_active);
        }
        RestaurantCommand::Menu { id } => {
            let listings: Vec<RestaurantPizza> =
                client.get(&format!("/restaurant-pizzas?restaurantId={id}")).await?;
            if listings.is_empty() {
                println!("No pizzas listed at this restaurant");
                return Ok(());
            }
            for listing in listings {
                let pizza: Pizza = client
                    .get(&format!("/pizzas/{}", listing.pizza_id))
                    .await?;
                let state = if listing.is_available { "" } else { "  (unavailable)" };
                println!("{:<24} {:>8}{}", pizza.name, listing.price, state);
            }
        }
        RestaurantCommand::Create {
            name,
            address,
            owner,
            phone,
            email,
        } => {
            let r: Restaurant = client
                .post(
                    "/restaurants",
                    &json!({
                        "name": name,
                        "address": address,
                        "ownerId": owner,
                        "phone": phone,
                        "email": email,
                    }),
                )
                .await?;
            println!("Created restaurant {} ({})", r.name, r.id);
        }
    }
    Ok(())
}
