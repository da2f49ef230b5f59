mod client;
mod commands;
mod config;
mod models;

use clap::{Parser, Subcommand};

use crate::{
    client::ApiClient,
    commands::{
        auth::{self, LoginArgs, RegisterArgs},
        order::{self, OrderCommand},
        pizza::{self, PizzaCommand},
        restaurant::{self, RestaurantCommand},
    },
    config::CliConfig,
};

/// Command-line client for the pizzeria order-management API.
#[derive(Debug, Parser)]
#[command(name = "pizzeria-cli", version)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "PIZZERIA_URL", default_value = "http://localhost:8080")]
    url: String,

    /// Bearer token for authenticated endpoints
    #[arg(long, global = true, env = "PIZZERIA_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create an account
    Register(RegisterArgs),
    /// Login and print an access token
    Login(LoginArgs),
    /// Show the account behind the current token
    Whoami,
    /// Browse and manage the pizza catalog
    Pizza {
        #[command(subcommand)]
        command: PizzaCommand,
    },
    /// Browse and manage restaurants
    Restaurant {
        #[command(subcommand)]
        command: RestaurantCommand,
    },
    /// Place and track orders
    Order {
        #[command(subcommand)]
        command: OrderCommand,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::new(cli.url, cli.token);
    let client = ApiClient::new(config)?;

    match cli.command {
        Command::Register(args) => auth::register(&client, args).await,
        Command::Login(args) => auth::login(&client, args).await,
        Command::Whoami => auth::whoami(&client).await,
        Command::Pizza { command } => pizza::run(&client, command).await,
        Command::Restaurant { command } => restaurant::run(&client, command).await,
        Command::Order { command } => order::run(&client, command).await,
    }
}
