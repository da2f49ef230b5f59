use clap::Args;
use serde_json::json;

use crate::{
    client::ApiClient,
    models::{LoginResponse, User},
};

#[derive(Debug, Args)]
pub struct RegisterArgs {
    #[arg(short, long)]
    pub username: String,
    #[arg(short, long)]
    pub email: String,
    #[arg(short, long)]
    pub password: String,
    #[arg(short, long, default_value = "customer")]
    pub role: String,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(short, long)]
    pub email: String,
    #[arg(short, long)]
    pub password: String,
}

pub async fn register(client: &ApiClient, args: RegisterArgs) -> anyhow::Result<()> {
    let user: User = client
        .post(
            "/auth/register",
            &json!({
                "username": args.username,
                "email": args.email,
                "password": args.password,
                "role": args.role,
            }),
        )
        .await?;
    println!("Account created: {} <{}> ({})", user.username, user.email, user.role);
    println!("Login with: pizzeria-cli login -e {} -p <password>", user.email);
    Ok(())
}

pub async fn login(client: &ApiClient, args: LoginArgs) -> anyhow::Result<()> {
    let login: LoginResponse = client
        .post(
            "/auth/login",
            &json!({ "email": args.email, "password": args.password }),
        )
        .await?;
    println!("Welcome back, {}!", login.user.username);
    println!("Token (export as PIZZERIA_TOKEN):");
    println!("{}", login.token);
    Ok(())
}

pub async fn whoami(client: &ApiClient) -> anyhow::Result<()> {
    let user: User = client.get("/me").await?;
    println!("{} <{}> ({})", user.username, user.email, user.role);
    Ok(())
}
