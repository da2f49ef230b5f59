pub mod auth;
pub mod order;
pub mod pizza;
pub mod restaurant;
