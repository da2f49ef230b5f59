pub mod dto;
pub mod handlers;
pub mod pricing;
pub mod repo;
pub mod service;

pub use handlers::router;
