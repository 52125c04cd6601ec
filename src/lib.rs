pub mod auth;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod handlers;
pub mod middleware;
pub mod types;
