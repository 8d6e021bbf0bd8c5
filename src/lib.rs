pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod llm;
pub mod models;
pub mod pages;
pub mod pipeline;
pub mod routes;

// Re-export key functions for convenience
pub use app::{create_app, init_tracing};
