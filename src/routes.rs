use axum::{routing::get, routing::post, Router};

use crate::handlers::{
    codegena_handler, codelyzer_handler, debugger_handler, health_check, summarize_handler,
};
use crate::pages;

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/summarize", post(summarize_handler))
        .route("/codelyzer", post(codelyzer_handler))
        .route("/codegena", post(codegena_handler))
        .route("/debugger", post(debugger_handler))
        .route("/", get(pages::landing))
        .route("/index", get(pages::index))
        .route("/analyzecode", get(pages::analyzecode))
        .route("/codegen", get(pages::codegen))
        .route("/debug", get(pages::debug_page))
        .route("/mmap", get(pages::mmap))
        .route("/edit", get(pages::edit))
        .route("/mme", get(pages::mme))
        .route("/new", get(pages::new_page))
}
