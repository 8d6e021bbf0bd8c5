use axum::{extract::Json, response::Json as ResponseJson, Extension};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::llm::ModelClient;
use crate::models::{HealthResponse, SummaryResponse, TaskRequest};
use crate::pipeline::{self, TaskKind};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");
    Ok(ResponseJson(HealthResponse::ok()))
}

/// Summarize handler: extracts text from the payload and asks the model for a
/// summary of the notes.
pub async fn summarize_handler(
    Extension(client): Extension<ModelClient>,
    Json(payload): Json<TaskRequest>,
) -> AppResult<ResponseJson<SummaryResponse>> {
    info!("Summarize endpoint called with input type: {}", payload.input_type);
    let answer = pipeline::run(&client, TaskKind::Summarize, &payload).await?;
    Ok(ResponseJson(SummaryResponse::new(answer)))
}

/// Code analysis handler: reviews the submitted code for clarity, performance,
/// security, and best practices.
pub async fn codelyzer_handler(
    Extension(client): Extension<ModelClient>,
    Json(payload): Json<TaskRequest>,
) -> AppResult<ResponseJson<SummaryResponse>> {
    info!("Codelyzer endpoint called with input type: {}", payload.input_type);
    let answer = pipeline::run(&client, TaskKind::AnalyzeCode, &payload).await?;
    Ok(ResponseJson(SummaryResponse::new(answer)))
}

/// Code generation handler: turns the submitted conditions into code.
pub async fn codegena_handler(
    Extension(client): Extension<ModelClient>,
    Json(payload): Json<TaskRequest>,
) -> AppResult<ResponseJson<SummaryResponse>> {
    info!("Codegena endpoint called with input type: {}", payload.input_type);
    let answer = pipeline::run(&client, TaskKind::GenerateCode, &payload).await?;
    Ok(ResponseJson(SummaryResponse::new(answer)))
}

/// Debugger handler: checks the submitted code for corner cases and likely
/// breakage points.
pub async fn debugger_handler(
    Extension(client): Extension<ModelClient>,
    Json(payload): Json<TaskRequest>,
) -> AppResult<ResponseJson<SummaryResponse>> {
    info!("Debugger endpoint called with input type: {}", payload.input_type);
    let answer = pipeline::run(&client, TaskKind::DebugCode, &payload).await?;
    Ok(ResponseJson(SummaryResponse::new(answer)))
}
