use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::extract::resolve_text;
use crate::llm::ModelClient;
use crate::models::TaskRequest;

/// The task selected by the endpoint, determining which instruction string
/// prefixes the prompt. Not part of the request payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Summarize,
    AnalyzeCode,
    GenerateCode,
    DebugCode,
}

impl TaskKind {
    /// The fixed instruction text prepended to the extracted content.
    pub fn instruction(&self) -> &'static str {
        match self {
            TaskKind::Summarize => "Summarize the following notes:",
            TaskKind::AnalyzeCode => {
                "Analyze the following code for clarity, performance, security, and best practices. \
                 Identify any bugs, anti-patterns, or areas for improvement. Summarize what the code \
                 does and suggest optimizations or refactoring opportunities. Include recommendations \
                 in bullet points."
            }
            TaskKind::GenerateCode => {
                "given the following conditions provide a neat concise and meaningful code covering \
                 all the corner cases."
            }
            TaskKind::DebugCode => {
                "given the following code check for all the corner cases and wherever it might break \
                 down."
            }
        }
    }
}

/// Build the full prompt for a task: instruction, blank line, extracted text.
pub fn build_prompt(task: TaskKind, text: &str) -> String {
    format!("{}\n\n{}", task.instruction(), text)
}

/// Run one request through the pipeline: resolve the payload into plain text,
/// build the task prompt, and invoke the model once. Every failure surfaces as
/// a single error result; nothing is retried.
pub async fn run(client: &ModelClient, task: TaskKind, payload: &TaskRequest) -> AppResult<String> {
    let text = resolve_text(payload)?;
    let prompt = build_prompt(task, &text);

    let answer = client
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Model(e.to_string()))?;

    info!("{:?} task completed, response length {}", task, answer.len());
    debug!("Model response: {}", answer);
    Ok(answer)
}
