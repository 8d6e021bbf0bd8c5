use serde::{Deserialize, Serialize};

/// Recognized payload formats for the task endpoints.
///
/// The wire keeps `input_type` as a raw string so that an unrecognized tag
/// becomes our own 400 response instead of a serde rejection; this enum is the
/// closed set the pipeline actually dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Pdf,
    Docx,
}

impl InputType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(InputType::Text),
            "pdf" => Some(InputType::Pdf),
            "docx" => Some(InputType::Docx),
            _ => None,
        }
    }
}

/// Request payload shared by all four task endpoints
///
/// `content` is raw text when `input_type` is `"text"`, otherwise the
/// base64-encoded bytes of a PDF or DOCX file.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    #[serde(default)]
    pub input_type: String,
    #[serde(default)]
    pub content: String,
}

/// Response payload shared by all four task endpoints
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

impl SummaryResponse {
    pub fn new(summary: String) -> Self {
        Self { summary }
    }
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}
