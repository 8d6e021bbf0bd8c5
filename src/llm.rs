use rig::completion::Prompt;
use rig::providers::gemini;
use tracing::debug;

/// Thin wrapper around the Gemini completion client.
///
/// Constructed once at startup from the configured API key and injected into
/// handlers as an `Extension`; there is no ambient/global client. Each call is
/// a single non-streaming generation request with no retries.
#[derive(Clone)]
pub struct ModelClient {
    client: gemini::Client,
    model_name: String,
}

impl ModelClient {
    pub fn new(api_key: &str, model_name: &str) -> Self {
        Self {
            client: gemini::Client::new(api_key),
            model_name: model_name.to_string(),
        }
    }

    /// Submit a prompt and await the full response text.
    pub async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        debug!("Sending prompt to {} ({} chars)", self.model_name, prompt.len());
        let agent = self.client.agent(&self.model_name).build();
        let response = agent.prompt(prompt.to_string()).await?;
        Ok(response)
    }
}
