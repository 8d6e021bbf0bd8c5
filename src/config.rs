use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub google_api_key: String,
    pub model_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3002".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            log_level: env::var("RUST_LOG")
                .unwrap_or_else(|_| "rs_notes_svc=info,tower_http=debug".to_string()),
            // read once at startup; an empty key makes every model call fail
            google_api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            model_name: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
