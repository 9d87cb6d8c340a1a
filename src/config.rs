//! Configuration module - environment variables and settings

use std::sync::Arc;

use anyhow::{anyhow, Result};

/// Environment variable holding the Gemini API key (required)
pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";

/// Environment variable overriding the generation model
pub const ENV_MODEL: &str = "EDU_COPILOT_MODEL";

/// Environment variable overriding the Gemini API base URL
pub const ENV_BASE_URL: &str = "EDU_COPILOT_BASE_URL";

/// Environment variable overriding the allowed CORS origin
pub const ENV_ALLOWED_ORIGIN: &str = "EDU_COPILOT_ALLOWED_ORIGIN";

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default allowed CORS origin (React dev server)
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Optional configuration parameters for Config::new()
#[derive(Debug, Clone, Default)]
pub struct ConfigOptions {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub allowed_origin: Option<String>,
}

/// Main configuration struct
///
/// Built once at process start and shared read-only behind an Arc;
/// handlers never mutate it.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub allowed_origin: String,
}

impl Config {
    /// Create a new Config with a required API key, plus optional settings
    pub fn new(api_key: String, options: ConfigOptions) -> Result<Arc<Self>> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(anyhow!("API key cannot be empty"));
        }

        let model = options
            .model
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL)
            .to_string();

        let base_url = options
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        let base_url = normalize_base_url(base_url);

        let allowed_origin = options
            .allowed_origin
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(DEFAULT_ALLOWED_ORIGIN)
            .trim_end_matches('/')
            .to_string();

        Ok(Arc::new(Self {
            api_key,
            model,
            base_url,
            allowed_origin,
        }))
    }

    /// Build configuration from environment variables.
    /// The API key is read exactly once here; handlers only see the Arc.
    pub fn from_env() -> Result<Arc<Self>> {
        Self::from_env_with(ConfigOptions::default())
    }

    /// Build configuration from environment variables with explicit
    /// overrides (CLI flags). A set override wins over its environment
    /// variable.
    pub fn from_env_with(overrides: ConfigOptions) -> Result<Arc<Self>> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| anyhow!("{} environment variable is required", ENV_API_KEY))?;

        Self::new(
            api_key,
            ConfigOptions {
                model: overrides.model.or_else(|| std::env::var(ENV_MODEL).ok()),
                base_url: overrides
                    .base_url
                    .or_else(|| std::env::var(ENV_BASE_URL).ok()),
                allowed_origin: overrides
                    .allowed_origin
                    .or_else(|| std::env::var(ENV_ALLOWED_ORIGIN).ok()),
            },
        )
    }
}

/// Ensure the base URL uses https:// and has no trailing slash
fn normalize_base_url(base_url: String) -> String {
    // strip_prefix avoids touching an "http://" that appears later in the path
    let base_url = if let Some(rest) = base_url.strip_prefix("http://") {
        // Local mock servers speak plain http; only upgrade non-local hosts
        if rest.starts_with("localhost") || rest.starts_with("127.0.0.1") {
            format!("http://{}", rest)
        } else {
            format!("https://{}", rest)
        }
    } else if base_url.starts_with("https://") {
        base_url
    } else {
        format!("https://{}", base_url)
    };

    base_url.trim_end_matches('/').to_string()
}
