use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::RecipeError;

/// Main service configuration, loaded once at startup
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini text generation settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// HTTP listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address and port to bind to
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

/// Configuration for the Gemini text generation API
#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// Model identifier (e.g., "gemini-1.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// API key for authentication (can also be set via GEMINI_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for the API endpoint (for proxies and tests)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Nucleus sampling threshold
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    /// Top-k sampling limit
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// MIME type requested for the response
    #[serde(default = "default_response_mime_type")]
    pub response_mime_type: String,
    /// Request timeout in seconds; no timeout when unset
    pub timeout: Option<u64>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: None,
            base_url: default_base_url(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            response_mime_type: default_response_mime_type(),
            timeout: None,
        }
    }
}

impl GeminiConfig {
    /// API key from configuration, falling back to the GEMINI_API_KEY environment variable
    pub fn resolve_api_key(&self) -> Result<String, RecipeError> {
        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .filter(|key| !key.trim().is_empty())
            .ok_or(RecipeError::MissingApiKey)
    }
}

// Default value functions
fn default_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_temperature() -> f64 {
    1.0
}

fn default_top_p() -> f64 {
    0.95
}

fn default_top_k() -> u32 {
    40
}

fn default_max_output_tokens() -> u32 {
    8192
}

fn default_response_mime_type() -> String {
    "text/plain".to_string()
}

impl ServiceConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_MAKER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_MAKER__GEMINI__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables
pub fn load_config() -> Result<ServiceConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_MAKER__SERVER__ADDRESS
        .add_source(
            Environment::with_prefix("RECIPE_MAKER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_model(), "gemini-1.5-flash");
        assert_eq!(default_temperature(), 1.0);
        assert_eq!(default_top_p(), 0.95);
        assert_eq!(default_top_k(), 40);
        assert_eq!(default_max_output_tokens(), 8192);
        assert_eq!(default_response_mime_type(), "text/plain");
    }

    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.server.address, "127.0.0.1:5000");
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert!(config.gemini.api_key.is_none());
        assert!(config.gemini.timeout.is_none());
    }

    #[test]
    fn test_configured_api_key_wins() {
        let config = GeminiConfig {
            api_key: Some("from-config".to_string()),
            ..GeminiConfig::default()
        };
        assert_eq!(config.resolve_api_key().unwrap(), "from-config");
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let settings = Config::builder()
            .add_source(config::File::from_str(
                "[gemini]\nmodel = \"gemini-2.0-flash\"\n\n[server]\naddress = \"0.0.0.0:8080\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let config: ServiceConfig = settings.try_deserialize().unwrap();

        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.top_k, 40);
        assert_eq!(config.server.address, "0.0.0.0:8080");
    }

    #[test]
    fn test_load_config_without_file() {
        // No config.toml in the crate root, so everything comes from defaults
        let result = load_config();
        assert!(result.is_ok());
    }
}
