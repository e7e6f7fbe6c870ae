use thiserror::Error;

/// Errors that can occur while serving recipe requests
#[derive(Error, Debug)]
pub enum RecipeError {
    /// A required request field is missing or empty
    #[error("{0}")]
    Validation(String),

    /// The request body could not be read as JSON
    #[error("{0}")]
    BadRequest(String),

    /// The text generation service failed; the message is passed through as-is
    #[error("{0}")]
    Upstream(String),

    /// No API key in configuration or environment
    #[error("GEMINI_API_KEY not found in config or environment")]
    MissingApiKey,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Listener or runtime I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl RecipeError {
    pub fn validation(message: impl Into<String>) -> Self {
        RecipeError::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        RecipeError::Upstream(message.into())
    }
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        // Request URLs never reach the caller
        RecipeError::Upstream(err.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_is_verbatim() {
        let err = RecipeError::upstream("quota exceeded");
        assert_eq!(err.to_string(), "quota exceeded");
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = RecipeError::validation("Ingredients are required");
        assert_eq!(err.to_string(), "Ingredients are required");
    }

    #[test]
    fn test_missing_api_key_names_variable() {
        assert!(RecipeError::MissingApiKey
            .to_string()
            .contains("GEMINI_API_KEY"));
    }
}
