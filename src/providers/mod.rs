mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;

use crate::error::RecipeError;

/// Text generation capability the service depends on
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini")
    fn provider_name(&self) -> &str;

    /// Generate text for a single prompt.
    ///
    /// Any failure is reported as [`RecipeError::Upstream`].
    async fn generate(&self, prompt: &str) -> Result<String, RecipeError>;
}
