use std::sync::Arc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::RecipeError;
use crate::normalize::{normalize_recipe, normalize_response};
use crate::prompt::{build_generate_prompt, build_modify_prompt};
use crate::providers::LlmProvider;

pub const INGREDIENTS_REQUIRED: &str = "Ingredients are required";
pub const RECIPE_AND_SUGGESTION_REQUIRED: &str = "Both recipe and suggestion are required";

/// Body of a generate request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}

/// Body of a modify request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModifyRequest {
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub recipe: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyResponse {
    pub modified_recipe: String,
}

/// Returns the field value when it has non-whitespace content.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.trim().is_empty())
}

/// Builds prompts, calls the text generation provider and cleans up the result.
#[derive(Clone)]
pub struct RecipeService {
    provider: Arc<dyn LlmProvider>,
}

impl RecipeService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Generate a recipe from a list of ingredients and optional dietary preferences.
    pub async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, RecipeError> {
        let ingredients = present(&request.ingredients)
            .ok_or_else(|| RecipeError::validation(INGREDIENTS_REQUIRED))?;

        let prompt = build_generate_prompt(ingredients, request.preferences.as_deref());
        debug!("Generating recipe with {}", self.provider_name());

        let answer = self.provider.generate(&prompt).await?;
        info!("Generated recipe ({} chars)", answer.len());

        Ok(GenerateResponse {
            recipe: normalize_recipe(&answer),
        })
    }

    /// Rewrite an existing recipe according to a free-text suggestion.
    pub async fn modify(&self, request: &ModifyRequest) -> Result<ModifyResponse, RecipeError> {
        debug!("Received modify request: {:?}", request);

        let (recipe, suggestion) = match (present(&request.recipe), present(&request.suggestion)) {
            (Some(recipe), Some(suggestion)) => (recipe, suggestion),
            _ => {
                warn!(
                    "Missing data - recipe: {:?}, suggestion: {:?}",
                    request.recipe, request.suggestion
                );
                return Err(RecipeError::validation(RECIPE_AND_SUGGESTION_REQUIRED));
            }
        };

        let prompt = build_modify_prompt(recipe, suggestion);
        let modified = self.provider.generate(&prompt).await?;
        info!("Modified recipe ({} chars)", modified.len());

        Ok(ModifyResponse {
            modified_recipe: normalize_response(&modified),
        })
    }
}
