use crate::config::GeminiConfig;
use crate::error::RecipeError;
use crate::providers::LlmProvider;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

/// Header carrying the API key, so it never shows up in request URLs
const API_KEY_HEADER: &str = "x-goog-api-key";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
    response_mime_type: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider from configuration
    pub fn new(config: &GeminiConfig) -> Result<Self, RecipeError> {
        // Try config first, then fall back to environment variable
        let api_key = config.resolve_api_key()?;

        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(GeminiProvider {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
            top_k: config.top_k,
            max_output_tokens: config.max_output_tokens,
            response_mime_type: config.response_mime_type.clone(),
        })
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{
                    "text": prompt
                }]
            }],
            "generationConfig": {
                "temperature": self.temperature,
                "topP": self.top_p,
                "topK": self.top_k,
                "maxOutputTokens": self.max_output_tokens,
                "responseMimeType": self.response_mime_type
            }
        })
    }
}

/// Pull the generated text out of a generateContent response body.
fn extract_text(response_body: &Value) -> Result<String, RecipeError> {
    if let Some(reason) = response_body["promptFeedback"]["blockReason"].as_str() {
        return Err(RecipeError::upstream(format!(
            "Prompt was blocked: {}",
            reason
        )));
    }

    let candidate = &response_body["candidates"][0];
    let text = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        let finish_reason = candidate["finishReason"].as_str().unwrap_or("unknown");
        return Err(RecipeError::upstream(format!(
            "Gemini response contained no text (finish reason: {})",
            finish_reason
        )));
    }

    Ok(text)
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn provider_name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, RecipeError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let response_body: Value = match response.json().await {
            Ok(body) => body,
            Err(_) if !status.is_success() => {
                return Err(RecipeError::upstream(format!(
                    "Gemini API returned status {}",
                    status.as_u16()
                )));
            }
            Err(e) => return Err(e.into()),
        };
        debug!("Gemini response: {:?}", response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let message = error["message"]
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Gemini API returned status {}", status.as_u16()));
            return Err(RecipeError::Upstream(message));
        }
        if !status.is_success() {
            return Err(RecipeError::upstream(format!(
                "Gemini API returned status {}",
                status.as_u16()
            )));
        }

        extract_text(&response_body)
    }
}
