#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use recipe_maker::{LlmProvider, RecipeError};
use serde_json::Value;

/// Stand-in for the text generation service: fixed answer, records prompts
pub struct StubProvider {
    answer: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn answering(text: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            answer: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn provider_name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, prompt: &str) -> Result<String, RecipeError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer.clone().map_err(RecipeError::Upstream)
    }
}

pub fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
