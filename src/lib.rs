//! Recipe generation service.
//!
//! Builds prompts from ingredient lists or modification requests, sends them
//! to a hosted text generation model and cleans up the returned text.

pub mod config;
pub mod error;
pub mod normalize;
pub mod prompt;
pub mod providers;
pub mod server;
pub mod service;

pub use crate::config::{GeminiConfig, ServerConfig, ServiceConfig};
pub use crate::error::RecipeError;
pub use crate::providers::{GeminiProvider, LlmProvider};
pub use crate::server::router;
pub use crate::service::{
    GenerateRequest, GenerateResponse, ModifyRequest, ModifyResponse, RecipeService,
};
