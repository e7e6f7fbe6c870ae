use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use log::error;
use serde::Serialize;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::error::RecipeError;
use crate::service::{
    GenerateRequest, GenerateResponse, ModifyRequest, ModifyResponse, RecipeService,
};

pub type WebResult<T> = std::result::Result<T, RecipeError>;

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RecipeError {
    fn into_response(self) -> Response {
        let status = match &self {
            RecipeError::Validation(_) | RecipeError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for RecipeError {
    fn from(rejection: JsonRejection) -> Self {
        RecipeError::BadRequest(rejection.body_text())
    }
}

/// Build the application router: both recipe endpoints, a health check, CORS for any origin.
pub fn router(service: RecipeService) -> Router {
    Router::new()
        .route("/generate_recipe", post(generate_recipe))
        .route("/modify_recipe", post(modify_recipe))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(service)
}

// Just reply that everything is okay
async fn health() -> StatusCode {
    StatusCode::OK
}

async fn generate_recipe(
    State(service): State<RecipeService>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> WebResult<Json<GenerateResponse>> {
    let Json(request) = payload?;
    Ok(Json(service.generate(&request).await?))
}

async fn modify_recipe(
    State(service): State<RecipeService>,
    payload: Result<Json<ModifyRequest>, JsonRejection>,
) -> WebResult<Json<ModifyResponse>> {
    let Json(request) = payload?;
    Ok(Json(service.modify(&request).await?))
}
