use log::info;
use std::sync::Arc;

use recipe_maker::{router, GeminiProvider, RecipeError, RecipeService, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), RecipeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::load()?;
    let provider = GeminiProvider::new(&config.gemini)?;
    info!(
        "Using model {} at {}",
        config.gemini.model, config.gemini.base_url
    );

    let app = router(RecipeService::new(Arc::new(provider)));

    let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
