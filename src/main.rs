use axum::{Router, routing::get};
use config::Config;
use errors::Result;
use handlers::users::get_users;
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod errors;
mod handlers;
mod model;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        "using {} database, listening on {}",
        config.database.kind(),
        config.bind_addr
    );

    // Server
    let state = AppState {
        client: db::Client::new(config.database),
    };
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}

#[derive(Clone)]
pub struct AppState {
    pub client: db::Client,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(get_users)).with_state(state)
}
