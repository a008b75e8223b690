use axum::{Extension, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::shell::config::AppConfig;
use attendance::shell::graphql::{build_schema, graphiql, graphql};
use attendance::shell::http::router;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    tracing::info!(policy = ?config.policy, "accounting policy loaded");

    // In-memory stores for now
    let state = AppState::in_memory(config.policy);
    let schema = build_schema(state.clone());

    let app = router(state)
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP endpoint: http://{}", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
