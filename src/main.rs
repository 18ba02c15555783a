// SPDX-License-Identifier: PMPL-1.0-or-later
//! GraphQL employee directory API server
//!
//! Features:
//! - Root list queries for employees, companies, and technologies
//! - Employee lookup by ID with nested company/technology traversal
//! - Calculator-style arithmetic query with defined division-by-zero handling
//! - GraphiQL playground and health endpoint

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use graphql_directory_api::{
    schema::{build_schema, AppSchema},
    store::DataStore,
};

const DEFAULT_PORT: u16 = 5000;

/// Application state shared across handlers
#[derive(Clone)]
struct AppState {
    schema: AppSchema,
}

/// GraphQL handler
async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL playground handler
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Health check handler
async fn health() -> &'static str {
    "OK"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    info!("Starting GraphQL directory API server...");

    // Seed the immutable data store and build the schema once
    let store = DataStore::seed();
    info!(
        "Seeded directory: {} employees, {} companies, {} technologies",
        store.employees().len(),
        store.companies().len(),
        store.technologies().len()
    );
    let schema = build_schema(store);

    let state = AppState { schema };

    // CORS: permissive by default, restricted when ALLOWED_ORIGINS is set
    let cors = match std::env::var("ALLOWED_ORIGINS") {
        Ok(allowed) => {
            let origins: Vec<http::HeaderValue> = allowed
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([http::Method::GET, http::Method::POST, http::Method::OPTIONS])
                .allow_headers([http::header::CONTENT_TYPE])
        }
        Err(_) => CorsLayer::permissive(),
    };

    let app = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphiql", get(graphiql))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("GraphQL server listening on http://{}", addr);
    info!("GraphiQL playground: http://{}/graphiql", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
