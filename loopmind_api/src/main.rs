mod error;
mod optimize_handler;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::routing::{get, post};
use axum::{Router, serve};
use loopmind_optimizer::optimizer::Optimizer;
use loopmind_optimizer::params::OptimizerParams;
use loopmind_routing::osrm_client::OsrmRouteClientParams;
use mimalloc::MiMalloc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};

use crate::optimize_handler::{health_handler, post_optimize_handler};
use crate::state::AppState;

const API_ADDR_ENV_VAR: &str = "LOOPMIND_API_ADDR";
const DEFAULT_API_ADDR: &str = "127.0.0.1:8080";

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let client_params = OsrmRouteClientParams::from_env();
    info!("Routing through {}", client_params.osrm_url);

    let state = Arc::new(AppState {
        optimizer: Optimizer::with_osrm(client_params, OptimizerParams::default())?,
    });

    let router = app(state);

    let addr = std::env::var(API_ADDR_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_ADDR.to_owned());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    serve(listener, router).await?;

    Ok(())
}

fn app(state: Arc<AppState>) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/optimize", post(post_optimize_handler))
        .route("/health", get(health_handler))
        .layer(ServiceBuilder::new().layer(cors_layer))
        .with_state(state)
}
