use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    error::ApiError,
    protocol::{
        locations_route, name_availability_route, LocationsResponse, NameAvailabilityQuery,
        NameAvailabilityResponse,
    },
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;

use crate::api::{check_name, list_locations, DirectoryContext};
use crate::app_state::AppState;
use crate::config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings()?;
    let state = AppState {
        directory: DirectoryContext::from_settings(&settings),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(
        %addr,
        locations = settings.locations.len(),
        taken_names = settings.taken_names.len(),
        delay_ms = settings.response_delay_ms,
        "directory listening"
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route(locations_route(), get(http_list_locations))
        .route(name_availability_route(), get(http_check_name))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn simulate_latency(state: &AppState) {
    let delay = state.directory.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

async fn http_list_locations(State(state): State<Arc<AppState>>) -> Json<LocationsResponse> {
    simulate_latency(&state).await;
    let response = list_locations(&state.directory);
    info!(count = response.locations.len(), "served locations");
    Json(response)
}

async fn http_check_name(
    State(state): State<Arc<AppState>>,
    Query(q): Query<NameAvailabilityQuery>,
) -> Result<Json<NameAvailabilityResponse>, (StatusCode, Json<ApiError>)> {
    simulate_latency(&state).await;
    let response = check_name(&state.directory, q.name.as_deref()).map_err(|e| {
        warn!(message = %e.message, "rejected name availability request");
        (StatusCode::BAD_REQUEST, Json(e))
    })?;
    info!(
        name = %response.name,
        available = response.available,
        "checked name availability"
    );
    Ok(Json(response))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
