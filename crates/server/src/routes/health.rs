use crate::routes::SERVICE_NAME;
use crate::state::ServerState;
use axum::extract::State;
use axum::Json;
use chrono::SecondsFormat;
use serde::Serialize;
use signatures::Tier;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const REPOSITORY_URL: &str = "https://github.com/starside-io/signature-as-a-service";

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Seconds since startup
    pub uptime: f64,
    /// RFC 3339, UTC
    pub timestamp: String,
}

/// Health check endpoint (liveness)
pub async fn health_check(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime: state.uptime(),
        timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Service metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub repository: &'static str,
    pub total_signatures: usize,
    pub tier_counts: BTreeMap<&'static str, usize>,
    pub categories: Vec<&'static str>,
    pub status: &'static str,
}

/// About endpoint
pub async fn about(State(state): State<Arc<ServerState>>) -> Json<AboutResponse> {
    let store = &state.store;

    Json(AboutResponse {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        author: env!("CARGO_PKG_AUTHORS"),
        repository: REPOSITORY_URL,
        total_signatures: store.count(),
        tier_counts: Tier::ALL
            .iter()
            .map(|tier| (tier.as_str(), store.count_by_tier(*tier)))
            .collect(),
        categories: Tier::names(),
        status: "alive and unhinged",
    })
}
