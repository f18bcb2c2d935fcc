//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `signature`: random signature draws, overall and per tier
//! - `health`: liveness and service metadata

pub mod health;
pub mod signature;

use crate::error::ServerError;
use axum::Json;
use serde_json::{json, Map, Value};
use signatures::Tier;

/// Service name reported by the descriptor endpoints
pub const SERVICE_NAME: &str = "signature-as-a-service";

/// API descriptor
///
/// Root endpoint (GET /). Static content: version, endpoint map and a
/// short description of every tier.
///
/// # Response
///
/// ```json
/// {
///   "message": "✨ Signature-as-a-Service",
///   "description": "Get unhinged email signatures for every occasion",
///   "version": "0.1.0",
///   "endpoints": { "random": "GET /signature - ..." },
///   "categories": { "unbothered": "Tier 1: ..." }
/// }
/// ```
pub async fn api_info() -> Json<Value> {
    let categories: Map<String, Value> = Tier::ALL
        .iter()
        .map(|tier| (tier.as_str().to_string(), json!(tier.description())))
        .collect();

    Json(json!({
        "message": "✨ Signature-as-a-Service",
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "viewer": "GET /signature/view - Interactive HTML viewer with copy button",
            "random": "GET /signature - Random signature from any category",
            "category": "GET /signature/:category - Get signature from specific category (unbothered, unhinged, unleashed)",
            "health": "GET /health - API health check",
            "about": "GET /about - API information"
        },
        "categories": categories,
    }))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
