use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::viewer;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use signatures::{select, SignatureDraw, Tier};
use std::sync::Arc;

/// Path segment reserved for the HTML viewer
pub const VIEWER_SEGMENT: &str = "view";

/// Random signature from any tier
pub async fn random_signature(State(state): State<Arc<ServerState>>) -> Json<SignatureDraw> {
    Json(SignatureDraw::from(select(&state.store, None)))
}

/// Random signature from one tier
///
/// `view` serves the viewer page. A segment containing a dot is treated as a
/// stray static asset request and answered with 404.
pub async fn category_signature(
    State(state): State<Arc<ServerState>>,
    Path(category): Path<String>,
) -> ServerResult<Response> {
    if category == VIEWER_SEGMENT {
        return Ok(viewer::serve_viewer().await);
    }

    if category.contains('.') {
        return Err(ServerError::NotFound);
    }

    let tier = Tier::parse(&category).ok_or_else(|| ServerError::InvalidCategory(category))?;
    let record = select(&state.store, Some(tier.as_str()));

    Ok(Json(SignatureDraw::from(record)).into_response())
}
