//! Web viewer: a single embedded HTML page
//!
//! The page calls `/signature` on load and from its buttons, shows the tier
//! badge, and copies the current signature to the clipboard.

use axum::response::{Html, IntoResponse, Response};

/// Embedded HTML for the viewer UI
pub const VIEWER_HTML: &str = include_str!("viewer.html");

/// Serve the viewer HTML page
pub async fn serve_viewer() -> Response {
    Html(VIEWER_HTML).into_response()
}
