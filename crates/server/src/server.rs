//! Server initialization and routing
//!
//! This module handles the Axum server setup including:
//! - Router configuration with the signature API and static assets
//! - Middleware stack (rate limiting, logging, compression, CORS)
//! - Graceful shutdown handling

use crate::config::ServerConfig;
use crate::middleware::{log_requests, rate_limit, request_id};
use crate::routes::{api_info, health, not_found, signature};
use crate::state::ServerState;
use axum::handler::HandlerWithoutStateExt;
use axum::http::StatusCode;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Build the Axum router with all routes and middleware
///
/// API routes take precedence; every other path is looked up in the static
/// asset directory and answered with a JSON 404 when absent, whatever the
/// method.
///
/// Middleware stack, outermost first:
/// 1. Tracing
/// 2. Request ID tracking
/// 3. Request logging
/// 4. CORS (answers preflights before they reach the limiter)
/// 5. Per-address rate limiting
/// 6. Compression
/// 7. Timeout handling
/// 8. Body size limit
pub fn build_router(state: Arc<ServerState>) -> Router {
    // CORS layer
    let cors = if state.config.enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
    };

    let static_files = ServeDir::new(&state.config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found.into_service());

    Router::new()
        .route("/", get(api_info))
        .route("/signature", get(signature::random_signature))
        .route("/signature/{category}", get(signature::category_signature))
        .route("/health", get(health::health_check))
        .route("/about", get(health::about))
        .fallback_service(static_files)
        .layer(RequestBodyLimitLayer::new(state.config.max_body_size()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.config.timeout(),
        ))
        .layer(CompressionLayer::new())
        .layer(from_fn_with_state(state.clone(), rate_limit))
        .layer(cors)
        .layer(from_fn(log_requests))
        .layer(from_fn(request_id))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the signature server
///
/// Initializes logging, loads the signature catalog, and serves until
/// SIGTERM or Ctrl+C. A dataset that is missing, malformed, or empty aborts
/// startup before the listener is bound.
///
/// # Example
///
/// ```rust,no_run
/// use server::ServerConfig;
///
/// #[tokio::main]
/// async fn main() -> anyhow::Result<()> {
///     let config = ServerConfig::load()?;
///     server::start_server(config).await?;
///     Ok(())
/// }
/// ```
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_target(false)
        .with_thread_ids(true)
        .with_thread_names(true)
        .json()
        .init();

    // Create server state
    let state = Arc::new(ServerState::new(config.clone())?);

    spawn_rate_limit_sweeper(state.clone());

    // Build router
    let app = build_router(state);

    // Parse bind address
    let addr: SocketAddr = config.socket_addr()?;

    tracing::info!("Starting Signature-as-a-Service on {}", addr);
    tracing::info!(
        "Rate limit: {} requests per {}s per client",
        config.rate_limit_max_requests,
        config.rate_limit_window_secs
    );
    tracing::info!(
        "CORS: {}, static assets: {}",
        config.enable_cors,
        config.static_dir.display()
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        "API ready at http://localhost:{}/signature",
        listener.local_addr()?.port()
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Periodically drop expired rate limit windows
fn spawn_rate_limit_sweeper(state: Arc<ServerState>) {
    let period = state
        .config
        .rate_limit_window()
        .max(std::time::Duration::from_secs(1));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let removed = state.sweep_rate_limits();
            if removed > 0 {
                tracing::debug!(removed, "swept expired rate limit windows");
            }
        }
    });
}

/// Shutdown signal handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}
