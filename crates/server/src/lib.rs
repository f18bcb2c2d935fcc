//! Signature-as-a-Service HTTP server
//!
//! Serves random email signatures from a tiered, read-only catalog. The
//! catalog is loaded once at startup and shared across handlers without
//! locking.
//!
//! # Features
//!
//! - **Rate limiting**: fixed request budget per client address per window
//! - **Middleware**: Compression, CORS, request ID tracking, structured logging
//! - **Configuration**: Environment variable and file-based configuration
//! - **Static assets**: a directory served for every path no API route claims
//! - **Graceful Shutdown**: Ctrl+C and SIGTERM
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API descriptor
//! - `GET /signature` - Random signature from any tier
//! - `GET /signature/view` - Interactive HTML viewer
//! - `GET /signature/{category}` - Random signature from one tier
//! - `GET /health` - Liveness probe
//! - `GET /about` - Service metadata

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod viewer;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
