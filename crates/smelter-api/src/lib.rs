//! Smelter API crate - axum HTTP server and route handlers.
//!
//! Serves the question endpoint used by the dashboard chat panel, plus
//! read-only batch listing and a health check.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
