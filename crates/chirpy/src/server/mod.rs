//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Count hits on the static file subtree.
//! - Encode every handler outcome as a JSON envelope.
//! - Inject shared application state (`AppState`) into handlers.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;
