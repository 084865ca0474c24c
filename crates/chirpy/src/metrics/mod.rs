//! Request-count instrumentation for the static file subtree.
//!
//! # Lifecycle
//!
//! 1. [`HitCounter::new`] is called once at startup and the counter is placed
//!    in [`AppState`](crate::server::state::AppState).
//! 2. The hit-counting middleware increments it for every request under
//!    `/app/`, before the file server runs.
//! 3. `GET /admin/metrics` reads it; `POST /admin/reset` zeroes it on the
//!    development platform.

pub mod hits;

pub use hits::HitCounter;
