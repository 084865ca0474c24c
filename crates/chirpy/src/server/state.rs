//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::chirp::Denylist;
use crate::config::DEV_PLATFORM;
use crate::metrics::HitCounter;
use crate::users::{MemoryUserStore, UserStore};

/// Application state shared across all request handlers.
///
/// All fields are cheaply cloneable (`Arc`-wrapped or already `Arc`-backed) so
/// that Axum can clone the state for each request without copying expensive data.
#[derive(Clone)]
pub struct AppState {
    /// Hits on the `/app/` subtree.
    pub hits: HitCounter,
    /// Words masked out of accepted chirps.
    pub denylist: Arc<Denylist>,
    /// User persistence backend.
    pub users: Arc<dyn UserStore>,
    /// Deployment platform marker, read once at startup.
    pub platform: Arc<str>,
}

impl AppState {
    /// Create a new [`AppState`] with a fresh hit counter.
    pub fn new(denylist: Denylist, users: Arc<dyn UserStore>, platform: &str) -> Self {
        Self {
            hits: HitCounter::new(),
            denylist: Arc::new(denylist),
            users,
            platform: Arc::from(platform),
        }
    }

    /// Whether destructive admin operations are allowed.
    pub fn is_dev(&self) -> bool {
        &*self.platform == DEV_PLATFORM
    }
}

impl Default for AppState {
    /// Default denylist, empty in-memory users, non-dev platform. Suitable for tests.
    fn default() -> Self {
        Self::new(
            Denylist::default(),
            Arc::new(MemoryUserStore::new()),
            "",
        )
    }
}
