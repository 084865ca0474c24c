//! Axum middleware applied to the static file subtree.
//!
//! Requests under [`APP_PREFIX`] first pass [`redirect_bare_prefix`], then
//! [`count_hits`], then reach the file server.

use axum::{
    extract::{OriginalUri, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::metrics::HitCounter;

/// Mount point of the counted file server.
pub const APP_PREFIX: &str = "/app";

/// Answer a bare `/app` with `301` to `/app/` without touching the counter.
pub async fn redirect_bare_prefix(
    OriginalUri(uri): OriginalUri,
    request: Request,
    next: Next,
) -> Response {
    if uri.path() != APP_PREFIX {
        return next.run(request).await;
    }
    let location = match uri.query() {
        Some(q) => format!("{APP_PREFIX}/?{q}"),
        None => format!("{APP_PREFIX}/"),
    };
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

/// Count one hit, then run the wrapped service whatever it returns.
pub async fn count_hits(State(hits): State<HitCounter>, request: Request, next: Next) -> Response {
    hits.increment();
    next.run(request).await
}
