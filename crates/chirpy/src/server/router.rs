//! Axum router construction.

use std::{path::PathBuf, time::Duration};

use axum::{
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use super::{handlers, middleware, state::AppState};
use crate::config::Config;

/// Transport-level settings for [`build`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Directory served under `/app/` and `/api/assets`.
    pub fileserver_root: PathBuf,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl From<&Config> for RouterOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            fileserver_root: PathBuf::from(&cfg.fileserver_root),
            request_timeout: Duration::from_secs(cfg.request_timeout_secs),
        }
    }
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Build the application [`Router`] with all routes and middleware attached.
///
/// Only the `/app/` file server is wrapped by the hit counter; a bare `/app`
/// is redirected before it is counted.
pub fn build(state: AppState, opts: &RouterOptions) -> Router {
    let app_files = ServiceBuilder::new()
        .layer(from_fn(middleware::redirect_bare_prefix))
        .layer(from_fn_with_state(state.hits.clone(), middleware::count_hits))
        .service(ServeDir::new(&opts.fileserver_root));

    Router::new()
        .route("/api/healthz", get(handlers::healthz))
        .route("/api/validate_chirp", post(handlers::validate_chirp))
        .route("/api/users", post(handlers::create_user))
        .route("/admin/metrics", get(handlers::metrics))
        .route("/admin/reset", post(handlers::reset))
        .route_service("/api/assets", ServeDir::new(&opts.fileserver_root))
        .nest_service(middleware::APP_PREFIX, app_files)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(opts.request_timeout))
        .layer(CompressionLayer::new())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn scratch_root(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("chirpy-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<h1>Chirpy</h1>").unwrap();
        dir
    }

    fn options(root: PathBuf) -> RouterOptions {
        RouterOptions {
            fileserver_root: root,
            ..RouterOptions::default()
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = build(AppState::default(), &RouterOptions::default());
        let resp = app.oneshot(request("GET", "/unknown")).await.unwrap();
        assert_eq!(resp.status(), 404);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"not found"}"#);
    }

    #[tokio::test]
    async fn healthz_is_plain_ok() {
        let app = build(AppState::default(), &RouterOptions::default());
        let resp = app.oneshot(request("GET", "/api/healthz")).await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn healthz_rejects_post() {
        let app = build(AppState::default(), &RouterOptions::default());
        let resp = app.oneshot(request("POST", "/api/healthz")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn app_subtree_serves_files_and_counts() {
        let state = AppState::default();
        let root = scratch_root("serve");
        let app = build(state.clone(), &options(root));

        let resp = app.clone().oneshot(request("GET", "/app/")).await.unwrap();
        assert_eq!(resp.status(), 200);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"<h1>Chirpy</h1>");

        app.oneshot(request("GET", "/app/index.html")).await.unwrap();
        assert_eq!(state.hits.report(), 2);
    }

    #[test]
    fn default_options_follow_config_defaults() {
        let cfg = Config::default();
        let opts = RouterOptions::default();
        assert_eq!(opts.request_timeout, Duration::from_secs(cfg.request_timeout_secs));
        assert_eq!(opts.fileserver_root, PathBuf::from(cfg.fileserver_root));
    }

    #[tokio::test]
    async fn bare_app_redirects_without_counting() {
        let state = AppState::default();
        let app = build(state.clone(), &options(scratch_root("bare")));

        let resp = app.clone().oneshot(request("GET", "/app")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()["location"], "/app/");

        let resp = app.oneshot(request("GET", "/app?x=1")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(resp.headers()["location"], "/app/?x=1");

        assert_eq!(state.hits.report(), 0);
    }

    #[tokio::test]
    async fn missing_files_still_count() {
        let state = AppState::default();
        let app = build(state.clone(), &options(scratch_root("missing")));
        let resp = app
            .oneshot(request("GET", "/app/does-not-exist.png"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 404);
        assert_eq!(state.hits.report(), 1);
    }

    #[tokio::test]
    async fn api_and_admin_routes_do_not_count() {
        let state = AppState::default();
        let app = build(state.clone(), &options(scratch_root("uncounted")));
        for uri in ["/api/healthz", "/admin/metrics", "/api/assets", "/nowhere"] {
            app.clone().oneshot(request("GET", uri)).await.unwrap();
        }
        assert_eq!(state.hits.report(), 0);
    }

    #[tokio::test]
    async fn metrics_reflects_app_hits() {
        let state = AppState::default();
        let app = build(state.clone(), &options(scratch_root("metrics")));
        for _ in 0..4 {
            app.clone().oneshot(request("GET", "/app/")).await.unwrap();
        }
        let resp = app.oneshot(request("GET", "/admin/metrics")).await.unwrap();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Chirpy has been visited 4 times!"), "{html}");
    }

    #[tokio::test]
    async fn reset_outside_dev_keeps_hits() {
        let state = AppState::default();
        let app = build(state.clone(), &options(scratch_root("reset")));
        app.clone().oneshot(request("GET", "/app/")).await.unwrap();

        let resp = app.oneshot(request("POST", "/admin/reset")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"Forbidden"}"#);
        assert_eq!(state.hits.report(), 1);
    }

    #[tokio::test]
    async fn concurrent_app_requests_are_all_counted() {
        let state = AppState::default();
        let app = build(state.clone(), &options(scratch_root("concurrent")));
        let tasks: Vec<_> = (0..50)
            .map(|_| {
                let app = app.clone();
                tokio::spawn(async move { app.oneshot(request("GET", "/app/")).await })
            })
            .collect();
        for t in tasks {
            t.await.unwrap().unwrap();
        }
        assert_eq!(state.hits.report(), 50);
    }
}
