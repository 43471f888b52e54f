//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single catch-all static service
//! - Wire up middleware (tracing, request ID, compression, timeout)
//! - Classify every request and apply the header policy to its response
//! - Serve static files from the physical root
//! - Resolve unserved page requests to pre-rendered HTML or redirect
//! - Bind server to listener and stop on shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    handler::Handler,
    middleware::{self, Next},
    response::Response,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::config::HostConfig;
use crate::http::request::{
    propagate_request_id_layer, request_id, request_target, set_request_id_layer,
};
use crate::http::response;
use crate::observability::metrics;
use crate::routing::{Classification, Classifier, FallbackResolver, PhysicalRoot, ResolvedAction};
use crate::security::apply_headers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<Classifier>,
    pub resolver: Arc<FallbackResolver>,
}

impl AppState {
    pub fn from_config(config: &HostConfig) -> Self {
        let root = PhysicalRoot::new(config.site.physical_root.clone());
        Self {
            classifier: Arc::new(Classifier::from_config(&config.classification)),
            resolver: Arc::new(FallbackResolver::new(root, config.site.fallback_route.clone())),
        }
    }
}

/// HTTP server for the static site.
pub struct HttpServer {
    router: Router,
    config: HostConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: HostConfig) -> Self {
        let state = AppState::from_config(&config);
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &HostConfig, state: AppState) -> Router {
        let static_delivery = ServeDir::new(state.resolver.root().as_path())
            .append_index_html_on_directories(config.site.append_index_html)
            .fallback(page_fallback.with_state(state.clone()));

        Router::new().fallback_service(static_delivery).layer(
            ServiceBuilder::new()
                .layer(set_request_id_layer())
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id(request),
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                }))
                .layer(propagate_request_id_layer())
                .layer(CompressionLayer::new())
                .layer(middleware::from_fn_with_state(state, header_policy))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        )
    }

    /// Run the server until a shutdown signal is broadcast.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            physical_root = %self.config.site.physical_root.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A handle to the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Classify the request, then attach security and cache headers to
/// whatever response the inner services produce.
async fn header_policy(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let start_time = Instant::now();
    let classification = state.classifier.classify(request_target(&request));

    tracing::debug!(
        target_path = %request_target(&request),
        %classification,
        "Request classified"
    );

    request.extensions_mut().insert(classification);
    let mut response = next.run(request).await;

    apply_headers(classification, response.headers_mut());
    metrics::record_request(classification, response.status().as_u16(), start_time);
    response
}

/// Runs when static delivery found no file for the request.
async fn page_fallback(State(state): State<AppState>, request: Request) -> Response {
    let classification = request
        .extensions()
        .get::<Classification>()
        .copied()
        .unwrap_or_else(|| state.classifier.classify(request_target(&request)));

    let path = request.uri().path().to_owned();
    if classification != Classification::Page {
        tracing::debug!(path = %path, %classification, "Static asset not found");
        return response::not_found();
    }

    let resolver = state.resolver.clone();
    let lookup = path.clone();
    let action = match tokio::task::spawn_blocking(move || resolver.resolve(&lookup)).await {
        Ok(action) => action,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "Page resolution task failed");
            return response::internal_error();
        }
    };

    match action {
        ResolvedAction::ServeFile(relative) => {
            tracing::debug!(path = %path, file = %relative.display(), "Serving pre-rendered page");
            metrics::record_fallback("serve_file");
            response::serve_file(state.resolver.root().join(&relative), request).await
        }
        ResolvedAction::Redirect(target) => {
            tracing::debug!(path = %path, target = %target, "Page not pre-rendered, redirecting");
            metrics::record_fallback("redirect");
            response::redirect(&target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, StatusCode};
    use std::fs;
    use tower::ServiceExt;

    fn server() -> (tempfile::TempDir, HttpServer) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::create_dir_all(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("index.html"), "<h1>Index</h1>").unwrap();
        fs::write(dir.path().join("posts/hello-world.html"), "<h1>Hello</h1>").unwrap();
        fs::write(dir.path().join("images/cat.jpg"), [0xff, 0xd8, 0xff]).unwrap();
        fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

        let mut config = HostConfig::default();
        config.site.physical_root = dir.path().to_path_buf();
        (dir, HttpServer::new(config))
    }

    async fn send(server: &HttpServer, method: Method, uri: &str) -> Response {
        let request = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        server.router().oneshot(request).await.unwrap()
    }

    async fn get(server: &HttpServer, uri: &str) -> Response {
        send(server, Method::GET, uri).await
    }

    #[tokio::test]
    async fn test_cacheable_asset() {
        let (_dir, server) = server();
        let response = get(&server, "/images/cat.jpg").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=31536000, immutable"
        );
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_noncacheable_asset() {
        let (_dir, server) = server();
        let response = get(&server, "/app.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    }

    #[tokio::test]
    async fn test_page_served_without_extension() {
        let (_dir, server) = server();
        let response = get(&server, "/posts/hello-world").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());
        assert_eq!(response.headers()["referrer-policy"], "same-origin");
    }

    #[tokio::test]
    async fn test_missing_page_redirects_with_headers() {
        let (_dir, server) = server();
        let response = get(&server, "/posts/missing").await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/posts/home");
        assert_eq!(response.headers()["x-xss-protection"], "1; mode=block");
    }

    #[tokio::test]
    async fn test_missing_asset_is_not_found() {
        let (_dir, server) = server();
        let response = get(&server, "/images/dog.jpg").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.headers().contains_key("content-security-policy"));
        assert!(response.headers().contains_key(header::CACHE_CONTROL));
    }

    #[tokio::test]
    async fn test_unmatched_extension_is_a_page() {
        let (_dir, server) = server();
        let response = get(&server, "/style.css").await;

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/posts/home");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let (_dir, server) = server();
        let response = get(&server, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_head_request() {
        let (_dir, server) = server();
        let response = send(&server, Method::HEAD, "/posts/hello-world").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let (_dir, server) = server();
        let response = get(&server, "/app.js").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}
