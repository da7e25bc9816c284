//! Middleware stack builder for clean composition

use crate::config::LoggingSettings;
use crate::http::middleware::{logging_middleware, request_id_middleware};
use axum::{http::Request, middleware::from_fn, Router};
use tower_http::trace::TraceLayer;

/// Builder for composing the middleware stack shared by both servers
#[derive(Debug, Clone)]
pub struct MiddlewareStack {
    enable_logging: bool,
    enable_trace_spans: bool,
}

impl MiddlewareStack {
    pub fn new() -> Self {
        Self {
            enable_logging: true,
            enable_trace_spans: true,
        }
    }

    /// Honour `logging.request_logs` and `logging.trace_spans`
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let mut stack = Self::new();
        if !settings.request_logs {
            stack = stack.disable_logging();
        }
        if !settings.trace_spans {
            stack = stack.disable_trace_spans();
        }
        stack
    }

    /// Apply the middleware stack to a router
    ///
    /// Applied outer to inner:
    /// 1. Request ID generation/propagation
    /// 2. Tracing span per request (tower-http)
    /// 3. Request logging with timing
    pub fn apply_to_router<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        let mut router = router;

        // Layers wrap outwards, so the innermost goes first
        if self.enable_logging {
            router = router.layer(from_fn(logging_middleware));
        }
        if self.enable_trace_spans {
            router = router.layer(TraceLayer::new_for_http().make_span_with(
                |request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ));
        }
        router.layer(from_fn(request_id_middleware))
    }

    /// Builder method to disable request logging
    pub fn disable_logging(mut self) -> Self {
        self.enable_logging = false;
        self
    }

    /// Builder method to disable per-request tracing spans
    pub fn disable_trace_spans(mut self) -> Self {
        self.enable_trace_spans = false;
        self
    }
}

impl Default for MiddlewareStack {
    fn default() -> Self {
        Self::new()
    }
}
