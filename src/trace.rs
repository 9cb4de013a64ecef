//! Diagnostic hook invoked at fixed points while handling a request.
//!
//! Observers are a side channel only; nothing they do reaches the response.

use tracing::{info, warn};

/// Route a handler is serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Health,
    Track,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Health => "/health",
            Route::Track => "/api/track",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Root => write!(f, "root"),
            Route::Health => write!(f, "health"),
            Route::Track => write!(f, "track"),
        }
    }
}

/// A trace point reached during request handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    RequestReceived { route: Route, method: String },
    PreflightHandled { route: Route },
    MethodRejected { route: Route, method: String },
    CodeReceived { code: Option<String> },
    MissingCode,
    CargoNotFound { code: String },
    CargoFound { code: String, status: String },
    HealthReported,
    ServiceInfoSent,
}

/// Receives trace events. Implementations must not panic.
pub trait TraceObserver: Send + Sync {
    fn on_event(&self, event: &TraceEvent);
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl TraceObserver for NoopObserver {
    fn on_event(&self, _event: &TraceEvent) {}
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TraceObserver for TracingObserver {
    fn on_event(&self, event: &TraceEvent) {
        match event {
            TraceEvent::RequestReceived { route, method } => {
                info!(route = %route, method = %method, "request received");
            }
            TraceEvent::PreflightHandled { route } => {
                info!(route = %route, "preflight request handled");
            }
            TraceEvent::MethodRejected { route, method } => {
                warn!(route = %route, method = %method, "method not allowed");
            }
            TraceEvent::CodeReceived { code } => {
                info!(code = code.as_deref().unwrap_or("NONE"), "cargo code received");
            }
            TraceEvent::MissingCode => warn!("missing cargo code parameter"),
            TraceEvent::CargoNotFound { code } => warn!(code = %code, "cargo not found"),
            TraceEvent::CargoFound { code, status } => {
                info!(code = %code, status = %status, "cargo found");
            }
            TraceEvent::HealthReported => info!("service is healthy"),
            TraceEvent::ServiceInfoSent => info!("service info sent"),
        }
    }
}
