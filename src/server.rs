//! Standalone HTTP server exposing the serverless routes through `axum`.

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::Result;
use crate::handlers::{ApiResponse, ApiService};
use crate::store::CargoStore;
use crate::trace::Route;

type SharedService<S> = Arc<ApiService<S>>;

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let headers = self.headers();
        let mut response = match self.body {
            Some(body) => body.into_response(),
            None => ().into_response(),
        };
        *response.status_mut() = self.status;
        for (name, value) in headers {
            response
                .headers_mut()
                .insert(name, HeaderValue::from_static(value));
        }
        response
    }
}

/// Build the router serving `/`, `/health` and `/api/track`.
///
/// Routes accept any method; [`ApiService`] decides between GET/HEAD,
/// preflight, and 405.
pub fn router<S>(service: ApiService<S>) -> Router
where
    S: CargoStore + Send + Sync + 'static,
{
    Router::new()
        .route(Route::Root.path(), any(root::<S>))
        .route(Route::Health.path(), any(health::<S>))
        .route(Route::Track.path(), any(track::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(service))
}

async fn root<S>(State(service): State<SharedService<S>>, method: Method) -> Response
where
    S: CargoStore + Send + Sync + 'static,
{
    respond(service.root(&method))
}

async fn health<S>(State(service): State<SharedService<S>>, method: Method) -> Response
where
    S: CargoStore + Send + Sync + 'static,
{
    respond(service.health(&method, chrono::Utc::now()))
}

async fn track<S>(
    State(service): State<SharedService<S>>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response
where
    S: CargoStore + Send + Sync + 'static,
{
    respond(service.track(&method, query.as_deref()))
}

fn respond(result: Result<ApiResponse>) -> Response {
    match result {
        Ok(response) => response.into_response(),
        Err(e) => {
            error!(error = %e, "failed to build response");
            ApiResponse::internal_error().into_response()
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
