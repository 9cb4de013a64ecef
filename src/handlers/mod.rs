//! Request handlers — one per route, shared by the serverless functions and
//! the standalone server.
//!
//! Each handler maps (method, query) to an [`ApiResponse`] with no state of its
//! own. `OPTIONS` is answered before anything else; the fixed CORS headers are
//! attached to every response.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use http::{Method, StatusCode};
use serde::Serialize;

use crate::error::{LookupError, Result};
use crate::format::{format_record, ResponseFormat};
use crate::lookup::{lookup, TrackQuery};
use crate::models::response::{EndpointList, ErrorResponse, HealthResponse, ServiceInfo};
use crate::store::{sample_store, CargoStore, InMemoryCargoStore};
use crate::trace::{Route, TraceEvent, TraceObserver, TracingObserver};

/// Headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
];

const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// Framework-neutral HTTP response produced by the handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Serialized JSON body. `None` for an empty body.
    pub body: Option<String>,
}

impl ApiResponse {
    /// Response with no body.
    pub fn empty(status: StatusCode) -> Self {
        ApiResponse { status, body: None }
    }

    /// Response with `value` serialized as the JSON body.
    pub fn json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Result<Self> {
        Ok(ApiResponse {
            status,
            body: Some(serde_json::to_string(value)?),
        })
    }

    /// 500 response with a fixed body. Never fails.
    pub fn internal_error() -> Self {
        ApiResponse {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: Some(
                r#"{"error":"Internal Server Error","message":"Failed to build response"}"#
                    .to_string(),
            ),
        }
    }

    /// Drop the body when answering `HEAD`; status and CORS headers are kept.
    pub fn for_method(mut self, method: &Method) -> Self {
        if *method == Method::HEAD {
            self.body = None;
        }
        self
    }

    /// Headers to send: CORS always, content type when there is a body.
    pub fn headers(&self) -> Vec<(&'static str, &'static str)> {
        let mut headers = CORS_HEADERS.to_vec();
        if self.body.is_some() {
            headers.push(JSON_CONTENT_TYPE);
        }
        headers
    }
}

/// Hosting surface answering the request, reported by `/health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Serverless,
    Standalone,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Serverless => write!(f, "Vercel Serverless"),
            Environment::Standalone => write!(f, "Standalone Server"),
        }
    }
}

/// Static description returned by `GET /`.
pub fn service_info() -> ServiceInfo {
    ServiceInfo {
        message: "Cargo Tracking API".to_string(),
        version: crate::version().to_string(),
        endpoints: EndpointList {
            track: "GET /api/track?code=CARGO_CODE".to_string(),
            health: "GET /health".to_string(),
        },
        documentation: "See docs.md for complete API documentation".to_string(),
    }
}

/// The three route handlers bound to a record store and a trace observer.
pub struct ApiService<S> {
    store: S,
    environment: Environment,
    observer: Arc<dyn TraceObserver>,
}

impl ApiService<&'static InMemoryCargoStore> {
    /// Service over the sample table, logging through `tracing`.
    pub fn with_sample_store(environment: Environment) -> Self {
        ApiService::new(sample_store(), environment)
    }
}

impl<S: CargoStore> ApiService<S> {
    pub fn new(store: S, environment: Environment) -> Self {
        ApiService {
            store,
            environment,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the diagnostic observer.
    pub fn with_observer(mut self, observer: Arc<dyn TraceObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// `GET /`
    pub fn root(&self, method: &Method) -> Result<ApiResponse> {
        if let Some(response) = self.pre_dispatch(Route::Root, method)? {
            return Ok(response);
        }

        self.trace(TraceEvent::ServiceInfoSent);
        ApiResponse::json(StatusCode::OK, &service_info()).map(|r| r.for_method(method))
    }

    /// `GET /health`. `now` is the only wall-clock input in the service.
    pub fn health(&self, method: &Method, now: DateTime<Utc>) -> Result<ApiResponse> {
        if let Some(response) = self.pre_dispatch(Route::Health, method)? {
            return Ok(response);
        }

        let health = HealthResponse {
            status: "OK".to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            environment: self.environment.to_string(),
        };
        self.trace(TraceEvent::HealthReported);
        ApiResponse::json(StatusCode::OK, &health).map(|r| r.for_method(method))
    }

    /// `GET /api/track?code=...&format=...`
    pub fn track(&self, method: &Method, raw_query: Option<&str>) -> Result<ApiResponse> {
        if let Some(response) = self.pre_dispatch(Route::Track, method)? {
            return Ok(response);
        }

        let query = TrackQuery::parse(raw_query);
        self.trace(TraceEvent::CodeReceived {
            code: query.code().map(str::to_string),
        });

        let record = match lookup(&self.store, &query) {
            Ok(record) => record,
            Err(err) => {
                self.trace(match &err {
                    LookupError::MissingParameter => TraceEvent::MissingCode,
                    LookupError::NotFound { code } => {
                        TraceEvent::CargoNotFound { code: code.clone() }
                    }
                });
                let body = ErrorResponse::new(err.label(), err.to_string());
                return ApiResponse::json(err.status(), &body).map(|r| r.for_method(method));
            }
        };

        self.trace(TraceEvent::CargoFound {
            code: record.cargo_code.clone(),
            status: record.status.clone(),
        });
        let format = ResponseFormat::from_param(query.format.as_deref());
        ApiResponse::json(StatusCode::OK, &format_record(record, format))
            .map(|r| r.for_method(method))
    }

    /// Answer preflight and reject unsupported methods before route logic.
    fn pre_dispatch(&self, route: Route, method: &Method) -> Result<Option<ApiResponse>> {
        self.trace(TraceEvent::RequestReceived {
            route,
            method: method.to_string(),
        });

        if *method == Method::OPTIONS {
            self.trace(TraceEvent::PreflightHandled { route });
            return Ok(Some(ApiResponse::empty(StatusCode::OK)));
        }

        if *method != Method::GET && *method != Method::HEAD {
            self.trace(TraceEvent::MethodRejected {
                route,
                method: method.to_string(),
            });
            let body = ErrorResponse::new(
                "Method Not Allowed",
                format!("Use GET to call {}", route.path()),
            );
            return ApiResponse::json(StatusCode::METHOD_NOT_ALLOWED, &body).map(Some);
        }

        Ok(None)
    }

    fn trace(&self, event: TraceEvent) {
        self.observer.on_event(&event);
    }
}
