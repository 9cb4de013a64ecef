//! Glue between the Vercel runtime and the shared handlers.
//!
//! Each function in `api/` parses the incoming request into a method and raw
//! query, calls its [`ApiService`](crate::handlers::ApiService) handler, and
//! converts the result with [`respond`].

use tracing::error;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::error::Result as ApiResult;
use crate::handlers::{ApiResponse, ApiService, Environment};
use crate::logging::{init_logging, LoggingConfig};
use crate::store::InMemoryCargoStore;

/// Initialize logging and build the service for a serverless function.
pub fn service() -> ApiService<&'static InMemoryCargoStore> {
    init_logging(&LoggingConfig::from_env());
    ApiService::with_sample_store(Environment::Serverless)
}

/// Method of the incoming request as an `http` crate method.
pub fn method(req: &Request) -> Result<http::Method, Error> {
    Ok(http::Method::from_bytes(req.method().as_str().as_bytes())?)
}

/// Raw query string of the incoming request, without the leading `?`.
pub fn raw_query(req: &Request) -> Option<&str> {
    req.uri().query()
}

/// Convert a handler result into a Vercel response.
///
/// A handler failure becomes the same 500 JSON body, with CORS headers, that
/// the standalone server sends.
pub fn respond(result: ApiResult<ApiResponse>) -> Result<Response<Body>, Error> {
    match result {
        Ok(response) => into_vercel_response(response),
        Err(e) => {
            error!(error = %e, "failed to build response");
            into_vercel_response(ApiResponse::internal_error())
        }
    }
}

/// Convert a handler response into a Vercel response.
pub fn into_vercel_response(response: ApiResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder().status(StatusCode::from_u16(response.status.as_u16())?);
    for (name, value) in response.headers() {
        builder = builder.header(name, value);
    }

    let body = match response.body {
        Some(text) => Body::Text(text),
        None => Body::Empty,
    };
    Ok(builder.body(body)?)
}
