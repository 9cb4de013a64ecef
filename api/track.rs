use cargo_tracking_api::serverless::{method, raw_query, respond, service};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// GET /api/track?code=CARGO_CODE[&format=integration] — look up a shipment.
///
/// Returns 400 when `code` is missing and 404 when it is unknown.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    respond(service().track(&method(&req)?, raw_query(&req)))
}
