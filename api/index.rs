use cargo_tracking_api::serverless::{method, respond, service};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// GET / — service description and endpoint list.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    respond(service().root(&method(&req)?))
}
