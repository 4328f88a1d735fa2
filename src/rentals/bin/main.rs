include!("../../lib.rs");
use lambda_http::{run, Error};
use crate::core::controller::AppState;
use crate::gateway::GatewayPublisherVia;
use crate::routes::build_router;
use crate::utils::logs::setup_tracing;

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let state = if DEV_MODE {
        std::env::set_var("AWS_LAMBDA_FUNCTION_NAME", "_");
        std::env::set_var("AWS_LAMBDA_FUNCTION_MEMORY_SIZE", "4096");
        std::env::set_var("AWS_LAMBDA_FUNCTION_VERSION", "1");
        std::env::set_var("AWS_LAMBDA_RUNTIME_API", "http://[::]:9000/.rt");
        AppState::new("dev", GatewayPublisherVia::Logs)
    } else {
        AppState::new("prod", GatewayPublisherVia::Logs)
    };

    run(build_router(state)).await
}
