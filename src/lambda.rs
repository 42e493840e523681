use apod_gateway::utils::{logger, validation::Validate};
use apod_gateway::{build_schema, router, GatewayConfig, NasaClient};
use lambda_http::{run, Error};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // Read once per cold start; every invocation shares the immutable schema.
    let config = GatewayConfig::from_env()?;
    config.validate()?;
    tracing::info!("Starting APOD GraphQL Lambda with {:?}", config);

    let client = NasaClient::new(&config)?;
    let app = router(build_schema(Arc::new(client)));

    run(app).await
}
