use anyhow::Context;
use apod_gateway::utils::{logger, validation::Validate};
use apod_gateway::{build_schema, router, CliConfig, GatewayConfig, NasaClient, TomlConfig};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting apod-gateway");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // A config file replaces the environment for upstream settings.
    let (client, file_bind) = match &cli.config {
        Some(path) => {
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            config.validate()?;
            (NasaClient::new(&config)?, Some(config.bind().to_string()))
        }
        None => {
            let config = GatewayConfig::from_env()?;
            config.validate()?;
            tracing::debug!("Gateway config: {:?}", config);
            (NasaClient::new(&config)?, None)
        }
    };

    let bind = cli.bind_address(file_bind.as_deref()).to_string();
    let addr = apod_gateway::utils::validation::validate_socket_addr("bind", &bind)?;

    let app = router(build_schema(Arc::new(client)));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Listening on http://{}", addr);
    tracing::info!("🔭 GraphiQL at http://{}/graphql", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("apod-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
