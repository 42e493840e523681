use crate::config::toml_config::DEFAULT_BIND;
use clap::Parser;
use std::path::PathBuf;

/// Flags of the local development server. Lambda deployments never parse these.
#[derive(Debug, Clone, Parser)]
#[command(name = "apod-gateway")]
#[command(about = "GraphQL gateway for NASA's Astronomy Picture of the Day")]
pub struct CliConfig {
    /// Listen address, overrides `server.bind` of the config file
    #[arg(long, env = "APOD_BIND")]
    pub bind: Option<String>,

    /// TOML config file; upstream settings come from the environment when absent
    #[arg(long, env = "APOD_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Flag first, then the config file, then the default.
    pub fn bind_address<'a>(&'a self, file_bind: Option<&'a str>) -> &'a str {
        self.bind.as_deref().or(file_bind).unwrap_or(DEFAULT_BIND)
    }
}
