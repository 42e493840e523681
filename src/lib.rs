pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{GatewayConfig, TomlConfig};

pub use core::{
    gateway::router,
    schema::{build_schema, ApodSchema, GET_APOD_QUERY},
    upstream::NasaClient,
    view::ApodView,
};
pub use domain::model::{Apod, RawApod};
pub use domain::ports::{ApodSource, ConfigProvider};
pub use utils::error::{ApodError, Result, UpstreamError};
