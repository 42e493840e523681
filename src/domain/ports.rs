use crate::domain::model::RawApod;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_key(&self) -> &str;
    fn upstream_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
}

/// Source of the picture of the day. The resolver only sees this trait.
#[async_trait]
pub trait ApodSource: Send + Sync {
    async fn fetch_apod(&self) -> Result<RawApod>;
}
