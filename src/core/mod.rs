pub mod gateway;
pub mod schema;
pub mod upstream;
pub mod view;

pub use crate::domain::model::{Apod, RawApod};
pub use crate::domain::ports::{ApodSource, ConfigProvider};
pub use crate::utils::error::Result;
