use crate::utils::error::{ApodError, Result};
use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Astronomy Picture of the Day, as exposed by the `getAPOD` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "APOD")]
pub struct Apod {
    pub explanation: String,
    pub hdurl: String,
    pub title: String,
}

/// Upstream payload before it has been checked against the schema contract.
///
/// The APOD API sends more fields (`date`, `media_type`, `url`, ...); only the
/// three the schema needs are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawApod {
    pub explanation: Option<String>,
    pub hdurl: Option<String>,
    pub title: Option<String>,
}

impl TryFrom<RawApod> for Apod {
    type Error = ApodError;

    fn try_from(raw: RawApod) -> Result<Self> {
        let explanation = raw
            .explanation
            .ok_or(ApodError::MissingField { field: "explanation" })?;
        let hdurl = raw.hdurl.ok_or(ApodError::MissingField { field: "hdurl" })?;
        let title = raw
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or(ApodError::MissingField { field: "title" })?;

        Ok(Apod {
            explanation,
            hdurl,
            title,
        })
    }
}
