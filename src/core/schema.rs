use crate::domain::model::Apod;
use crate::domain::ports::ApodSource;
use async_graphql::{Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Schema};
use std::sync::Arc;

pub type ApodSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// The query the view dispatches on mount.
pub const GET_APOD_QUERY: &str = "query GetAPOD { getAPOD { explanation hdurl title } }";

pub struct Query;

#[Object]
impl Query {
    /// NASA's Astronomy Picture of the Day.
    #[graphql(name = "getAPOD")]
    async fn get_apod(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Apod>> {
        let source = ctx.data::<Arc<dyn ApodSource>>()?;

        let apod = source
            .fetch_apod()
            .await
            .and_then(Apod::try_from)
            .map_err(|e| {
                tracing::warn!("getAPOD failed: {} (code: {})", e, e.code());
                e.extend()
            })?;

        tracing::debug!("Resolved APOD \"{}\"", apod.title);
        Ok(Some(apod))
    }
}

pub fn build_schema(source: Arc<dyn ApodSource>) -> ApodSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(source)
        .finish()
}
