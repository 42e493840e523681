use crate::core::schema::{ApodSchema, GET_APOD_QUERY};
use crate::core::view::ApodView;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Method};
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use futures_util::{future, stream, StreamExt};
use std::convert::Infallible;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Builds the HTTP surface shared by the local server and the Lambda handler.
///
/// Every request is served from the immutable schema; nothing is kept
/// between invocations.
pub fn router(schema: ApodSchema) -> Router {
    Router::new()
        .route("/", get(index))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(schema)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Any origin, credentials allowed. Browsers refuse `*` together with
/// credentials, so the request origin is echoed back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn graphql_handler(State(schema): State<ApodSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Streams the page: the mounted (`Loading`) view goes out before the
/// query runs, the settled view follows once it resolves.
async fn index(State(schema): State<ApodSchema>) -> impl IntoResponse {
    let view = ApodView::mount();
    let start = view.render_page_start();

    let settled = async move {
        let view = view.resolve_graphql(schema.execute(GET_APOD_QUERY).await);
        Ok::<_, Infallible>(view.render_page_end())
    };
    let chunks = stream::once(future::ready(Ok::<_, Infallible>(start)))
        .chain(stream::once(settled));

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(chunks),
    )
}
