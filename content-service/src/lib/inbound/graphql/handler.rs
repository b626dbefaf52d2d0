use std::collections::HashMap;

use async_graphql_axum::rejection::GraphQLRejection;
use async_graphql_axum::GraphQLRequest;
use async_graphql_axum::GraphQLResponse;
use axum::extract::Query;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::Router;

use super::schema::ContentSchema;
use super::schema::GraphCaller;
use crate::identity::errors::AuthenticationError;
use crate::inbound::http::handlers::ApiError;

pub fn graphql_router(schema: ContentSchema) -> Router {
    Router::new()
        .route("/graphql", post(graphql).get(graphql))
        .with_state(schema)
}

impl From<GraphQLRejection> for ApiError {
    fn from(rejection: GraphQLRejection) -> Self {
        ApiError::BadRequest(rejection.0.to_string())
    }
}

/// Execute a query or mutation against the shared services.
///
/// Resolver failures are reported inside the response's `errors` array; only
/// an unreadable request is answered with an HTTP error.
pub async fn graphql(
    State(schema): State<ContentSchema>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    request: Result<GraphQLRequest, GraphQLRejection>,
) -> Result<GraphQLResponse, ApiError> {
    let caller = GraphCaller {
        authorization: headers.get(AUTHORIZATION).map(|value| {
            value
                .to_str()
                .map(str::to_string)
                .map_err(|_| AuthenticationError::MalformedHeader)
        }),
        token: params.get("token").cloned(),
    };

    let request = request?.into_inner().data(caller);

    Ok(schema.execute(request).await.into())
}
