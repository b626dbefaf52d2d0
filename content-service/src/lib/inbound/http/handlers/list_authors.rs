use axum::extract::State;
use axum::http::StatusCode;

use super::author_list;
use super::ApiError;
use super::ApiSuccess;
use super::AuthorData;
use crate::author::ports::AuthorServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AuthorData>>, ApiError> {
    state
        .author_service
        .list_authors()
        .await
        .map_err(ApiError::from)
        .map(|ref authors| ApiSuccess::new(StatusCode::OK, author_list(authors)))
}
