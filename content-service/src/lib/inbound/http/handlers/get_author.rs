use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::AuthorData;
use crate::author::models::AuthorId;
use crate::author::ports::AuthorServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<AuthorData>, ApiError> {
    state
        .author_service
        .get_author(&AuthorId::from_string(id))
        .await
        .map_err(ApiError::from)
        .map(|ref author| ApiSuccess::new(StatusCode::OK, author.into()))
}
