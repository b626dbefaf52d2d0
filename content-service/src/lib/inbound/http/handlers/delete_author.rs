use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::author::models::AuthorId;
use crate::author::ports::AuthorServicePort;
use crate::inbound::http::handlers::author_list;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::router::AppState;

pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<AuthorData>>, ApiError> {
    state
        .author_service
        .delete_author(&AuthorId::from_string(id))
        .await
        .map_err(ApiError::from)
        .map(|ref authors| ApiSuccess::new(StatusCode::OK, author_list(authors)))
}
