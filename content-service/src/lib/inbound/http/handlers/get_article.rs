use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::ArticleData;
use crate::article::models::ArticleId;
use crate::article::ports::ArticleServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<ArticleData>, ApiError> {
    state
        .article_service
        .get_article(&ArticleId::from_string(id))
        .await
        .map_err(ApiError::from)
        .map(|ref article| ApiSuccess::new(StatusCode::OK, article.into()))
}
