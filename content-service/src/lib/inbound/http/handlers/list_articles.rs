use axum::extract::State;
use axum::http::StatusCode;

use super::article_list;
use super::ApiError;
use super::ApiSuccess;
use super::ArticleData;
use crate::article::ports::ArticleServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<ArticleData>>, ApiError> {
    state
        .article_service
        .list_articles()
        .await
        .map_err(ApiError::from)
        .map(|ref articles| ApiSuccess::new(StatusCode::OK, article_list(articles)))
}
