use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use crate::article::models::ArticleChanges;
use crate::article::models::ArticleId;
use crate::article::ports::ArticleServicePort;
use crate::identity::models::Identity;
use crate::inbound::http::handlers::article_list;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArticleData;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an article (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub async fn update_article(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateArticleRequest>,
) -> Result<ApiSuccess<Vec<ArticleData>>, ApiError> {
    let changes = ArticleChanges::new(req.title, req.content);

    state
        .article_service
        .update_article(&ArticleId::from_string(id), &identity, changes)
        .await
        .map_err(ApiError::from)
        .map(|ref articles| ApiSuccess::new(StatusCode::OK, article_list(articles)))
}
