use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::ArticleData;
use crate::article::errors::ArticleError;
use crate::article::models::CreateArticleCommand;
use crate::article::ports::ArticleServicePort;
use crate::identity::models::Identity;
use crate::inbound::http::router::AppState;

pub async fn create_article(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    ApiJson(body): ApiJson<CreateArticleRequest>,
) -> Result<ApiSuccess<ArticleData>, ApiError> {
    state
        .article_service
        .create_article(body.try_into_command()?, &identity)
        .await
        .map_err(ApiError::from)
        .map(|ref article| ApiSuccess::new(StatusCode::CREATED, article.into()))
}

/// HTTP request body for creating an article (raw JSON).
///
/// Any `author` or `id` key sent by the client is dropped during
/// deserialization; the owner is always the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: String,
}

impl CreateArticleRequest {
    fn try_into_command(self) -> Result<CreateArticleCommand, ArticleError> {
        CreateArticleCommand::new(self.title, self.content)
    }
}
