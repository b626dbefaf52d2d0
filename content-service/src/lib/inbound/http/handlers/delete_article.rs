use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::article::models::ArticleId;
use crate::article::ports::ArticleServicePort;
use crate::identity::models::Identity;
use crate::inbound::http::handlers::article_list;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ArticleData;
use crate::inbound::http::router::AppState;

pub async fn delete_article(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<Vec<ArticleData>>, ApiError> {
    state
        .article_service
        .delete_article(&ArticleId::from_string(id), &identity)
        .await
        .map_err(ApiError::from)
        .map(|ref articles| ApiSuccess::new(StatusCode::OK, article_list(articles)))
}
