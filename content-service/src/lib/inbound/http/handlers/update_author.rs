use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::author::errors::AuthorError;
use crate::author::models::AuthorId;
use crate::author::models::UpdateAuthorCommand;
use crate::author::ports::AuthorServicePort;
use crate::inbound::http::handlers::author_list;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiJson;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::AuthorData;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating an author (raw JSON)
#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UpdateAuthorRequest {
    fn try_into_command(self) -> Result<UpdateAuthorCommand, AuthorError> {
        UpdateAuthorCommand::new(self.firstname, self.lastname, self.username, self.password)
    }
}

// Deliberately not behind the bearer middleware; any caller may update any author.
pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateAuthorRequest>,
) -> Result<ApiSuccess<Vec<AuthorData>>, ApiError> {
    let command = req.try_into_command()?;

    state
        .author_service
        .update_author(&AuthorId::from_string(id), command)
        .await
        .map_err(ApiError::from)
        .map(|ref authors| ApiSuccess::new(StatusCode::OK, author_list(authors)))
}
