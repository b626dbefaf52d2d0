use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::author_list;
use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::AuthorData;
use crate::author::errors::AuthorError;
use crate::author::models::RegisterAuthorCommand;
use crate::author::ports::AuthorServicePort;
use crate::inbound::http::router::AppState;

pub async fn register_author(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<RegisterAuthorRequest>,
) -> Result<ApiSuccess<Vec<AuthorData>>, ApiError> {
    state
        .author_service
        .register(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref authors| ApiSuccess::new(StatusCode::CREATED, author_list(authors)))
}

/// HTTP request body for registering an author (raw JSON).
///
/// A client-supplied `id` is ignored; ids are always minted server-side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterAuthorRequest {
    #[serde(default)]
    firstname: String,
    #[serde(default)]
    lastname: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

impl RegisterAuthorRequest {
    fn try_into_command(self) -> Result<RegisterAuthorCommand, AuthorError> {
        RegisterAuthorCommand::new(self.firstname, self.lastname, self.username, self.password)
    }
}
