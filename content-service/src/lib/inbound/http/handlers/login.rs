use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiJson;
use super::ApiSuccess;
use super::AuthorData;
use crate::author::ports::AuthorServicePort;
use crate::identity::ports::TokenIssuer;
use crate::inbound::http::router::AppState;

/// Check credentials and issue a bearer token for the author.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let author = state
        .author_service
        .login(&body.username, &body.password)
        .await?;

    let token = state.token_issuer.issue(&author.id)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            author: (&author).into(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub author: AuthorData,
    pub token: String,
}
