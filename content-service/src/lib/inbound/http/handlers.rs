use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::article::errors::ArticleError;
use crate::article::models::Article;
use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::identity::errors::AuthenticationError;

pub mod create_article;
pub mod delete_article;
pub mod delete_author;
pub mod get_article;
pub mod get_author;
pub mod list_articles;
pub mod list_authors;
pub mod login;
pub mod register_author;
pub mod root;
pub mod update_article;
pub mod update_author;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// JSON body extractor whose rejections render like every other [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Failure surfaced to a client, always rendered as `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    UnsupportedMediaType(String),
    UnprocessableEntity(String),
    NotFound(String),
    Unauthorized(String),
    Forbidden(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::InternalServerError(msg)
            | ApiError::BadRequest(msg)
            | ApiError::UnsupportedMediaType(msg)
            | ApiError::UnprocessableEntity(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageData {
            message: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonDataError(_) => ApiError::UnprocessableEntity(message),
            JsonRejection::MissingJsonContentType(_) => ApiError::UnsupportedMediaType(message),
            _ => ApiError::BadRequest(message),
        }
    }
}

impl From<AuthorError> for ApiError {
    fn from(err: AuthorError) -> Self {
        match err {
            AuthorError::Validation(_) => ApiError::UnprocessableEntity(err.to_string()),
            AuthorError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AuthorError::InvalidUsername | AuthorError::InvalidPassword => {
                ApiError::Unauthorized(err.to_string())
            }
            AuthorError::Password(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ArticleError> for ApiError {
    fn from(err: ArticleError) -> Self {
        match err {
            ArticleError::Validation(_) => ApiError::UnprocessableEntity(err.to_string()),
            ArticleError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ArticleError::NotOwner { .. } => ApiError::Forbidden(err.to_string()),
        }
    }
}

impl From<AuthenticationError> for ApiError {
    fn from(err: AuthenticationError) -> Self {
        match err {
            AuthenticationError::IssuanceFailed(_) => {
                ApiError::InternalServerError(err.to_string())
            }
            AuthenticationError::MissingHeader
            | AuthenticationError::MalformedHeader
            | AuthenticationError::InvalidToken(_)
            | AuthenticationError::InvalidSignature(_)
            | AuthenticationError::TokenExpired => ApiError::Unauthorized(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageData {
    pub message: String,
}

/// Outbound author representation. The password hash is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorData {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
}

impl From<&Author> for AuthorData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            firstname: author.firstname.clone(),
            lastname: author.lastname.clone(),
            username: author.username.clone(),
        }
    }
}

pub fn author_list(authors: &[Author]) -> Vec<AuthorData> {
    authors.iter().map(AuthorData::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleData {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
}

impl From<&Article> for ArticleData {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.to_string(),
            author: article.author_id.to_string(),
            title: article.title.clone(),
            content: article.content.clone(),
        }
    }
}

pub fn article_list(articles: &[Article]) -> Vec<ArticleData> {
    articles.iter().map(ArticleData::from).collect()
}
