use async_graphql::Context;
use async_graphql::EmptySubscription;
use async_graphql::ErrorExtensions;
use async_graphql::InputObject;
use async_graphql::Object;
use async_graphql::Schema;
use async_graphql::SimpleObject;

use crate::article::errors::ArticleError;
use crate::article::models::Article;
use crate::article::models::ArticleId;
use crate::article::models::CreateArticleCommand;
use crate::article::ports::ArticleServicePort;
use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::author::models::AuthorId;
use crate::author::models::UpdateAuthorCommand;
use crate::author::ports::AuthorServicePort;
use crate::identity::errors::AuthenticationError;
use crate::identity::models::Identity;
use crate::identity::ports::TokenValidator;
use crate::identity::service::authenticate_bearer;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

pub type ContentSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> ContentSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Credentials presented with a graph request.
///
/// The `Authorization` header wins; the `token` query parameter is the
/// fallback older clients use.
#[derive(Debug, Clone, Default)]
pub struct GraphCaller {
    pub authorization: Option<Result<String, AuthenticationError>>,
    pub token: Option<String>,
}

impl GraphCaller {
    pub fn identity(&self, validator: &dyn TokenValidator) -> Result<Identity, AuthenticationError> {
        match (&self.authorization, &self.token) {
            (Some(header), _) => authenticate_bearer(validator, Some(header.clone()?.as_str())),
            (None, Some(token)) => validator.validate(token),
            (None, None) => Err(AuthenticationError::MissingHeader),
        }
    }
}

/// Graph error carrying the HTTP-equivalent status in `extensions.status`.
fn graph_error(err: impl Into<ApiError>) -> async_graphql::Error {
    let err: ApiError = err.into();
    let status = i32::from(err.status().as_u16());

    async_graphql::Error::new(err.message()).extend_with(|_, e| e.set("status", status))
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Author")]
pub struct AuthorObject {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
}

impl From<&Author> for AuthorObject {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            firstname: author.firstname.clone(),
            lastname: author.lastname.clone(),
            username: author.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Article")]
pub struct ArticleObject {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
}

impl From<&Article> for ArticleObject {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.to_string(),
            author: article.author_id.to_string(),
            title: article.title.clone(),
            content: article.content.clone(),
        }
    }
}

#[derive(Debug, InputObject)]
pub struct ArticleInput {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Accepted for compatibility and ignored
    pub author: Option<String>,
}

#[derive(Debug, InputObject)]
pub struct AuthorInput {
    pub id: String,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

fn authors_to_objects(authors: &[Author]) -> Vec<AuthorObject> {
    authors.iter().map(AuthorObject::from).collect()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<AuthorObject>> {
        let state = ctx.data::<AppState>()?;
        let authors = state
            .author_service
            .list_authors()
            .await
            .map_err(graph_error)?;

        Ok(authors_to_objects(&authors))
    }

    async fn author(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<AuthorObject>> {
        let state = ctx.data::<AppState>()?;

        match state
            .author_service
            .get_author(&AuthorId::from_string(id))
            .await
        {
            Ok(author) => Ok(Some((&author).into())),
            Err(AuthorError::NotFound(_)) => Ok(None),
            Err(e) => Err(graph_error(e)),
        }
    }

    async fn articles(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<ArticleObject>> {
        let state = ctx.data::<AppState>()?;
        let articles = state
            .article_service
            .list_articles()
            .await
            .map_err(graph_error)?;

        Ok(articles.iter().map(ArticleObject::from).collect())
    }

    async fn article(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<ArticleObject>> {
        let state = ctx.data::<AppState>()?;

        match state
            .article_service
            .get_article(&ArticleId::from_string(id))
            .await
        {
            Ok(article) => Ok(Some((&article).into())),
            Err(ArticleError::NotFound(_)) => Ok(None),
            Err(e) => Err(graph_error(e)),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Requires a bearer token; the caller becomes the author.
    async fn create_article(
        &self,
        ctx: &Context<'_>,
        article: ArticleInput,
    ) -> async_graphql::Result<ArticleObject> {
        let state = ctx.data::<AppState>()?;
        let caller = ctx.data_opt::<GraphCaller>().cloned().unwrap_or_default();

        let identity = caller
            .identity(state.token_validator.as_ref())
            .map_err(|e| {
                tracing::warn!(error = %e, "Graph bearer authentication failed");
                graph_error(e)
            })?;

        if let Some(author) = &article.author {
            tracing::debug!(ignored_author = %author, "Client-supplied article author ignored");
        }

        let command = CreateArticleCommand::new(
            article.title.unwrap_or_default(),
            article.content.unwrap_or_default(),
        )
        .map_err(graph_error)?;

        let created = state
            .article_service
            .create_article(command, &identity)
            .await
            .map_err(graph_error)?;

        Ok((&created).into())
    }

    /// Not gated by a bearer token, matching the resource surface.
    async fn update_author(
        &self,
        ctx: &Context<'_>,
        author: AuthorInput,
    ) -> async_graphql::Result<Vec<AuthorObject>> {
        let state = ctx.data::<AppState>()?;

        let command = UpdateAuthorCommand::new(
            author.firstname,
            author.lastname,
            author.username,
            author.password,
        )
        .map_err(graph_error)?;

        let authors = state
            .author_service
            .update_author(&AuthorId::from_string(author.id), command)
            .await
            .map_err(graph_error)?;

        Ok(authors_to_objects(&authors))
    }

    async fn delete_author(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Vec<AuthorObject>> {
        let state = ctx.data::<AppState>()?;

        let authors = state
            .author_service
            .delete_author(&AuthorId::from_string(id))
            .await
            .map_err(graph_error)?;

        Ok(authors_to_objects(&authors))
    }
}
