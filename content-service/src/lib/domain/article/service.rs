use std::sync::Arc;

use async_trait::async_trait;

use super::errors::ArticleError;
use super::models::Article;
use super::models::ArticleChanges;
use super::models::ArticleId;
use super::models::CreateArticleCommand;
use super::ports::ArticleRepository;
use super::ports::ArticleServicePort;
use crate::identity::models::Identity;

/// Concrete implementation of ArticleServicePort.
///
/// Generic over repository for testability.
pub struct ArticleService<AR>
where
    AR: ArticleRepository,
{
    repository: Arc<AR>,
}

impl<AR> ArticleService<AR>
where
    AR: ArticleRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> ArticleServicePort for ArticleService<AR>
where
    AR: ArticleRepository,
{
    async fn create_article(
        &self,
        command: CreateArticleCommand,
        identity: &Identity,
    ) -> Result<Article, ArticleError> {
        let article = self
            .repository
            .create(command.into_article(identity))
            .await?;

        tracing::info!(
            article_id = %article.id,
            author_id = %article.author_id,
            "Article created"
        );
        Ok(article)
    }

    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError> {
        self.repository.list_all().await
    }

    async fn get_article(&self, id: &ArticleId) -> Result<Article, ArticleError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ArticleError::NotFound(id.to_string()))
    }

    async fn update_article(
        &self,
        id: &ArticleId,
        identity: &Identity,
        changes: ArticleChanges,
    ) -> Result<Vec<Article>, ArticleError> {
        let articles = self
            .repository
            .update_owned(id, &identity.author_id, changes)
            .await
            .inspect_err(|e| log_rejection(id, identity, e))?;

        tracing::info!(article_id = %id, author_id = %identity.author_id, "Article updated");
        Ok(articles)
    }

    async fn delete_article(
        &self,
        id: &ArticleId,
        identity: &Identity,
    ) -> Result<Vec<Article>, ArticleError> {
        let articles = self
            .repository
            .delete_owned(id, &identity.author_id)
            .await
            .inspect_err(|e| log_rejection(id, identity, e))?;

        tracing::info!(article_id = %id, author_id = %identity.author_id, "Article deleted");
        Ok(articles)
    }
}

fn log_rejection(id: &ArticleId, identity: &Identity, error: &ArticleError) {
    if let ArticleError::NotOwner { .. } = error {
        tracing::warn!(
            article_id = %id,
            author_id = %identity.author_id,
            "Article mutation rejected: caller is not the owner"
        );
    }
}
