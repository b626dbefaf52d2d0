use async_trait::async_trait;

use crate::article::errors::ArticleError;
use crate::article::models::Article;
use crate::article::models::ArticleChanges;
use crate::article::models::ArticleId;
use crate::article::models::CreateArticleCommand;
use crate::author::models::AuthorId;
use crate::identity::models::Identity;

/// Port for article domain service operations.
#[async_trait]
pub trait ArticleServicePort: Send + Sync + 'static {
    /// Create an article owned by the caller.
    ///
    /// # Returns
    /// The stored article
    async fn create_article(
        &self,
        command: CreateArticleCommand,
        identity: &Identity,
    ) -> Result<Article, ArticleError>;

    /// List every article in insertion order.
    async fn list_articles(&self) -> Result<Vec<Article>, ArticleError>;

    /// Retrieve article by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    async fn get_article(&self, id: &ArticleId) -> Result<Article, ArticleError>;

    /// Merge non-empty fields into an article the caller owns.
    ///
    /// # Returns
    /// Every stored article after the update
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `NotOwner` - Caller is not the article's author
    async fn update_article(
        &self,
        id: &ArticleId,
        identity: &Identity,
        changes: ArticleChanges,
    ) -> Result<Vec<Article>, ArticleError>;

    /// Remove an article the caller owns.
    ///
    /// # Returns
    /// Every remaining article
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `NotOwner` - Caller is not the article's author
    async fn delete_article(
        &self,
        id: &ArticleId,
        identity: &Identity,
    ) -> Result<Vec<Article>, ArticleError>;
}

/// Storage operations for the article collection.
///
/// Owner-scoped mutations check ownership and mutate under a single
/// exclusive acquisition; a failed check leaves the collection untouched.
#[async_trait]
pub trait ArticleRepository: Send + Sync + 'static {
    /// Append an article.
    async fn create(&self, article: Article) -> Result<Article, ArticleError>;

    /// Snapshot of every stored article.
    async fn list_all(&self) -> Result<Vec<Article>, ArticleError>;

    /// Retrieve article by identifier.
    ///
    /// # Returns
    /// Optional article (None if not found)
    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, ArticleError>;

    /// Merge changes into an article if `owner` is its author.
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `NotOwner` - `owner` is not the article's author
    async fn update_owned(
        &self,
        id: &ArticleId,
        owner: &AuthorId,
        changes: ArticleChanges,
    ) -> Result<Vec<Article>, ArticleError>;

    /// Remove an article if `owner` is its author.
    ///
    /// # Errors
    /// * `NotFound` - Article does not exist
    /// * `NotOwner` - `owner` is not the article's author
    async fn delete_owned(
        &self,
        id: &ArticleId,
        owner: &AuthorId,
    ) -> Result<Vec<Article>, ArticleError>;
}
