use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::article::errors::ArticleError;
use crate::article::models::Article;
use crate::article::models::ArticleChanges;
use crate::article::models::ArticleId;
use crate::article::ports::ArticleRepository;
use crate::author::models::AuthorId;

/// In-memory article collection.
///
/// Owner-scoped mutations find, check, and mutate while holding the write
/// lock, so no other writer can slip in between the check and the change.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }
}

fn owned_position(
    articles: &[Article],
    id: &ArticleId,
    owner: &AuthorId,
) -> Result<usize, ArticleError> {
    let index = articles
        .iter()
        .position(|article| &article.id == id)
        .ok_or(ArticleError::NotFound(id.to_string()))?;

    articles[index].ensure_owned_by(owner)?;
    Ok(index)
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create(&self, article: Article) -> Result<Article, ArticleError> {
        self.articles.write().await.push(article.clone());
        Ok(article)
    }

    async fn list_all(&self) -> Result<Vec<Article>, ArticleError> {
        Ok(self.articles.read().await.clone())
    }

    async fn find_by_id(&self, id: &ArticleId) -> Result<Option<Article>, ArticleError> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|article| &article.id == id).cloned())
    }

    async fn update_owned(
        &self,
        id: &ArticleId,
        owner: &AuthorId,
        changes: ArticleChanges,
    ) -> Result<Vec<Article>, ArticleError> {
        let mut articles = self.articles.write().await;

        let index = owned_position(&articles, id, owner)?;
        changes.apply_to(&mut articles[index]);

        Ok(articles.clone())
    }

    async fn delete_owned(
        &self,
        id: &ArticleId,
        owner: &AuthorId,
    ) -> Result<Vec<Article>, ArticleError> {
        let mut articles = self.articles.write().await;

        let index = owned_position(&articles, id, owner)?;
        articles.remove(index);

        Ok(articles.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn article(id: &str, author_id: &str) -> Article {
        Article {
            id: ArticleId::from_string(id),
            author_id: AuthorId::from_string(author_id),
            title: "Title".to_string(),
            content: "Content".to_string(),
        }
    }

    fn repository() -> InMemoryArticleRepository {
        InMemoryArticleRepository::with_articles(vec![
            article("article-1", "author-1"),
            article("article-2", "author-2"),
        ])
    }

    #[tokio::test]
    async fn test_update_owned_by_owner() {
        let repository = repository();

        let articles = repository
            .update_owned(
                &ArticleId::from_string("article-1"),
                &AuthorId::from_string("author-1"),
                ArticleChanges::new(Some("New title".to_string()), None),
            )
            .await
            .unwrap();

        assert_eq!(articles[0].title, "New title");
        assert_eq!(articles[0].content, "Content");
        assert_eq!(articles[1], article("article-2", "author-2"));
    }

    #[tokio::test]
    async fn test_update_by_other_author_is_rejected_untouched() {
        let repository = repository();
        let before = repository.list_all().await.unwrap();

        let result = repository
            .update_owned(
                &ArticleId::from_string("article-2"),
                &AuthorId::from_string("author-1"),
                ArticleChanges::new(Some("Hijacked".to_string()), Some("x".to_string())),
            )
            .await;

        assert!(matches!(result, Err(ArticleError::NotOwner { .. })));
        assert_eq!(repository.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_by_other_author_is_rejected_untouched() {
        let repository = repository();
        let before = repository.list_all().await.unwrap();

        let result = repository
            .delete_owned(
                &ArticleId::from_string("article-1"),
                &AuthorId::from_string("author-2"),
            )
            .await;

        assert_eq!(
            result,
            Err(ArticleError::NotOwner {
                article_id: "article-1".to_string(),
                author_id: "author-2".to_string(),
            })
        );
        assert_eq!(repository.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_missing_article() {
        let repository = repository();

        let result = repository
            .delete_owned(
                &ArticleId::from_string("missing"),
                &AuthorId::from_string("author-1"),
            )
            .await;

        assert_eq!(result, Err(ArticleError::NotFound("missing".to_string())));
        assert_eq!(repository.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let repository = repository();

        let remaining = repository
            .delete_owned(
                &ArticleId::from_string("article-1"),
                &AuthorId::from_string("author-1"),
            )
            .await
            .unwrap();

        assert_eq!(remaining, vec![article("article-2", "author-2")]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_and_deletes() {
        let repository = Arc::new(InMemoryArticleRepository::new());

        let creates: Vec<_> = (0..100)
            .map(|i| {
                let repository = Arc::clone(&repository);
                tokio::spawn(async move {
                    repository
                        .create(article(&format!("a{}", i), "author-1"))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in creates {
            task.await.unwrap();
        }
        assert_eq!(repository.list_all().await.unwrap().len(), 100);

        let deletes: Vec<_> = (0..100)
            .filter(|i| i % 2 == 0)
            .map(|i| {
                let repository = Arc::clone(&repository);
                tokio::spawn(async move {
                    repository
                        .delete_owned(
                            &ArticleId::from_string(format!("a{}", i)),
                            &AuthorId::from_string("author-1"),
                        )
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in deletes {
            task.await.unwrap();
        }

        let remaining = repository.list_all().await.unwrap();
        assert_eq!(remaining.len(), 50);
        assert!(remaining
            .iter()
            .all(|a| a.id.as_str()[1..].parse::<u32>().unwrap() % 2 == 1));
    }
}
