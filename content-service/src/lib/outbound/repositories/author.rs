use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::author::models::AuthorChanges;
use crate::author::models::AuthorId;
use crate::author::ports::AuthorRepository;

/// In-memory author collection.
///
/// Insertion-ordered and scanned linearly. Writers hold the lock for the
/// whole read-modify-write; readers only ever see complete collections.
#[derive(Debug, Default)]
pub struct InMemoryAuthorRepository {
    authors: RwLock<Vec<Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authors(authors: Vec<Author>) -> Self {
        Self {
            authors: RwLock::new(authors),
        }
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn create(&self, author: Author) -> Result<Vec<Author>, AuthorError> {
        let mut authors = self.authors.write().await;
        authors.push(author);
        Ok(authors.clone())
    }

    async fn list_all(&self) -> Result<Vec<Author>, AuthorError> {
        Ok(self.authors.read().await.clone())
    }

    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError> {
        let authors = self.authors.read().await;
        Ok(authors.iter().find(|author| &author.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, AuthorError> {
        let authors = self.authors.read().await;
        Ok(authors
            .iter()
            .find(|author| author.username == username)
            .cloned())
    }

    async fn update(
        &self,
        id: &AuthorId,
        changes: AuthorChanges,
    ) -> Result<Vec<Author>, AuthorError> {
        let mut authors = self.authors.write().await;

        let author = authors
            .iter_mut()
            .find(|author| &author.id == id)
            .ok_or(AuthorError::NotFound(id.to_string()))?;
        changes.apply_to(author);

        Ok(authors.clone())
    }

    async fn delete(&self, id: &AuthorId) -> Result<Vec<Author>, AuthorError> {
        let mut authors = self.authors.write().await;

        let index = authors
            .iter()
            .position(|author| &author.id == id)
            .ok_or(AuthorError::NotFound(id.to_string()))?;
        authors.remove(index);

        Ok(authors.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn author(id: &str, username: &str) -> Author {
        Author {
            id: AuthorId::from_string(id),
            firstname: "First".to_string(),
            lastname: "Last".to_string(),
            username: username.to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_whole_collection() {
        let repository = InMemoryAuthorRepository::with_authors(vec![author("a1", "one")]);

        let authors = repository.create(author("a2", "two")).await.unwrap();

        let ids: Vec<_> = authors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
    }

    #[tokio::test]
    async fn test_duplicate_usernames_are_kept_and_first_wins() {
        let repository = InMemoryAuthorRepository::new();
        repository.create(author("a1", "jane1")).await.unwrap();
        let authors = repository.create(author("a2", "jane1")).await.unwrap();

        assert_eq!(authors.len(), 2);
        let found = repository.find_by_username("jane1").await.unwrap().unwrap();
        assert_eq!(found.id.as_str(), "a1");
    }

    #[tokio::test]
    async fn test_find_by_id_absent() {
        let repository = InMemoryAuthorRepository::new();
        let found = repository
            .find_by_id(&AuthorId::from_string("missing"))
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_merges_changes() {
        let repository = InMemoryAuthorRepository::with_authors(vec![author("a1", "one")]);

        let authors = repository
            .update(
                &AuthorId::from_string("a1"),
                AuthorChanges {
                    lastname: Some("Changed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(authors[0].lastname, "Changed");
        assert_eq!(authors[0].firstname, "First");
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_leave_store_unchanged() {
        let repository = InMemoryAuthorRepository::with_authors(vec![author("a1", "one")]);
        let missing = AuthorId::from_string("missing");

        let update = repository.update(&missing, AuthorChanges::default()).await;
        assert_eq!(update, Err(AuthorError::NotFound("missing".to_string())));

        let delete = repository.delete(&missing).await;
        assert_eq!(delete, Err(AuthorError::NotFound("missing".to_string())));

        assert_eq!(
            repository.list_all().await.unwrap(),
            vec![author("a1", "one")]
        );
    }

    #[tokio::test]
    async fn test_delete_removes_only_match() {
        let repository = InMemoryAuthorRepository::with_authors(vec![
            author("a1", "one"),
            author("a2", "two"),
            author("a3", "three"),
        ]);

        let authors = repository.delete(&AuthorId::from_string("a2")).await.unwrap();

        let ids: Vec<_> = authors.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_lose_nothing() {
        let repository = Arc::new(InMemoryAuthorRepository::new());

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let repository = Arc::clone(&repository);
                tokio::spawn(async move {
                    repository
                        .create(author(&format!("a{}", i), "same"))
                        .await
                        .unwrap();
                })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(repository.list_all().await.unwrap().len(), 64);
    }
}
