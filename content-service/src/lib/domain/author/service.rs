use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordError;

use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::author::models::AuthorChanges;
use crate::author::models::AuthorId;
use crate::author::models::RegisterAuthorCommand;
use crate::author::models::UpdateAuthorCommand;
use crate::author::ports::AuthorRepository;
use crate::author::ports::AuthorServicePort;

/// Domain service implementation for author operations.
///
/// Owns password hashing; the repository only ever sees hashes.
pub struct AuthorService<AR>
where
    AR: AuthorRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
}

impl<AR> AuthorService<AR>
where
    AR: AuthorRepository,
{
    /// Create a new author service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Author storage implementation
    /// * `password_hasher` - Hasher configured with the scheme for new hashes
    pub fn new(repository: Arc<AR>, password_hasher: auth::PasswordHasher) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }

    async fn hash_password(&self, password: String) -> Result<String, AuthorError> {
        let hasher = self.password_hasher.clone();

        run_blocking(move || hasher.hash(&password))
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Password hashing failed"))
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, AuthorError> {
        let hasher = self.password_hasher.clone();

        run_blocking(move || hasher.verify(&password, &hash)).await
    }
}

/// Run CPU-bound password work on the blocking pool so request tasks keep moving.
async fn run_blocking<T, F>(work: F) -> Result<T, AuthorError>
where
    F: FnOnce() -> Result<T, PasswordError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| PasswordError::HashingFailed(e.to_string()))?
        .map_err(AuthorError::from)
}

#[async_trait]
impl<AR> AuthorServicePort for AuthorService<AR>
where
    AR: AuthorRepository,
{
    async fn register(&self, command: RegisterAuthorCommand) -> Result<Vec<Author>, AuthorError> {
        let author = Author {
            id: AuthorId::new(),
            password_hash: self.hash_password(command.password).await?,
            firstname: command.firstname,
            lastname: command.lastname,
            username: command.username,
        };
        let author_id = author.id.clone();

        let authors = self.repository.create(author).await?;
        tracing::info!(author_id = %author_id, "Author registered");

        Ok(authors)
    }

    async fn login(&self, username: &str, password: &str) -> Result<Author, AuthorError> {
        let author = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                tracing::warn!(username, "Login rejected: unknown username");
                AuthorError::InvalidUsername
            })?;

        if !self
            .verify_password(password.to_string(), author.password_hash.clone())
            .await?
        {
            tracing::warn!(author_id = %author.id, "Login rejected: wrong password");
            return Err(AuthorError::InvalidPassword);
        }

        tracing::info!(author_id = %author.id, "Author logged in");
        Ok(author)
    }

    async fn list_authors(&self) -> Result<Vec<Author>, AuthorError> {
        self.repository.list_all().await
    }

    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AuthorError::NotFound(id.to_string()))
    }

    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Vec<Author>, AuthorError> {
        let password_hash = match command.password {
            Some(password) => Some(self.hash_password(password).await?),
            None => None,
        };

        let changes = AuthorChanges {
            firstname: command.firstname,
            lastname: command.lastname,
            username: command.username,
            password_hash,
        };

        let authors = self.repository.update(id, changes).await?;
        tracing::info!(author_id = %id, "Author updated");

        Ok(authors)
    }

    async fn delete_author(&self, id: &AuthorId) -> Result<Vec<Author>, AuthorError> {
        let authors = self.repository.delete(id).await?;
        tracing::info!(author_id = %id, "Author deleted");

        Ok(authors)
    }
}
