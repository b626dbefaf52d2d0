use async_trait::async_trait;

use crate::author::errors::AuthorError;
use crate::author::models::Author;
use crate::author::models::AuthorChanges;
use crate::author::models::AuthorId;
use crate::author::models::RegisterAuthorCommand;
use crate::author::models::UpdateAuthorCommand;

/// Port for author domain service operations.
///
/// The single contract both the resource and graph adapters call.
#[async_trait]
pub trait AuthorServicePort: Send + Sync + 'static {
    /// Register a new author.
    ///
    /// Usernames are not required to be unique.
    ///
    /// # Arguments
    /// * `command` - Validated command containing profile fields and password
    ///
    /// # Returns
    /// Every stored author, the new one last
    ///
    /// # Errors
    /// * `Password` - Hashing failed
    async fn register(&self, command: RegisterAuthorCommand) -> Result<Vec<Author>, AuthorError>;

    /// Check credentials.
    ///
    /// # Returns
    /// The first stored author with this username
    ///
    /// # Errors
    /// * `InvalidUsername` - No author has this username
    /// * `InvalidPassword` - Password does not match
    /// * `Password` - Stored hash is unusable
    async fn login(&self, username: &str, password: &str) -> Result<Author, AuthorError>;

    /// List every author in insertion order.
    async fn list_authors(&self) -> Result<Vec<Author>, AuthorError>;

    /// Retrieve author by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn get_author(&self, id: &AuthorId) -> Result<Author, AuthorError>;

    /// Merge non-empty fields into an existing author, re-hashing any new password.
    ///
    /// No ownership check applies.
    ///
    /// # Returns
    /// Every stored author after the update
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    /// * `Password` - Hashing failed
    async fn update_author(
        &self,
        id: &AuthorId,
        command: UpdateAuthorCommand,
    ) -> Result<Vec<Author>, AuthorError>;

    /// Remove an author. No ownership check applies.
    ///
    /// # Returns
    /// Every remaining author
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn delete_author(&self, id: &AuthorId) -> Result<Vec<Author>, AuthorError>;
}

/// Storage operations for the author collection.
///
/// Each mutating call is one atomic read-modify-write against the collection.
#[async_trait]
pub trait AuthorRepository: Send + Sync + 'static {
    /// Append an author.
    ///
    /// # Returns
    /// Every stored author after the append
    async fn create(&self, author: Author) -> Result<Vec<Author>, AuthorError>;

    /// Snapshot of every stored author.
    async fn list_all(&self) -> Result<Vec<Author>, AuthorError>;

    /// Retrieve author by identifier.
    ///
    /// # Returns
    /// Optional author (None if not found)
    async fn find_by_id(&self, id: &AuthorId) -> Result<Option<Author>, AuthorError>;

    /// Retrieve the first author with this username.
    ///
    /// # Returns
    /// Optional author (None if not found)
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, AuthorError>;

    /// Merge changes into the author with this id.
    ///
    /// # Returns
    /// Every stored author after the update
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn update(&self, id: &AuthorId, changes: AuthorChanges)
        -> Result<Vec<Author>, AuthorError>;

    /// Remove the author with this id.
    ///
    /// # Returns
    /// Every remaining author
    ///
    /// # Errors
    /// * `NotFound` - Author does not exist
    async fn delete(&self, id: &AuthorId) -> Result<Vec<Author>, AuthorError>;
}
