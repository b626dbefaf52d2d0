use std::fmt;

use uuid::Uuid;

use crate::article::errors::ArticleError;
use crate::author::models::AuthorId;
use crate::identity::models::Identity;

/// Article aggregate entity.
///
/// `author_id` is a weak reference: deleting the author leaves it dangling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: AuthorId,
    pub title: String,
    pub content: String,
}

impl Article {
    /// Ownership check gating every article mutation.
    ///
    /// # Errors
    /// * `NotOwner` - Caller is not the recorded author
    pub fn ensure_owned_by(&self, owner: &AuthorId) -> Result<(), ArticleError> {
        if &self.author_id == owner {
            Ok(())
        } else {
            Err(ArticleError::NotOwner {
                article_id: self.id.to_string(),
                author_id: owner.to_string(),
            })
        }
    }
}

/// Article unique identifier type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create an article.
///
/// Carries no author field: ownership always comes from the caller's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
}

impl CreateArticleCommand {
    /// # Errors
    /// * `Validation` - Title or content is empty
    pub fn new(title: String, content: String) -> Result<Self, ArticleError> {
        if title.is_empty() {
            return Err(ArticleError::Validation("title is required".to_string()));
        }
        if content.is_empty() {
            return Err(ArticleError::Validation("content is required".to_string()));
        }

        Ok(Self { title, content })
    }

    /// Build the stored article, owned by the caller.
    pub fn into_article(self, identity: &Identity) -> Article {
        Article {
            id: ArticleId::new(),
            author_id: identity.author_id.clone(),
            title: self.title,
            content: self.content,
        }
    }
}

/// Partial article update. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleChanges {
    pub fn new(title: Option<String>, content: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
            content: content.filter(|c| !c.is_empty()),
        }
    }

    pub fn apply_to(self, article: &mut Article) {
        if let Some(title) = self.title {
            article.title = title;
        }
        if let Some(content) = self.content {
            article.content = content;
        }
    }
}
