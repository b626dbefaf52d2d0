use thiserror::Error;

/// Top-level error for all article-related operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArticleError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Article not found: {0}")]
    NotFound(String),

    #[error("Author {author_id} does not own article {article_id}")]
    NotOwner {
        article_id: String,
        author_id: String,
    },
}
