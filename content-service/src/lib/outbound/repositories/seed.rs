//! Sample records loaded at startup when `store.seed_sample_data` is set.

use crate::article::models::Article;
use crate::article::models::ArticleId;
use crate::author::models::Author;
use crate::author::models::AuthorId;

const SAMPLE_PASSWORD_HASH: &str = "$2a$10$0OtFx9DSi5x.bnjx28f4Xu1pkURjYVnTvgFnvoxIdyXambjSyLQhW";

pub fn sample_authors() -> Vec<Author> {
    vec![
        Author {
            id: AuthorId::from_string("author-1"),
            firstname: "Nicolas".to_string(),
            lastname: "Raboy".to_string(),
            username: "nraboy".to_string(),
            password_hash: SAMPLE_PASSWORD_HASH.to_string(),
        },
        Author {
            id: AuthorId::from_string("author-2"),
            firstname: "Maria".to_string(),
            lastname: "Raboy".to_string(),
            username: "mraboy".to_string(),
            password_hash: SAMPLE_PASSWORD_HASH.to_string(),
        },
    ]
}

pub fn sample_articles() -> Vec<Article> {
    vec![Article {
        id: ArticleId::from_string("article-1"),
        author_id: AuthorId::from_string("author-1"),
        title: "This is an Example Article".to_string(),
        content: "This is some sample content".to_string(),
    }]
}
