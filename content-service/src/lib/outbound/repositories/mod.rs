pub mod article;
pub mod author;
pub mod seed;

pub use article::InMemoryArticleRepository;
pub use author::InMemoryAuthorRepository;
