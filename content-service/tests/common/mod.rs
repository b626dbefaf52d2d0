#![allow(dead_code)]

use std::sync::Arc;

use auth::HashScheme;
use auth::PasswordHasher;
use content_service::article::models::Article;
use content_service::article::service::ArticleService;
use content_service::author::models::Author;
use content_service::author::models::AuthorId;
use content_service::author::service::AuthorService;
use content_service::identity::ports::TokenIssuer;
use content_service::inbound::http::router::create_router;
use content_service::inbound::http::router::AppState;
use content_service::outbound::repositories::InMemoryArticleRepository;
use content_service::outbound::repositories::InMemoryAuthorRepository;
use content_service::outbound::tokens::JwtTokenService;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub tokens: Arc<JwtTokenService>,
}

impl TestApp {
    /// Spawn the application with empty stores
    pub async fn spawn() -> Self {
        Self::spawn_with(vec![], vec![]).await
    }

    /// Spawn the application with pre-populated stores
    pub async fn spawn_with(authors: Vec<Author>, articles: Vec<Article>) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let author_service = Arc::new(AuthorService::new(
            Arc::new(InMemoryAuthorRepository::with_authors(authors)),
            // Minimum bcrypt cost keeps the suite fast
            PasswordHasher::with_scheme(HashScheme::Bcrypt { cost: 4 }),
        ));
        let article_service = Arc::new(ArticleService::new(Arc::new(
            InMemoryArticleRepository::with_articles(articles),
        )));
        let tokens = Arc::new(JwtTokenService::new(JWT_SECRET, 24));

        let state = AppState::new(
            author_service,
            article_service,
            tokens.clone(),
            tokens.clone(),
        );
        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            tokens,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.put(path).bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.delete(path).bearer_auth(token)
    }

    /// Mint a valid token for an arbitrary author id
    pub fn token_for(&self, author_id: &str) -> String {
        self.tokens
            .issue(&AuthorId::from_string(author_id))
            .expect("Failed to issue token")
    }

    /// Register an author and return the id minted for it
    pub async fn register(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/author")
            .json(&json!({
                "firstname": "Jane",
                "lastname": "Doe",
                "username": username,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        body.as_array()
            .and_then(|authors| authors.last())
            .and_then(|author| author["id"].as_str())
            .expect("Missing author id")
            .to_string()
    }

    /// Log in and return the issued bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().expect("Missing token").to_string()
    }

    /// Execute a graph request
    pub async fn graphql(&self, query: &str, variables: Value, token: Option<&str>) -> Value {
        let mut request = self
            .post("/graphql")
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request
            .send()
            .await
            .expect("Failed to execute request")
            .json()
            .await
            .expect("Failed to parse response")
    }
}
