use std::sync::Arc;

use content_service::article::service::ArticleService;
use content_service::author::service::AuthorService;
use content_service::config::Config;
use content_service::inbound::http::router::create_router;
use content_service::inbound::http::router::AppState;
use content_service::outbound::repositories::seed;
use content_service::outbound::repositories::InMemoryArticleRepository;
use content_service::outbound::repositories::InMemoryAuthorRepository;
use content_service::outbound::tokens::JwtTokenService;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "content-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let hash_scheme = config.password.hash_scheme()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        password_scheme = %hash_scheme,
        seed_sample_data = config.store.seed_sample_data,
        "Configuration loaded"
    );

    let (author_repository, article_repository) = if config.store.seed_sample_data {
        (
            InMemoryAuthorRepository::with_authors(seed::sample_authors()),
            InMemoryArticleRepository::with_articles(seed::sample_articles()),
        )
    } else {
        (
            InMemoryAuthorRepository::new(),
            InMemoryArticleRepository::new(),
        )
    };

    let author_service = Arc::new(AuthorService::new(
        Arc::new(author_repository),
        auth::PasswordHasher::with_scheme(hash_scheme),
    ));
    let article_service = Arc::new(ArticleService::new(Arc::new(article_repository)));
    let tokens = Arc::new(JwtTokenService::new(
        config.jwt.secret.as_bytes(),
        config.jwt.expiration_hours,
    ));

    let state = AppState::new(author_service, article_service, tokens.clone(), tokens);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited");
    Ok(())
}
