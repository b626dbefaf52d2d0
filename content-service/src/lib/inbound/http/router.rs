use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::header;
use axum::http::HeaderName;
use axum::http::Method;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_article::create_article;
use super::handlers::delete_article::delete_article;
use super::handlers::delete_author::delete_author;
use super::handlers::get_article::get_article;
use super::handlers::get_author::get_author;
use super::handlers::list_articles::list_articles;
use super::handlers::list_authors::list_authors;
use super::handlers::login::login;
use super::handlers::register_author::register_author;
use super::handlers::root::root;
use super::handlers::update_article::update_article;
use super::handlers::update_author::update_author;
use super::middleware::authenticate as auth_middleware;
use crate::article::ports::ArticleServicePort;
use crate::author::ports::AuthorServicePort;
use crate::identity::ports::TokenIssuer;
use crate::identity::ports::TokenValidator;
use crate::inbound::graphql;

/// Capabilities shared by the resource and graph adapters.
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<dyn AuthorServicePort>,
    pub article_service: Arc<dyn ArticleServicePort>,
    pub token_validator: Arc<dyn TokenValidator>,
    pub token_issuer: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn new(
        author_service: Arc<dyn AuthorServicePort>,
        article_service: Arc<dyn ArticleServicePort>,
        token_validator: Arc<dyn TokenValidator>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            author_service,
            article_service,
            token_validator,
            token_issuer,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/", get(root))
        .route("/login", post(login))
        .route("/author", post(register_author))
        .route("/authors", get(list_authors))
        .route("/author/:id", get(get_author))
        .route("/author/:id", put(update_author))
        .route("/author/:id", delete(delete_author))
        .route("/articles", get(list_articles))
        .route("/article/:id", get(get_article));

    let protected_routes = Router::new()
        .route("/article", post(create_article))
        .route("/article/:id", put(update_article))
        .route("/article/:id", delete(delete_article))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let graphql_routes = graphql::handler::graphql_router(graphql::schema::build_schema(
        state.clone(),
    ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        .merge(graphql_routes)
        .layer(trace_layer)
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
}
