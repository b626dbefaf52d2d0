use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::identity::errors::AuthenticationError;
use crate::identity::service::authenticate_bearer;
use crate::inbound::http::router::AppState;

/// Middleware that validates the bearer token and stores the caller's
/// [`Identity`](crate::identity::models::Identity) in request extensions.
///
/// Requests that fail are answered here and never reach the handler.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let identity = {
        let header = req
            .headers()
            .get(AUTHORIZATION)
            .map(|value| {
                value
                    .to_str()
                    .map_err(|_| AuthenticationError::MalformedHeader)
            })
            .transpose()?;

        authenticate_bearer(state.token_validator.as_ref(), header).map_err(|e| {
            tracing::warn!(error = %e, uri = %req.uri(), "Bearer authentication failed");
            e
        })?
    };

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
