use crate::identity::errors::AuthenticationError;
use crate::identity::models::BearerToken;
use crate::identity::models::Identity;
use crate::identity::ports::TokenValidator;

/// Resolve the caller's identity from a raw `Authorization` header value.
///
/// Shared by every inbound adapter that gates an operation on a bearer token.
/// Validator errors are passed through unchanged.
///
/// # Errors
/// * `MissingHeader` - No header was supplied
/// * `MalformedHeader` - Header is not `Bearer <token>`
/// * any `TokenValidator` error
pub fn authenticate_bearer(
    validator: &dyn TokenValidator,
    authorization: Option<&str>,
) -> Result<Identity, AuthenticationError> {
    let header = authorization.ok_or(AuthenticationError::MissingHeader)?;
    let token = BearerToken::parse(header)?;

    validator.validate(token.as_str())
}
