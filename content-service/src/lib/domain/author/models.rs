use std::fmt;

use uuid::Uuid;

use crate::author::errors::AuthorError;

/// Author aggregate entity.
///
/// Represents a registered author. Only the hash of the password is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub password_hash: String,
}

/// Author unique identifier type.
///
/// Opaque: freshly minted ids are UUID v4 strings, but any string is a valid
/// lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthorId(String);

impl AuthorId {
    /// Generate a new random author ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing identifier.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to register a new author.
#[derive(Debug)]
pub struct RegisterAuthorCommand {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub password: String,
}

impl RegisterAuthorCommand {
    /// Construct a registration command.
    ///
    /// # Arguments
    /// * `password` - Plain text password (will be hashed by service)
    ///
    /// # Errors
    /// * `Validation` - Username or password is empty
    pub fn new(
        firstname: String,
        lastname: String,
        username: String,
        password: String,
    ) -> Result<Self, AuthorError> {
        if username.is_empty() {
            return Err(AuthorError::Validation("username is required".to_string()));
        }
        if password.is_empty() {
            return Err(AuthorError::Validation("password is required".to_string()));
        }

        Ok(Self {
            firstname,
            lastname,
            username,
            password,
        })
    }
}

/// Command to update an existing author.
///
/// All fields are optional to support partial updates. Empty strings count
/// as absent, so only non-empty values are ever applied.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateAuthorCommand {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UpdateAuthorCommand {
    pub const MIN_PASSWORD_LENGTH: usize = 4;

    /// Construct an update command from raw optional fields.
    ///
    /// # Errors
    /// * `Validation` - A new password is shorter than 4 characters
    pub fn new(
        firstname: Option<String>,
        lastname: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, AuthorError> {
        let password = non_empty(password);
        if let Some(password) = &password {
            let length = password.chars().count();
            if length < Self::MIN_PASSWORD_LENGTH {
                return Err(AuthorError::Validation(format!(
                    "password too short: minimum {} characters, got {}",
                    Self::MIN_PASSWORD_LENGTH,
                    length
                )));
            }
        }

        Ok(Self {
            firstname: non_empty(firstname),
            lastname: non_empty(lastname),
            username: non_empty(username),
            password,
        })
    }
}

/// Changes ready to be merged into a stored author.
///
/// Produced by the service once any new password has been hashed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorChanges {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
}

impl AuthorChanges {
    /// Overwrite the fields that carry a value, leaving the rest untouched.
    pub fn apply_to(self, author: &mut Author) {
        if let Some(firstname) = self.firstname {
            author.firstname = firstname;
        }
        if let Some(lastname) = self.lastname {
            author.lastname = lastname;
        }
        if let Some(username) = self.username {
            author.username = username;
        }
        if let Some(password_hash) = self.password_hash {
            author.password_hash = password_hash;
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> Author {
        Author {
            id: AuthorId::from_string("author-1"),
            firstname: "Nicolas".to_string(),
            lastname: "Raboy".to_string(),
            username: "nraboy".to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[test]
    fn test_minted_ids_are_unique() {
        assert_ne!(AuthorId::new(), AuthorId::new());
    }

    #[test]
    fn test_register_requires_username_and_password() {
        let missing_username = RegisterAuthorCommand::new(
            "Jane".to_string(),
            String::new(),
            String::new(),
            "secret1".to_string(),
        );
        assert!(matches!(missing_username, Err(AuthorError::Validation(_))));

        let missing_password = RegisterAuthorCommand::new(
            "Jane".to_string(),
            String::new(),
            "jane1".to_string(),
            String::new(),
        );
        assert!(matches!(missing_password, Err(AuthorError::Validation(_))));
    }

    #[test]
    fn test_update_command_drops_empty_fields() {
        let command = UpdateAuthorCommand::new(
            Some(String::new()),
            Some("Doe".to_string()),
            None,
            Some(String::new()),
        )
        .unwrap();

        assert_eq!(
            command,
            UpdateAuthorCommand {
                lastname: Some("Doe".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_update_command_rejects_short_password() {
        let result = UpdateAuthorCommand::new(None, None, None, Some("abc".to_string()));
        assert!(matches!(result, Err(AuthorError::Validation(_))));

        let result = UpdateAuthorCommand::new(None, None, None, Some("abcd".to_string()));
        assert!(result.is_ok());
    }

    #[test]
    fn test_changes_apply_only_supplied_fields() {
        let mut stored = author();
        AuthorChanges {
            username: Some("nic".to_string()),
            ..Default::default()
        }
        .apply_to(&mut stored);

        assert_eq!(stored.username, "nic");
        assert_eq!(stored.firstname, "Nicolas");
        assert_eq!(stored.lastname, "Raboy");
        assert_eq!(stored.password_hash, "$2b$04$hash");
        assert_eq!(stored.id, AuthorId::from_string("author-1"));
    }
}
