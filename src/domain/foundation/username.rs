//! Username value object for platform account identifiers.

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Maximum length the platform allows for account names.
const MAX_USERNAME_LEN: usize = 39;

/// Validated platform username.
///
/// Non-empty after trimming, at most 39 characters, alphanumeric plus
/// hyphens and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validates and wraps a raw username, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();

        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("username"));
        }
        if trimmed.len() > MAX_USERNAME_LEN {
            return Err(ValidationError::too_long(
                "username",
                MAX_USERNAME_LEN,
                trimmed.len(),
            ));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::invalid_format(
                "username",
                "only letters, numbers, hyphens, and underscores are allowed",
            ));
        }

        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
