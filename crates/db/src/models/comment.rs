//! Comment entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tavern_core::character::validate_comment_text;
use tavern_core::error::CoreError;
use tavern_core::types::{DbId, Timestamp};

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub character_id: DbId,
    pub text: String,
    pub created_at: Timestamp,
}

/// DTO for appending a comment to a character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub text: String,
    /// Defaults to the insert time if omitted.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl CreateComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            created_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_comment_text(&self.text)
    }
}
