//! Character entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tavern_core::character::{validate_money, validate_name};
use tavern_core::error::CoreError;
use tavern_core::types::{DbId, Timestamp};

use crate::models::comment::Comment;

/// A character row from the `characters` table, with its comments.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub level: i32,
    pub money: f64,
    pub created_at: Timestamp,
    /// Not a column. Filled by the repository from the `comments` table,
    /// in insertion order.
    #[sqlx(skip)]
    pub comments: Vec<Comment>,
}

impl Character {
    /// Attach a comment to the in-memory collection.
    ///
    /// Does not persist anything; the repository writes the comment row in
    /// the same transaction.
    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }

    pub fn total_comments(&self) -> usize {
        self.comments.len()
    }
}

/// DTO for creating a new character.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCharacter {
    pub name: String,
    pub level: i32,
    pub money: f64,
    /// Defaults to the insert time if omitted.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl CreateCharacter {
    pub fn new(name: impl Into<String>, level: i32, money: f64) -> Self {
        Self {
            name: name.into(),
            level,
            money,
            created_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        validate_money(self.money)
    }
}

/// Outcome of a delete-by-name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedCharacter {
    pub name: String,
    /// Rows removed from `characters`. Always 1 while names stay unique.
    pub removed: u64,
}
