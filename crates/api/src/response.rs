//! Response shapes for the character endpoints.
//!
//! These are deliberately separate from the storage models: the detailed
//! view exposes comment text only, and the listing is a summary without
//! ids or comments.

use serde::Serialize;
use tavern_core::types::DbId;
use tavern_db::models::character::{Character, DeletedCharacter};

/// Confirmation message returned after a successful delete.
pub const CHARACTER_REMOVED_MESSAGE: &str = "Character removed";

/// Detailed view of one character and its comments.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterView {
    pub id: DbId,
    pub name: String,
    pub level: i32,
    pub money: f64,
    pub total_comments: usize,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Serialize)]
pub struct CommentView {
    pub text: String,
}

impl From<&Character> for CharacterView {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            level: character.level,
            money: character.money,
            total_comments: character.total_comments(),
            comments: character
                .comments
                .iter()
                .map(|c| CommentView {
                    text: c.text.clone(),
                })
                .collect(),
        }
    }
}

/// Summary listing of all characters.
#[derive(Debug, Serialize)]
pub struct CharacterListing {
    pub characters: Vec<CharacterSummary>,
}

#[derive(Debug, Serialize)]
pub struct CharacterSummary {
    pub name: String,
    pub level: i32,
    pub money: f64,
}

impl From<&[Character]> for CharacterListing {
    fn from(characters: &[Character]) -> Self {
        Self {
            characters: characters
                .iter()
                .map(|c| CharacterSummary {
                    name: c.name.clone(),
                    level: c.level,
                    money: c.money,
                })
                .collect(),
        }
    }
}

/// Body returned by `DELETE /character`.
#[derive(Debug, Serialize)]
pub struct DeletionConfirmation {
    pub message: String,
    pub name: String,
}

impl From<DeletedCharacter> for DeletionConfirmation {
    fn from(deleted: DeletedCharacter) -> Self {
        Self {
            message: CHARACTER_REMOVED_MESSAGE.to_string(),
            name: deleted.name,
        }
    }
}
