//! Repository for the `characters` table.
//!
//! Every public method opens its own transaction on the pool and commits
//! only on success. An early return drops the transaction, which rolls it
//! back, so a failed call leaves no partial state.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::SqliteConnection;
use tavern_core::types::DbId;

use crate::error::RepoError;
use crate::models::character::{Character, CreateCharacter, DeletedCharacter};
use crate::models::comment::{Comment, CreateComment};
use crate::repositories::CommentRepo;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, level, money, created_at";

/// Provides the character operations and comment appends.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row with no comments.
    ///
    /// If `created_at` is `None`, defaults to the current time. A name that
    /// is already taken yields [`RepoError::DuplicateName`].
    pub async fn create(pool: &DbPool, input: &CreateCharacter) -> Result<Character, RepoError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO characters (name, level, money, created_at)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        let character = sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(input.level)
            .bind(input.money)
            .bind(input.created_at.unwrap_or_else(Utc::now))
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepoError::from_character_insert(e, &input.name))?;

        tx.commit().await?;
        tracing::debug!(id = character.id, name = %character.name, "Character created");
        Ok(character)
    }

    /// List all characters with their comments, ordered by id.
    pub async fn list(pool: &DbPool) -> Result<Vec<Character>, RepoError> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id ASC");
        let mut characters = sqlx::query_as::<_, Character>(&query)
            .fetch_all(&mut *tx)
            .await?;
        let comments = CommentRepo::list_all(&mut tx).await?;

        tx.commit().await?;
        attach_comments(&mut characters, comments);
        tracing::debug!(count = characters.len(), "Characters listed");
        Ok(characters)
    }

    /// Find a character by id, with its comments.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Character, RepoError> {
        let mut tx = pool.begin().await?;

        let mut character = fetch_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| RepoError::character_id_not_found(id))?;
        character.comments = CommentRepo::list_by_character(&mut tx, id).await?;

        tx.commit().await?;
        Ok(character)
    }

    /// Delete every character whose name matches exactly, along with its
    /// comments.
    ///
    /// Returns [`RepoError::NotFound`] and leaves the store untouched when
    /// nothing matches.
    pub async fn delete_by_name(pool: &DbPool, name: &str) -> Result<DeletedCharacter, RepoError> {
        let mut tx = pool.begin().await?;

        let comments_removed = CommentRepo::delete_by_character_name(&mut tx, name).await?;
        let result = sqlx::query("DELETE FROM characters WHERE name = ?1")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        let removed = result.rows_affected();
        if removed == 0 {
            return Err(RepoError::character_name_not_found(name));
        }

        tx.commit().await?;
        tracing::debug!(name, removed, comments_removed, "Character deleted");
        Ok(DeletedCharacter {
            name: name.to_string(),
            removed,
        })
    }

    /// Append a comment to an existing character and return the character
    /// with its full comment list.
    ///
    /// The insert runs first so the transaction takes the write lock before
    /// reading; a read snapshot cannot be upgraded once another writer has
    /// committed. A missing character surfaces as a foreign-key violation,
    /// which rolls back with no comment row written.
    pub async fn add_comment(
        pool: &DbPool,
        character_id: DbId,
        input: &CreateComment,
    ) -> Result<Character, RepoError> {
        let mut tx = pool.begin().await?;

        let comment = CommentRepo::insert(&mut tx, character_id, input)
            .await
            .map_err(|e| RepoError::from_comment_insert(e, character_id))?;

        let mut character = fetch_by_id(&mut tx, character_id)
            .await?
            .ok_or_else(|| RepoError::character_id_not_found(character_id))?;
        let earlier = CommentRepo::list_by_character(&mut tx, character_id).await?;
        for existing in earlier.into_iter().filter(|c| c.id != comment.id) {
            character.add_comment(existing);
        }
        character.add_comment(comment);

        tx.commit().await?;
        tracing::debug!(
            character_id,
            total_comments = character.total_comments(),
            "Comment added"
        );
        Ok(character)
    }

    /// Count all characters.
    pub async fn count(pool: &DbPool) -> Result<i64, RepoError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

async fn fetch_by_id(
    conn: &mut SqliteConnection,
    id: DbId,
) -> Result<Option<Character>, sqlx::Error> {
    let query = format!("SELECT {COLUMNS} FROM characters WHERE id = ?1");
    sqlx::query_as::<_, Character>(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Distribute `comments` onto their owning characters, keeping order.
fn attach_comments(characters: &mut [Character], comments: Vec<Comment>) {
    let index: HashMap<DbId, usize> = characters
        .iter()
        .enumerate()
        .map(|(i, c)| (c.id, i))
        .collect();

    for comment in comments {
        if let Some(&i) = index.get(&comment.character_id) {
            characters[i].add_comment(comment);
        }
    }
}
