//! Repository for the `comments` table.

use chrono::Utc;
use sqlx::SqliteConnection;
use tavern_core::types::DbId;

use crate::models::comment::{Comment, CreateComment};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, character_id, text, created_at";

/// Connection-level helpers for comments.
///
/// Comments are only ever written through [`crate::repositories::CharacterRepo`],
/// which owns the transaction.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment for `character_id`, returning the created row.
    ///
    /// If `created_at` is `None`, defaults to the current time.
    pub async fn insert(
        conn: &mut SqliteConnection,
        character_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (character_id, text, created_at)
             VALUES (?1, ?2, ?3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(character_id)
            .bind(&input.text)
            .bind(input.created_at.unwrap_or_else(Utc::now))
            .fetch_one(&mut *conn)
            .await
    }

    /// List a character's comments in insertion order.
    pub async fn list_by_character(
        conn: &mut SqliteConnection,
        character_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM comments WHERE character_id = ?1 ORDER BY id ASC");
        sqlx::query_as::<_, Comment>(&query)
            .bind(character_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// List every comment in insertion order.
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY id ASC");
        sqlx::query_as::<_, Comment>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Delete the comments of every character named `name`.
    ///
    /// Returns the number of rows removed.
    pub async fn delete_by_character_name(
        conn: &mut SqliteConnection,
        name: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM comments
             WHERE character_id IN (SELECT id FROM characters WHERE name = ?1)",
        )
        .bind(name)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Count the comments attached to a character.
    pub async fn count_by_character(pool: &DbPool, character_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE character_id = ?1")
            .bind(character_id)
            .fetch_one(pool)
            .await
    }

    /// Count every comment in the store.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments")
            .fetch_one(pool)
            .await
    }
}
