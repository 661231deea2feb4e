use tavern_core::types::DbId;

/// Failures surfaced by repository operations.
///
/// Raw `sqlx` errors never leave the repository layer untyped: unique
/// violations on a character name become [`RepoError::DuplicateName`], and
/// everything else is wrapped in [`RepoError::Storage`].
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Character with name '{0}' already exists")]
    DuplicateName(String),

    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl RepoError {
    pub(crate) fn character_id_not_found(id: DbId) -> Self {
        Self::NotFound {
            entity: "Character",
            key: format!("id {id}"),
        }
    }

    pub(crate) fn character_name_not_found(name: &str) -> Self {
        Self::NotFound {
            entity: "Character",
            key: format!("name '{name}'"),
        }
    }

    /// Classify an error raised while inserting a character named `name`.
    pub(crate) fn from_character_insert(err: sqlx::Error, name: &str) -> Self {
        let duplicate =
            matches!(&err, sqlx::Error::Database(db_err) if db_err.is_unique_violation());
        if duplicate {
            Self::DuplicateName(name.to_string())
        } else {
            Self::Storage(err)
        }
    }

    /// Classify an error raised while inserting a comment for `character_id`.
    ///
    /// The only foreign key on `comments` points at `characters`, so a
    /// violation means the owner does not exist.
    pub(crate) fn from_comment_insert(err: sqlx::Error, character_id: DbId) -> Self {
        let missing_owner =
            matches!(&err, sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation());
        if missing_owner {
            Self::character_id_not_found(character_id)
        } else {
            Self::Storage(err)
        }
    }
}
