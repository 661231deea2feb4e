//! Handler for the `/comment` resource.

use axum::extract::State;
use axum::{Form, Json};
use serde::Deserialize;
use tavern_core::types::DbId;
use tavern_db::models::comment::CreateComment;
use tavern_db::repositories::CharacterRepo;

use crate::error::AppResult;
use crate::response::CharacterView;
use crate::state::AppState;

/// Form fields for `POST /comment`.
#[derive(Debug, Deserialize)]
pub struct AddCommentForm {
    /// Id of the character receiving the comment.
    pub personagem_id: DbId,
    /// Comment body.
    pub texto: String,
}

/// POST /comment
///
/// Returns the updated character, including the new comment.
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddCommentForm>,
) -> AppResult<Json<CharacterView>> {
    let input = CreateComment::new(form.texto);
    input.validate()?;
    tracing::debug!(character_id = form.personagem_id, "Adding comment");

    let character = CharacterRepo::add_comment(&state.pool, form.personagem_id, &input)
        .await
        .inspect_err(|err| {
            tracing::warn!(
                character_id = form.personagem_id,
                error = %err,
                "Failed to add comment"
            )
        })?;

    Ok(Json(CharacterView::from(&character)))
}
