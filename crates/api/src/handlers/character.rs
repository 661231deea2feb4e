//! Handlers for the `/character` and `/characters` resources.
//!
//! Inputs arrive as form fields (create) or query parameters (get, delete).
//! Every handler delegates to [`CharacterRepo`] and maps the result through
//! the response views.

use axum::extract::{Query, State};
use axum::{Form, Json};
use serde::Deserialize;
use tavern_core::character::decode_name_param;
use tavern_core::types::DbId;
use tavern_db::models::character::CreateCharacter;
use tavern_db::repositories::CharacterRepo;
use tavern_db::RepoError;

use crate::error::{AppError, AppResult};
use crate::response::{CharacterListing, CharacterView, DeletionConfirmation};
use crate::state::AppState;

/// Message returned when a create fails for a reason other than a taken name.
pub const SAVE_FAILED_MESSAGE: &str = "Could not save new character";

/// Form fields accepted by `POST /character`.
///
/// The creation timestamp is always assigned by the server.
#[derive(Debug, Deserialize)]
pub struct CreateCharacterForm {
    pub name: String,
    pub level: i32,
    pub money: f64,
}

/// Query parameters for `GET /character`.
#[derive(Debug, Deserialize)]
pub struct CharacterIdQuery {
    pub id: DbId,
}

/// Query parameters for `DELETE /character`.
#[derive(Debug, Deserialize)]
pub struct CharacterNameQuery {
    pub name: String,
}

/// POST /character
///
/// A taken name maps to 409; any other storage failure maps to 400.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateCharacterForm>,
) -> AppResult<Json<CharacterView>> {
    let input = CreateCharacter::new(form.name, form.level, form.money);
    input.validate()?;
    tracing::debug!(name = %input.name, "Adding character");

    let character = CharacterRepo::create(&state.pool, &input)
        .await
        .map_err(|err| {
            tracing::warn!(name = %input.name, error = %err, "Failed to add character");
            match err {
                RepoError::Storage(_) => AppError::BadRequest(SAVE_FAILED_MESSAGE.to_string()),
                other => AppError::Repo(other),
            }
        })?;

    Ok(Json(CharacterView::from(&character)))
}

/// GET /characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CharacterListing>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    tracing::debug!(count = characters.len(), "Characters found");
    Ok(Json(CharacterListing::from(characters.as_slice())))
}

/// GET /character?id={id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<CharacterIdQuery>,
) -> AppResult<Json<CharacterView>> {
    let character = CharacterRepo::find_by_id(&state.pool, query.id)
        .await
        .inspect_err(|err| tracing::warn!(id = query.id, error = %err, "Failed to fetch character"))?;
    Ok(Json(CharacterView::from(&character)))
}

/// DELETE /character?name={name}
///
/// The name arrives percent-encoded twice on top of normal query encoding.
pub async fn delete_by_name(
    State(state): State<AppState>,
    Query(query): Query<CharacterNameQuery>,
) -> AppResult<Json<DeletionConfirmation>> {
    let name = decode_name_param(&query.name);
    tracing::debug!(%name, "Deleting character");

    let deleted = CharacterRepo::delete_by_name(&state.pool, &name)
        .await
        .inspect_err(|err| tracing::warn!(%name, error = %err, "Failed to delete character"))?;

    Ok(Json(DeletionConfirmation::from(deleted)))
}
