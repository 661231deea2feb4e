//! Route definitions for characters and their comments.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{character, comment};
use crate::state::AppState;

/// Character and comment routes, mounted at the root.
///
/// ```text
/// POST   /character               -> create        (form: name, level, money)
/// GET    /character?id=           -> get_by_id
/// DELETE /character?name=         -> delete_by_name
/// GET    /characters              -> list
/// POST   /comment                 -> add           (form: personagem_id, texto)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/character",
            get(character::get_by_id)
                .post(character::create)
                .delete(character::delete_by_name),
        )
        .route("/characters", get(character::list))
        .route("/comment", post(comment::add))
}
