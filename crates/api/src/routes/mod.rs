pub mod character;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /character                                       create (POST), get (GET), delete (DELETE)
/// /characters                                      list (GET)
/// /comment                                         add comment (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(character::router())
}
