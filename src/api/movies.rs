//! Movie CRUD endpoints

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use super::{ApiError, AppState};
use crate::model::{Movie, NewMovie};

/// GET /movies
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(state.store.list_all().await?))
}

/// GET /movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, ApiError> {
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    Json(movie): Json<NewMovie>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let created = state.store.insert(movie).await?;
    info!("Created movie {} ({})", created.id, created.title);
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /movies/:id
///
/// Replaces every field; the id is kept.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(movie): Json<NewMovie>,
) -> Result<Json<Movie>, ApiError> {
    let updated = state.store.update(id, movie).await?.ok_or(ApiError::NotFound)?;
    info!("Updated movie {}", id);
    Ok(Json(updated))
}

/// DELETE /movies/:id
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete(id).await? {
        return Err(ApiError::NotFound);
    }
    info!("Deleted movie {}", id);
    Ok(StatusCode::NO_CONTENT)
}
