use axum::{extract::State, http::StatusCode, Json};
use models::movie::{Model as Movie, MovieInput};
use tracing::{debug, info};

use crate::{errors::JsonApiError, extract::{ApiJson, ApiPath}, state::AppState};

#[utoipa::path(
    get, path = "/movies", tag = "movies",
    responses(
        (status = 200, description = "All movies", body = [crate::openapi::MovieDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, JsonApiError> {
    let movies = state.movies.get_all_movies().await?;
    debug!(count = movies.len(), "list movies");
    Ok(Json(movies))
}

#[utoipa::path(
    post, path = "/movies", tag = "movies",
    request_body = crate::openapi::MovieInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MovieDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Invalid Request Body", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MovieInput>,
) -> Result<(StatusCode, Json<Movie>), JsonApiError> {
    let m = state.movies.save(input).await?;
    info!(id = m.id, name = %m.name, "created movie");
    Ok((StatusCode::CREATED, Json(m)))
}

#[utoipa::path(
    get, path = "/movies/{id}", tag = "movies",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MovieDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<Json<Movie>, JsonApiError> {
    let m = state.movies.get_movie_by_id(id).await?;
    Ok(Json(m))
}

#[utoipa::path(
    put, path = "/movies/{id}", tag = "movies",
    params(("id" = i64, Path, description = "Movie ID")),
    request_body = crate::openapi::MovieInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MovieDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(input): ApiJson<MovieInput>,
) -> Result<Json<Movie>, JsonApiError> {
    let m = state.movies.update_movie(input, id).await?;
    info!(id = m.id, "updated movie");
    Ok(Json(m))
}

#[utoipa::path(
    delete, path = "/movies/{id}", tag = "movies",
    params(("id" = i64, Path, description = "Movie ID")),
    responses(
        (status = 204, description = "Deleted, or already absent"),
        (status = 500, description = "Delete Failed", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i64>) -> Result<StatusCode, JsonApiError> {
    state.movies.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
