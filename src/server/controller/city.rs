use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{api::ErrorDto, city::CityDto, log::LogDto, user::UserDto},
    server::{error::AppError, service::city::CityService, state::AppState},
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_cities))
        .routes(routes!(get_city))
        .routes(routes!(get_city_logs))
        .routes(routes!(get_city_recommendations))
        .routes(routes!(get_city_users))
}

/// List all cities.
///
/// Returns every city with only its id, name and details.
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "All cities", body = Vec<CityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let cities = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(cities.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a city with everything known about it.
///
/// Attaches the city's recommendations (with upvote totals), its logs, and the users
/// who logged a visit there. Users are listed once each, in order of their first log.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - City id
///
/// # Returns
/// - `200 OK` - City with recommendations, logs and users
/// - `404 Not Found` - No city with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "City with recommendations, logs and users", body = CityDto),
        (status = 404, description = "City not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let detail = service
        .get_detail(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("City {} not found", id)))?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// List a city's logs, each carrying the city's name.
#[utoipa::path(
    get,
    path = "/api/cities/{id}/logs",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "Logs for the city", body = Vec<LogDto>),
        (status = 404, description = "City not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_logs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let (city, logs) = service
        .get_logs(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("City {} not found", id)))?;

    let logs: Vec<LogDto> = logs
        .into_iter()
        .map(|log| log.into_dto_with_city_name(city.name.clone()))
        .collect();

    Ok((StatusCode::OK, Json(logs)))
}

/// Get a city with its recommendations. Upvote totals are not computed here.
#[utoipa::path(
    get,
    path = "/api/cities/{id}/recommendations",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "City with its recommendations", body = CityDto),
        (status = 404, description = "City not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_recommendations(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let city = service
        .get_recommendations(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("City {} not found", id)))?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}

/// List the users currently in a city.
///
/// A user is in a city when their most recent log, across all of their logs, was
/// written there. An unknown city simply has nobody in it.
///
/// # Returns
/// - `200 OK` - Users ordered by id, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/cities/{id}/users",
    tag = CITY_TAG,
    params(("id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "Users whose latest log is in the city", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_users(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CityService::new(&state.db);

    let users = service.get_current_visitors(id).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}
