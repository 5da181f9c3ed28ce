use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_user))
        .routes(routes!(get_user, update_user))
        .routes(routes!(sign_in))
        .routes(routes!(get_user_logs))
}

/// Get a user's profile.
///
/// Attaches the user's logs and recommendations. Each recommendation carries its
/// current upvote total.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - User id
///
/// # Returns
/// - `200 OK` - User with logs and recommendations
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User with logs and recommendations", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let profile = service
        .get_profile(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Look up a user by exact email match.
///
/// When several users share the email, the one with the lowest id is returned.
#[utoipa::path(
    get,
    path = "/api/users/signin/{email}",
    tag = USER_TAG,
    params(("email" = String, Path, description = "Email address to match exactly")),
    responses(
        (status = 200, description = "Matching user", body = UserDto),
        (status = 404, description = "No user with that email"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No user with email {}", email)))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Create a user.
///
/// # Returns
/// - `201 Created` - Created user, with `Location` pointing at `/api/users/{id}`
/// - `400 Bad Request` - A required field is empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = CreateUserParams::from_dto(payload)?;

    let user = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/users/{}", user.id))],
        Json(user.into_dto()),
    ))
}

/// Overwrite a user's name, email, image URL and description.
///
/// # Returns
/// - `204 No Content` - User updated
/// - `400 Bad Request` - A required field is empty
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 204, description = "User updated"),
        (status = 400, description = "A required field is empty", body = ErrorDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let params = UpdateUserParams::from_dto(id, payload)?;

    if !service.update(params).await? {
        return Err(AppError::NotFound(format!("User {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Get a user with their logs, without recommendations.
#[utoipa::path(
    get,
    path = "/api/users/{id}/logs",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User with logs", body = UserDto),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_logs(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let profile = service
        .get_with_logs(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
