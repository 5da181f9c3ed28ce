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
        log::{CreateLogDto, LogDto, UpdateLogDto},
    },
    server::{
        error::AppError,
        model::log::{CreateLogParams, UpdateLogParams},
        service::log::LogService,
        state::AppState,
    },
};

/// Tag for grouping log endpoints in OpenAPI documentation
pub static LOG_TAG: &str = "log";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_log))
        .routes(routes!(get_log, update_log, delete_log))
}

#[utoipa::path(
    get,
    path = "/api/logs/{id}",
    tag = LOG_TAG,
    params(("id" = i32, Path, description = "Log id")),
    responses(
        (status = 200, description = "Log", body = LogDto),
        (status = 404, description = "Log not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogService::new(&state.db);

    let log = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Log {} not found", id)))?;

    Ok((StatusCode::OK, Json(log.into_dto())))
}

/// Record a visit.
///
/// The log's `createdAt` is always the server's current time; any timestamp sent by
/// the client is ignored. The referenced user and city are not checked.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User id, city id and comment
///
/// # Returns
/// - `201 Created` - Created log, with `Location` pointing at `/api/logs/{id}`
/// - `400 Bad Request` - Empty comment
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/logs",
    tag = LOG_TAG,
    request_body = CreateLogDto,
    responses(
        (status = 201, description = "Log created", body = LogDto),
        (status = 400, description = "Empty comment", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_log(
    State(state): State<AppState>,
    Json(payload): Json<CreateLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogService::new(&state.db);

    let params = CreateLogParams::from_dto(payload)?;

    let log = service.create(params).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/logs/{}", log.id))],
        Json(log.into_dto()),
    ))
}

/// Overwrite a log's user, city and comment. `createdAt` is left untouched.
#[utoipa::path(
    put,
    path = "/api/logs/{id}",
    tag = LOG_TAG,
    params(("id" = i32, Path, description = "Log id")),
    request_body = UpdateLogDto,
    responses(
        (status = 204, description = "Log updated"),
        (status = 400, description = "Empty comment", body = ErrorDto),
        (status = 404, description = "Log not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateLogDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogService::new(&state.db);

    let params = UpdateLogParams::from_dto(id, payload)?;

    if !service.update(params).await? {
        return Err(AppError::NotFound(format!("Log {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/logs/{id}",
    tag = LOG_TAG,
    params(("id" = i32, Path, description = "Log id")),
    responses(
        (status = 204, description = "Log deleted"),
        (status = 404, description = "Log not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = LogService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("Log {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
