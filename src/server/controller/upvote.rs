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
        upvote::{CreateUpvoteDto, UpvoteDto},
    },
    server::{
        error::AppError, model::upvote::CreateUpvoteParams, service::upvote::UpvoteService,
        state::AppState,
    },
};

/// Tag for grouping upvote endpoints in OpenAPI documentation
pub static UPVOTE_TAG: &str = "upvote";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_upvote))
        .routes(routes!(get_upvote, delete_upvote))
}

#[utoipa::path(
    get,
    path = "/api/upvotes/{id}",
    tag = UPVOTE_TAG,
    params(("id" = i32, Path, description = "Upvote id")),
    responses(
        (status = 200, description = "Upvote", body = UpvoteDto),
        (status = 404, description = "Upvote not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upvote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UpvoteService::new(&state.db);

    let upvote = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Upvote {} not found", id)))?;

    Ok((StatusCode::OK, Json(upvote.into_dto())))
}

/// Upvote a recommendation.
///
/// Unlike logs and recommendations, an upvote must reference a recommendation that
/// exists. Otherwise the request is rejected and nothing is stored.
///
/// # Returns
/// - `201 Created` - Created upvote, with `Location` pointing at `/api/upvotes/{id}`
/// - `400 Bad Request` - Referenced recommendation does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/upvotes",
    tag = UPVOTE_TAG,
    request_body = CreateUpvoteDto,
    responses(
        (status = 201, description = "Upvote created", body = UpvoteDto),
        (status = 400, description = "Recommendation does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_upvote(
    State(state): State<AppState>,
    Json(payload): Json<CreateUpvoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UpvoteService::new(&state.db);

    let upvote = service.create(CreateUpvoteParams::from(payload)).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/upvotes/{}", upvote.id))],
        Json(upvote.into_dto()),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/upvotes/{id}",
    tag = UPVOTE_TAG,
    params(("id" = i32, Path, description = "Upvote id")),
    responses(
        (status = 204, description = "Upvote deleted"),
        (status = 404, description = "Upvote not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_upvote(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UpvoteService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!("Upvote {} not found", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
