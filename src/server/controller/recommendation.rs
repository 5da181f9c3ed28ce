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
        recommendation::{
            CreateRecommendationDto, RecommendationDto, UpdateRecommendationDto,
        },
    },
    server::{
        error::AppError,
        model::recommendation::{CreateRecommendationParams, UpdateRecommendationParams},
        service::recommendation::RecommendationService,
        state::AppState,
    },
};

/// Tag for grouping recommendation endpoints in OpenAPI documentation
pub static RECOMMENDATION_TAG: &str = "recommendation";

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_recommendations, create_recommendation))
        .routes(routes!(
            get_recommendation,
            update_recommendation,
            delete_recommendation
        ))
}

/// List all recommendations. Upvote totals are not computed for the list.
#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = RECOMMENDATION_TAG,
    responses(
        (status = 200, description = "All recommendations", body = Vec<RecommendationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = RecommendationService::new(&state.db);

    let recommendations = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            recommendations
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a recommendation with its upvote total.
///
/// # Returns
/// - `200 OK` - Recommendation with `upvoteTotal`
/// - `404 Not Found` - No recommendation with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/recommendations/{id}",
    tag = RECOMMENDATION_TAG,
    params(("id" = i32, Path, description = "Recommendation id")),
    responses(
        (status = 200, description = "Recommendation with upvote total", body = RecommendationDto),
        (status = 404, description = "Recommendation not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recommendation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RecommendationService::new(&state.db);

    let recommendation = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recommendation {} not found", id)))?;

    Ok((StatusCode::OK, Json(recommendation.into_dto())))
}

/// Recommend a city on behalf of a user.
///
/// The referenced user and city are not checked.
///
/// # Returns
/// - `201 Created` - Created recommendation, with `Location` pointing at
///   `/api/recommendations/{id}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/recommendations",
    tag = RECOMMENDATION_TAG,
    request_body = CreateRecommendationDto,
    responses(
        (status = 201, description = "Recommendation created", body = RecommendationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_recommendation(
    State(state): State<AppState>,
    Json(payload): Json<CreateRecommendationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RecommendationService::new(&state.db);

    let recommendation = service
        .create(CreateRecommendationParams::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        [(
            header::LOCATION,
            format!("/api/recommendations/{}", recommendation.id),
        )],
        Json(recommendation.into_dto()),
    ))
}

#[utoipa::path(
    put,
    path = "/api/recommendations/{id}",
    tag = RECOMMENDATION_TAG,
    params(("id" = i32, Path, description = "Recommendation id")),
    request_body = UpdateRecommendationDto,
    responses(
        (status = 204, description = "Recommendation updated"),
        (status = 404, description = "Recommendation not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_recommendation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRecommendationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = RecommendationService::new(&state.db);

    let params = UpdateRecommendationParams::from_dto(id, payload);

    if !service.update(params).await? {
        return Err(AppError::NotFound(format!(
            "Recommendation {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a recommendation. Its upvotes are left in place.
#[utoipa::path(
    delete,
    path = "/api/recommendations/{id}",
    tag = RECOMMENDATION_TAG,
    params(("id" = i32, Path, description = "Recommendation id")),
    responses(
        (status = 204, description = "Recommendation deleted"),
        (status = 404, description = "Recommendation not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_recommendation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = RecommendationService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(format!(
            "Recommendation {} not found",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
