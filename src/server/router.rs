use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        city::{self, CITY_TAG},
        log::{self, LOG_TAG},
        recommendation::{self, RECOMMENDATION_TAG},
        upvote::{self, UPVOTE_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Travel Logger API", description = "Users, cities, travel logs, recommendations and upvotes"),
    tags(
        (name = CITY_TAG, description = "Cities and who is visiting them"),
        (name = USER_TAG, description = "User profiles and email sign-in lookup"),
        (name = LOG_TAG, description = "Travel logs"),
        (name = RECOMMENDATION_TAG, description = "City recommendations"),
        (name = UPVOTE_TAG, description = "Upvotes on recommendations"),
    )
)]
struct ApiDoc;

/// Builds the API router with its OpenAPI document served at `/api-docs/openapi.json`
/// and Swagger UI at `/swagger-ui`.
///
/// Every request is traced and CORS is open to any origin, method and header.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(city::router())
        .merge(user::router())
        .merge(log::router())
        .merge(recommendation::router())
        .merge(upvote::router())
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
