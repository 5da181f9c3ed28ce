use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub id: i32,
    pub user_id: i32,
    pub city_id: i32,
    /// Number of upvotes, present only on endpoints that count them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvote_total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendationDto {
    pub user_id: i32,
    pub city_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecommendationDto {
    pub user_id: i32,
    pub city_id: i32,
}
