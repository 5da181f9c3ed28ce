use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogDto {
    pub id: i32,
    pub user_id: i32,
    pub city_id: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
}

/// Body of `POST /api/logs`.
///
/// The creation time is always assigned by the server; a `createdAt` sent by the
/// client is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateLogDto {
    pub user_id: i32,
    pub city_id: i32,
    pub comment: String,
}

/// Body of `PUT /api/logs/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLogDto {
    pub user_id: i32,
    pub city_id: i32,
    pub comment: String,
}
