use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{log::LogDto, recommendation::RecommendationDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<RecommendationDto>>,
}

/// Body of `POST /api/users`. All fields are required and must not be blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub description: String,
}

/// Body of `PUT /api/users/{id}`. Overwrites every profile field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub description: String,
}
