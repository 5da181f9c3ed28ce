use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{log::LogDto, recommendation::RecommendationDto, user::UserDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<RecommendationDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<Vec<LogDto>>,
    /// Distinct users who logged a visit, in order of their first log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserDto>>,
}
