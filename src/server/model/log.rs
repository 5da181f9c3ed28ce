//! Visit log domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::log::{CreateLogDto, LogDto, UpdateLogDto},
    server::{error::AppError, util::validate::require_non_empty},
};

/// A user's visit to a city.
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    pub id: i32,
    pub user_id: i32,
    pub city_id: i32,
    pub comment: String,
    /// Assigned by the server when the log is created and never updated.
    pub created_at: DateTime<Utc>,
}

impl Log {
    /// Converts an entity model to a log domain model at the repository boundary.
    pub fn from_entity(entity: entity::log::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            city_id: entity.city_id,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LogDto {
        LogDto {
            id: self.id,
            user_id: self.user_id,
            city_id: self.city_id,
            comment: self.comment,
            created_at: self.created_at,
            city_name: None,
        }
    }

    /// Converts the log to a DTO carrying the name of the visited city.
    ///
    /// # Arguments
    /// - `city_name` - Name of the city the log belongs to
    pub fn into_dto_with_city_name(self, city_name: String) -> LogDto {
        LogDto {
            city_name: Some(city_name),
            ..self.into_dto()
        }
    }
}

/// Parameters for creating a log.
///
/// Carries no creation time: the repository is handed the server's clock reading
/// separately.
#[derive(Debug, Clone)]
pub struct CreateLogParams {
    pub user_id: i32,
    pub city_id: i32,
    pub comment: String,
}

impl CreateLogParams {
    /// Builds validated parameters from the request body.
    ///
    /// # Returns
    /// - `Ok(CreateLogParams)` - Parameters ready for the service layer
    /// - `Err(AppError::BadRequest)` - `comment` is blank
    pub fn from_dto(dto: CreateLogDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id: dto.user_id,
            city_id: dto.city_id,
            comment: require_non_empty("comment", dto.comment)?,
        })
    }
}

/// Parameters for overwriting a log's user, city and comment.
#[derive(Debug, Clone)]
pub struct UpdateLogParams {
    pub id: i32,
    pub user_id: i32,
    pub city_id: i32,
    pub comment: String,
}

impl UpdateLogParams {
    pub fn from_dto(id: i32, dto: UpdateLogDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            user_id: dto.user_id,
            city_id: dto.city_id,
            comment: require_non_empty("comment", dto.comment)?,
        })
    }
}
