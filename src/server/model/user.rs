//! User domain models and parameters.
//!
//! Provides the traveler profile model, the profile view with attached activity, and
//! parameter types for profile creation and overwrite.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError,
        model::{log::Log, recommendation::Recommendation},
        util::validate::require_non_empty,
    },
};

/// A traveler's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub description: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            image_url: entity.image_url,
            description: entity.description,
        }
    }

    /// Converts the user to a DTO without any attached logs or recommendations.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            image_url: self.image_url,
            description: self.description,
            logs: None,
            recommendations: None,
        }
    }
}

/// A user together with their logs and, optionally, their recommendations.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub logs: Vec<Log>,
    /// `None` when the view only covers logs.
    pub recommendations: Option<Vec<Recommendation>>,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            logs: Some(self.logs.into_iter().map(Log::into_dto).collect()),
            recommendations: self
                .recommendations
                .map(|recs| recs.into_iter().map(Recommendation::into_dto).collect()),
            ..self.user.into_dto()
        }
    }
}

/// Parameters for creating a user. Every field is required and non-blank.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub description: String,
}

impl CreateUserParams {
    /// Builds validated parameters from the request body.
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Parameters ready for the service layer
    /// - `Err(AppError::BadRequest)` - One of the fields is blank
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_empty("name", dto.name)?,
            email: require_non_empty("email", dto.email)?,
            image_url: require_non_empty("imageUrl", dto.image_url)?,
            description: require_non_empty("description", dto.description)?,
        })
    }
}

/// Parameters for overwriting every profile field of an existing user.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub description: String,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: require_non_empty("name", dto.name)?,
            email: require_non_empty("email", dto.email)?,
            image_url: require_non_empty("imageUrl", dto.image_url)?,
            description: require_non_empty("description", dto.description)?,
        })
    }
}
