//! City domain models.
//!
//! Cities are seeded reference data: there are no create, update or delete operations,
//! only read views of differing depth.

use crate::{
    model::city::CityDto,
    server::model::{log::Log, recommendation::Recommendation, user::User},
};

/// A city without any related rows.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: i32,
    pub name: String,
    pub details: String,
}

impl City {
    /// Converts an entity model to a city domain model at the repository boundary.
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            details: entity.details,
        }
    }

    /// Converts the city to its minimal DTO with no related collections attached.
    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            name: self.name,
            details: self.details,
            recommendations: None,
            logs: None,
            users: None,
        }
    }
}

/// A city with its recommendations, visit logs and the distinct users who logged visits.
///
/// Recommendations carry upvote totals. `users` is deduplicated by id in order of each
/// user's first log.
#[derive(Debug, Clone, PartialEq)]
pub struct CityDetail {
    pub city: City,
    pub recommendations: Vec<Recommendation>,
    pub logs: Vec<Log>,
    pub users: Vec<User>,
}

impl CityDetail {
    pub fn into_dto(self) -> CityDto {
        CityDto {
            recommendations: Some(
                self.recommendations
                    .into_iter()
                    .map(Recommendation::into_dto)
                    .collect(),
            ),
            logs: Some(self.logs.into_iter().map(Log::into_dto).collect()),
            users: Some(self.users.into_iter().map(User::into_dto).collect()),
            ..self.city.into_dto()
        }
    }
}

/// A city with its recommendations, without upvote totals.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecommendations {
    pub city: City,
    pub recommendations: Vec<Recommendation>,
}

impl CityRecommendations {
    pub fn into_dto(self) -> CityDto {
        CityDto {
            recommendations: Some(
                self.recommendations
                    .into_iter()
                    .map(Recommendation::into_dto)
                    .collect(),
            ),
            ..self.city.into_dto()
        }
    }
}
