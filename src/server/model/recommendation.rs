//! Recommendation domain models and parameters.

use crate::model::recommendation::{
    CreateRecommendationDto, RecommendationDto, UpdateRecommendationDto,
};

/// A user's recommendation of a city.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub id: i32,
    pub user_id: i32,
    pub city_id: i32,
    /// Count of upvotes referencing this recommendation.
    ///
    /// `None` when the caller did not ask for totals. Always computed from the
    /// upvotes table at read time.
    pub upvote_total: Option<u64>,
}

impl Recommendation {
    /// Converts an entity model to a recommendation domain model without an upvote total.
    pub fn from_entity(entity: entity::recommendation::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            city_id: entity.city_id,
            upvote_total: None,
        }
    }

    /// Attaches a computed upvote total.
    pub fn with_upvote_total(self, upvote_total: u64) -> Self {
        Self {
            upvote_total: Some(upvote_total),
            ..self
        }
    }

    pub fn into_dto(self) -> RecommendationDto {
        RecommendationDto {
            id: self.id,
            user_id: self.user_id,
            city_id: self.city_id,
            upvote_total: self.upvote_total,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRecommendationParams {
    pub user_id: i32,
    pub city_id: i32,
}

impl From<CreateRecommendationDto> for CreateRecommendationParams {
    fn from(dto: CreateRecommendationDto) -> Self {
        Self {
            user_id: dto.user_id,
            city_id: dto.city_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRecommendationParams {
    pub id: i32,
    pub user_id: i32,
    pub city_id: i32,
}

impl UpdateRecommendationParams {
    pub fn from_dto(id: i32, dto: UpdateRecommendationDto) -> Self {
        Self {
            id,
            user_id: dto.user_id,
            city_id: dto.city_id,
        }
    }
}
