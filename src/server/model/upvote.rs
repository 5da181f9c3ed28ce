use crate::model::upvote::{CreateUpvoteDto, UpvoteDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Upvote {
    pub id: i32,
    pub recommendation_id: i32,
}

impl Upvote {
    pub fn from_entity(entity: entity::upvote::Model) -> Self {
        Self {
            id: entity.id,
            recommendation_id: entity.recommendation_id,
        }
    }

    pub fn into_dto(self) -> UpvoteDto {
        UpvoteDto {
            id: self.id,
            recommendation_id: self.recommendation_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateUpvoteParams {
    pub recommendation_id: i32,
}

impl From<CreateUpvoteDto> for CreateUpvoteParams {
    fn from(dto: CreateUpvoteDto) -> Self {
        Self {
            recommendation_id: dto.recommendation_id,
        }
    }
}
