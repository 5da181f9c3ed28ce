//! Upvote data repository.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::upvote::{CreateUpvoteParams, Upvote};

pub struct UpvoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpvoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an upvote. Does not check that the recommendation exists.
    pub async fn create(&self, params: CreateUpvoteParams) -> Result<Upvote, DbErr> {
        let entity = entity::upvote::ActiveModel {
            recommendation_id: ActiveValue::Set(params.recommendation_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Upvote::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Upvote>, DbErr> {
        let entity = entity::prelude::Upvote::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Upvote::from_entity))
    }

    /// Counts the upvotes referencing a single recommendation.
    pub async fn count_by_recommendation_id(&self, recommendation_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Upvote::find()
            .filter(entity::upvote::Column::RecommendationId.eq(recommendation_id))
            .count(self.db)
            .await
    }

    /// Counts upvotes for several recommendations with a single query.
    ///
    /// # Arguments
    /// - `recommendation_ids` - Recommendations to count upvotes for
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, u64>)` - Upvote count keyed by recommendation id; recommendations
    ///   without upvotes are absent from the map
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_by_recommendation_ids(
        &self,
        recommendation_ids: &[i32],
    ) -> Result<HashMap<i32, u64>, DbErr> {
        if recommendation_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let upvotes = entity::prelude::Upvote::find()
            .filter(
                entity::upvote::Column::RecommendationId.is_in(recommendation_ids.iter().copied()),
            )
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for upvote in upvotes {
            *counts.entry(upvote.recommendation_id).or_insert(0) += 1;
        }

        Ok(counts)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Upvote::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
