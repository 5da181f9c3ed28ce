//! Recommendation data repository.
//!
//! Rows returned from here never carry an upvote total; totals are attached by the
//! service layer from `UpvoteRepository` counts.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::recommendation::{
    CreateRecommendationParams, Recommendation, UpdateRecommendationParams,
};

pub struct RecommendationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateRecommendationParams,
    ) -> Result<Recommendation, DbErr> {
        let entity = entity::recommendation::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            city_id: ActiveValue::Set(params.city_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Recommendation::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Recommendation>, DbErr> {
        let entities = entity::prelude::Recommendation::find()
            .order_by_asc(entity::recommendation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Recommendation::from_entity)
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Recommendation>, DbErr> {
        let entity = entity::prelude::Recommendation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Recommendation::from_entity))
    }

    /// Gets all recommendations for a city ordered by id.
    pub async fn get_by_city_id(&self, city_id: i32) -> Result<Vec<Recommendation>, DbErr> {
        let entities = entity::prelude::Recommendation::find()
            .filter(entity::recommendation::Column::CityId.eq(city_id))
            .order_by_asc(entity::recommendation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Recommendation::from_entity)
            .collect())
    }

    /// Gets all recommendations written by a user ordered by id.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Recommendation>, DbErr> {
        let entities = entity::prelude::Recommendation::find()
            .filter(entity::recommendation::Column::UserId.eq(user_id))
            .order_by_asc(entity::recommendation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(Recommendation::from_entity)
            .collect())
    }

    /// Checks whether a recommendation with the given id exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Recommendation::find()
            .filter(entity::recommendation::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Overwrites a recommendation's user and city.
    ///
    /// # Returns
    /// - `Ok(true)` - The recommendation existed and was updated
    /// - `Ok(false)` - No recommendation with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateRecommendationParams) -> Result<bool, DbErr> {
        let result = entity::prelude::Recommendation::update_many()
            .col_expr(
                entity::recommendation::Column::UserId,
                Expr::value(params.user_id),
            )
            .col_expr(
                entity::recommendation::Column::CityId,
                Expr::value(params.city_id),
            )
            .filter(entity::recommendation::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a recommendation. Upvotes referencing it are left in place.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Recommendation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
