//! Visit log data repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::log::{CreateLogParams, Log, UpdateLogParams};

pub struct LogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new log stamped with the provided creation time.
    ///
    /// # Arguments
    /// - `params` - User, city and comment of the visit
    /// - `created_at` - Creation time to store
    ///
    /// # Returns
    /// - `Ok(Log)` - The created log with its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateLogParams,
        created_at: DateTime<Utc>,
    ) -> Result<Log, DbErr> {
        let entity = entity::log::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            city_id: ActiveValue::Set(params.city_id),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Log::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Log>, DbErr> {
        let entity = entity::prelude::Log::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Log::from_entity))
    }

    /// Gets all logs of a user ordered by id.
    pub async fn get_by_user_id(&self, user_id: i32) -> Result<Vec<Log>, DbErr> {
        let entities = entity::prelude::Log::find()
            .filter(entity::log::Column::UserId.eq(user_id))
            .order_by_asc(entity::log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Log::from_entity).collect())
    }

    /// Gets all logs for a city ordered by id.
    pub async fn get_by_city_id(&self, city_id: i32) -> Result<Vec<Log>, DbErr> {
        let entities = entity::prelude::Log::find()
            .filter(entity::log::Column::CityId.eq(city_id))
            .order_by_asc(entity::log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Log::from_entity).collect())
    }

    /// Gets every log written by any of the provided users, ordered by id.
    pub async fn get_by_user_ids(&self, user_ids: &[i32]) -> Result<Vec<Log>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Log::find()
            .filter(entity::log::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Log::from_entity).collect())
    }

    /// Overwrites a log's user, city and comment. The creation time is left untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - The log existed and was updated
    /// - `Ok(false)` - No log with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, params: UpdateLogParams) -> Result<bool, DbErr> {
        let result = entity::prelude::Log::update_many()
            .col_expr(entity::log::Column::UserId, Expr::value(params.user_id))
            .col_expr(entity::log::Column::CityId, Expr::value(params.city_id))
            .col_expr(entity::log::Column::Comment, Expr::value(params.comment))
            .filter(entity::log::Column::Id.eq(params.id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a log.
    ///
    /// # Returns
    /// - `Ok(true)` - The log was deleted
    /// - `Ok(false)` - No log with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Log::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
