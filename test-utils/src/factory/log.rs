//! Log factory for creating test visit log entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test logs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::log::LogFactory;
///
/// let log = LogFactory::new(&db, user.id, city.id)
///     .comment("Loved it")
///     .created_at(Utc::now() - Duration::days(3))
///     .build()
///     .await?;
/// ```
pub struct LogFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    city_id: i32,
    comment: String,
    created_at: DateTime<Utc>,
}

impl<'a> LogFactory<'a> {
    /// Creates a new LogFactory with default values.
    ///
    /// Defaults:
    /// - comment: `"Visit {n}"` where n is auto-incremented
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user who made the visit
    /// - `city_id` - Id of the visited city
    pub fn new(db: &'a DatabaseConnection, user_id: i32, city_id: i32) -> Self {
        let n = next_id();
        Self {
            db,
            user_id,
            city_id,
            comment: format!("Visit {}", n),
            created_at: Utc::now(),
        }
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the log entity into the database.
    pub async fn build(self) -> Result<entity::log::Model, DbErr> {
        entity::log::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            city_id: ActiveValue::Set(self.city_id),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a log with default values for the given user and city.
pub async fn create_log(
    db: &DatabaseConnection,
    user_id: i32,
    city_id: i32,
) -> Result<entity::log::Model, DbErr> {
    LogFactory::new(db, user_id, city_id).build().await
}

/// Creates a log with a specific creation time.
///
/// Shorthand for `LogFactory::new(db, user_id, city_id).created_at(created_at).build().await`.
pub async fn create_log_at(
    db: &DatabaseConnection,
    user_id: i32,
    city_id: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::log::Model, DbErr> {
    LogFactory::new(db, user_id, city_id)
        .created_at(created_at)
        .build()
        .await
}
