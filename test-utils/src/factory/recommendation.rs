//! Recommendation factory for creating test recommendation entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a recommendation by the given user for the given city.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Id of the recommending user
/// - `city_id` - Id of the recommended city
///
/// # Returns
/// - `Ok(entity::recommendation::Model)` - Created recommendation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_recommendation(
    db: &DatabaseConnection,
    user_id: i32,
    city_id: i32,
) -> Result<entity::recommendation::Model, DbErr> {
    entity::recommendation::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        city_id: ActiveValue::Set(city_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
