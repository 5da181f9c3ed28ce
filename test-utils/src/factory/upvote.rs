//! Upvote factory for creating test upvote entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an upvote for the given recommendation.
///
/// The recommendation is not required to exist.
pub async fn create_upvote(
    db: &DatabaseConnection,
    recommendation_id: i32,
) -> Result<entity::upvote::Model, DbErr> {
    entity::upvote::ActiveModel {
        recommendation_id: ActiveValue::Set(recommendation_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
