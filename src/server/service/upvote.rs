use sea_orm::DatabaseConnection;

use crate::server::{
    data::{recommendation::RecommendationRepository, upvote::UpvoteRepository},
    error::AppError,
    model::upvote::{CreateUpvoteParams, Upvote},
};

pub struct UpvoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpvoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Upvote>, AppError> {
        let repo = UpvoteRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates an upvote for an existing recommendation.
    ///
    /// # Returns
    /// - `Ok(Upvote)` - The created upvote
    /// - `Err(AppError::BadRequest)` - The referenced recommendation does not exist;
    ///   nothing is inserted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUpvoteParams) -> Result<Upvote, AppError> {
        let recommendation_exists = RecommendationRepository::new(self.db)
            .exists(params.recommendation_id)
            .await?;

        if !recommendation_exists {
            return Err(AppError::BadRequest(format!(
                "Recommendation with ID {} does not exist.",
                params.recommendation_id
            )));
        }

        let upvote = UpvoteRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Upvoted recommendation {} (upvote {})",
            upvote.recommendation_id,
            upvote.id
        );

        Ok(upvote)
    }

    /// Deletes an upvote
    /// Returns false if the upvote doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = UpvoteRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted upvote {}", id);
        }

        Ok(deleted)
    }
}
