use sea_orm::DatabaseConnection;

use crate::server::{
    data::{recommendation::RecommendationRepository, upvote::UpvoteRepository},
    error::AppError,
    model::recommendation::{
        CreateRecommendationParams, Recommendation, UpdateRecommendationParams,
    },
};

pub struct RecommendationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every recommendation without upvote totals
    pub async fn get_all(&self) -> Result<Vec<Recommendation>, AppError> {
        let repo = RecommendationRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a single recommendation with its upvote total
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Recommendation>, AppError> {
        let repo = RecommendationRepository::new(self.db);

        let Some(recommendation) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let total = UpvoteRepository::new(self.db)
            .count_by_recommendation_id(recommendation.id)
            .await?;

        Ok(Some(recommendation.with_upvote_total(total)))
    }

    /// Attaches upvote totals to a batch of recommendations using one count query
    pub async fn with_upvote_totals(
        &self,
        recommendations: Vec<Recommendation>,
    ) -> Result<Vec<Recommendation>, AppError> {
        let ids: Vec<i32> = recommendations.iter().map(|r| r.id).collect();

        let counts = UpvoteRepository::new(self.db)
            .count_by_recommendation_ids(&ids)
            .await?;

        Ok(recommendations
            .into_iter()
            .map(|r| {
                let total = counts.get(&r.id).copied().unwrap_or(0);
                r.with_upvote_total(total)
            })
            .collect())
    }

    pub async fn create(
        &self,
        params: CreateRecommendationParams,
    ) -> Result<Recommendation, AppError> {
        let repo = RecommendationRepository::new(self.db);

        let recommendation = repo.create(params).await?;

        tracing::info!(
            "Created recommendation {} by user {} for city {}",
            recommendation.id,
            recommendation.user_id,
            recommendation.city_id
        );

        Ok(recommendation)
    }

    /// Overwrites a recommendation's user and city
    /// Returns false if the recommendation doesn't exist
    pub async fn update(&self, params: UpdateRecommendationParams) -> Result<bool, AppError> {
        let repo = RecommendationRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a recommendation
    /// Returns false if the recommendation doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = RecommendationRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted recommendation {}", id);
        }

        Ok(deleted)
    }
}
