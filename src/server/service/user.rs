use sea_orm::DatabaseConnection;

use crate::server::{
    data::{log::LogRepository, recommendation::RecommendationRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User, UserProfile},
    service::recommendation::RecommendationService,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user with their logs and their recommendations (with upvote totals)
    pub async fn get_profile(&self, id: i32) -> Result<Option<UserProfile>, AppError> {
        let Some(mut profile) = self.get_with_logs(id).await? else {
            return Ok(None);
        };

        let recommendations = RecommendationRepository::new(self.db)
            .get_by_user_id(id)
            .await?;
        let recommendations = RecommendationService::new(self.db)
            .with_upvote_totals(recommendations)
            .await?;

        profile.recommendations = Some(recommendations);

        Ok(Some(profile))
    }

    /// Gets a user with their logs only
    pub async fn get_with_logs(&self, id: i32) -> Result<Option<UserProfile>, AppError> {
        let Some(user) = UserRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let logs = LogRepository::new(self.db).get_by_user_id(id).await?;

        Ok(Some(UserProfile {
            user,
            logs,
            recommendations: None,
        }))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_email(email).await?)
    }

    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let user = repo.create(params).await?;

        tracing::info!("Created user {} ({})", user.id, user.name);

        Ok(user)
    }

    /// Overwrites a user's profile fields
    /// Returns false if the user doesn't exist
    pub async fn update(&self, params: UpdateUserParams) -> Result<bool, AppError> {
        let repo = UserRepository::new(self.db);

        Ok(repo.update(params).await?)
    }
}
