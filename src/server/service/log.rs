use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::log::LogRepository,
    error::AppError,
    model::log::{CreateLogParams, Log, UpdateLogParams},
};

pub struct LogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Log>, AppError> {
        let repo = LogRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a log stamped with the current server time
    pub async fn create(&self, params: CreateLogParams) -> Result<Log, AppError> {
        let repo = LogRepository::new(self.db);

        let log = repo.create(params, Utc::now()).await?;

        tracing::info!(
            "User {} logged a visit to city {} (log {})",
            log.user_id,
            log.city_id,
            log.id
        );

        Ok(log)
    }

    /// Overwrites a log's user, city and comment
    /// Returns false if the log doesn't exist
    pub async fn update(&self, params: UpdateLogParams) -> Result<bool, AppError> {
        let repo = LogRepository::new(self.db);

        Ok(repo.update(params).await?)
    }

    /// Deletes a log
    /// Returns false if the log doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = LogRepository::new(self.db);

        let deleted = repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted log {}", id);
        }

        Ok(deleted)
    }
}
