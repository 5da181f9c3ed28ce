//! City views joining logs, users and recommendations.
//!
//! Joins are resolved here by id lookups across repositories; the stored rows never
//! reference each other directly.

use std::collections::{HashMap, HashSet};

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        city::CityRepository, log::LogRepository, recommendation::RecommendationRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        city::{City, CityDetail, CityRecommendations},
        log::Log,
        user::User,
    },
    service::recommendation::RecommendationService,
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<City>, AppError> {
        let repo = CityRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a city with its recommendations (with upvote totals), its logs, and the
    /// distinct users who logged a visit there.
    ///
    /// # Returns
    /// - `Ok(Some(CityDetail))` - City found
    /// - `Ok(None)` - No city with that id
    /// - `Err(AppError)` - Database error
    pub async fn get_detail(&self, id: i32) -> Result<Option<CityDetail>, AppError> {
        let Some(city) = CityRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let recommendations = RecommendationRepository::new(self.db)
            .get_by_city_id(id)
            .await?;
        let recommendations = RecommendationService::new(self.db)
            .with_upvote_totals(recommendations)
            .await?;

        let logs = LogRepository::new(self.db).get_by_city_id(id).await?;

        let user_ids = distinct_user_ids(&logs);
        let mut users_by_id: HashMap<i32, User> = UserRepository::new(self.db)
            .get_by_ids(&user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        // Keep first-log order; logs pointing at missing users contribute nothing
        let users = user_ids
            .iter()
            .filter_map(|user_id| users_by_id.remove(user_id))
            .collect();

        Ok(Some(CityDetail {
            city,
            recommendations,
            logs,
            users,
        }))
    }

    /// Gets a city together with its logs.
    ///
    /// # Returns
    /// - `Ok(Some((City, Vec<Log>)))` - City found with its logs ordered by id
    /// - `Ok(None)` - No city with that id
    /// - `Err(AppError)` - Database error
    pub async fn get_logs(&self, id: i32) -> Result<Option<(City, Vec<Log>)>, AppError> {
        let Some(city) = CityRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let logs = LogRepository::new(self.db).get_by_city_id(id).await?;

        Ok(Some((city, logs)))
    }

    /// Gets a city together with its recommendations, without upvote totals.
    pub async fn get_recommendations(
        &self,
        id: i32,
    ) -> Result<Option<CityRecommendations>, AppError> {
        let Some(city) = CityRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        let recommendations = RecommendationRepository::new(self.db)
            .get_by_city_id(id)
            .await?;

        Ok(Some(CityRecommendations {
            city,
            recommendations,
        }))
    }

    /// Gets the users whose most recent log, across all of their logs, is in this city.
    ///
    /// The most recent log is the one with the latest `created_at`; ties go to the highest
    /// log id. Users without logs never appear. An unknown city yields an empty list.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Matching users ordered by id
    /// - `Err(AppError)` - Database error
    pub async fn get_current_visitors(&self, city_id: i32) -> Result<Vec<User>, AppError> {
        let log_repo = LogRepository::new(self.db);

        // Only users with at least one log here can have their latest log here
        let candidates = distinct_user_ids(&log_repo.get_by_city_id(city_id).await?);
        let candidate_logs = log_repo.get_by_user_ids(&candidates).await?;

        let user_ids: Vec<i32> = latest_log_by_user(&candidate_logs)
            .into_iter()
            .filter(|(_, log)| log.city_id == city_id)
            .map(|(user_id, _)| user_id)
            .collect();

        Ok(UserRepository::new(self.db).get_by_ids(&user_ids).await?)
    }
}

/// User ids of the given logs, deduplicated in order of first occurrence.
fn distinct_user_ids(logs: &[Log]) -> Vec<i32> {
    let mut seen = HashSet::new();
    logs.iter()
        .map(|log| log.user_id)
        .filter(|user_id| seen.insert(*user_id))
        .collect()
}

/// Picks each user's most recent log by `created_at`, breaking ties by highest id.
fn latest_log_by_user(logs: &[Log]) -> HashMap<i32, &Log> {
    let mut latest: HashMap<i32, &Log> = HashMap::new();
    for log in logs {
        latest
            .entry(log.user_id)
            .and_modify(|current| {
                if (log.created_at, log.id) > (current.created_at, current.id) {
                    *current = log;
                }
            })
            .or_insert(log);
    }
    latest
}
