//! Reference data seeding.
//!
//! A fresh schema is populated with a fixed set of users, cities, logs, recommendations
//! and upvotes. Seeding is gated on the cities table being empty: cities cannot be deleted
//! through the API, so an empty cities table only occurs on a schema that was never seeded.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveValue, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    EntityTrait, PaginatorTrait, TransactionTrait,
};

const USERS: [(i32, &str, &str, &str, &str); 4] = [
    (
        1,
        "Jamie Chen",
        "jamie.chen@example.com",
        "https://example.com/images/jamie.jpg",
        "World traveler and foodie.",
    ),
    (
        2,
        "Carlos Diaz",
        "carlos.diaz@example.com",
        "https://example.com/images/carlos.jpg",
        "Adventure seeker and nature lover.",
    ),
    (
        3,
        "Ava Singh",
        "ava.singh@example.com",
        "https://example.com/images/ava.jpg",
        "Photographer capturing the world's beauty.",
    ),
    (
        4,
        "Liam Patel",
        "liam.patel@example.com",
        "https://example.com/images/liam.jpg",
        "Explorer of hidden gems and local cuisines.",
    ),
];

const CITIES: [(i32, &str, &str); 4] = [
    (
        1,
        "Tokyo",
        "A bustling metropolis blending tradition and technology.",
    ),
    (
        2,
        "Barcelona",
        "Known for its art, architecture, and vibrant street life.",
    ),
    (3, "Cape Town", "A city with scenic beauty and diverse culture."),
    (
        4,
        "Vancouver",
        "Surrounded by mountains and ocean, perfect for outdoor lovers.",
    ),
];

/// (id, user_id, city_id, comment, (year, month, day))
const LOGS: [(i32, i32, i32, &str, (i32, u32, u32)); 5] = [
    (
        1,
        1,
        1,
        "Tokyo was incredible! Loved the food and the culture.",
        (2025, 4, 10),
    ),
    (
        2,
        2,
        2,
        "Barcelona's Gothic Quarter is a must-see!",
        (2025, 4, 15),
    ),
    (
        3,
        3,
        3,
        "Cape Town's Table Mountain view is breathtaking!",
        (2025, 5, 1),
    ),
    (
        4,
        4,
        4,
        "Vancouver's seafood and hiking trails are unbeatable.",
        (2025, 5, 3),
    ),
    (
        5,
        1,
        3,
        "I loved the cultural diversity of Cape Town.",
        (2025, 5, 7),
    ),
];

/// (id, user_id, city_id)
const RECOMMENDATIONS: [(i32, i32, i32); 5] = [(1, 1, 2), (2, 2, 1), (3, 3, 4), (4, 4, 3), (5, 2, 4)];

/// (id, recommendation_id)
const UPVOTES: [(i32, i32); 5] = [(1, 1), (2, 2), (3, 3), (4, 1), (5, 5)];

/// Tables whose id sequences must be advanced past the seeded ids on PostgreSQL.
const SEEDED_TABLES: [&str; 5] = ["users", "cities", "logs", "recommendations", "upvotes"];

pub struct SeedRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the reference data if the schema has never been seeded.
    ///
    /// All rows are inserted in one transaction with fixed ids. On PostgreSQL the id
    /// sequences are then moved past the seeded ids so later inserts get fresh ids.
    ///
    /// # Returns
    /// - `Ok(true)` - The cities table was empty and the reference data was inserted
    /// - `Ok(false)` - Cities already exist; nothing was inserted
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn seed_if_empty(&self) -> Result<bool, DbErr> {
        let city_count = entity::prelude::City::find().count(self.db).await?;
        if city_count > 0 {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        insert_reference_data(&txn).await?;

        if txn.get_database_backend() == DbBackend::Postgres {
            for table in SEEDED_TABLES {
                txn.execute_unprepared(&format!(
                    "SELECT setval(pg_get_serial_sequence('{table}', 'id'), \
                     COALESCE((SELECT MAX(id) FROM {table}), 1))"
                ))
                .await?;
            }
        }

        txn.commit().await?;

        Ok(true)
    }
}

async fn insert_reference_data(txn: &DatabaseTransaction) -> Result<(), DbErr> {
    entity::prelude::User::insert_many(USERS.iter().map(
        |&(id, name, email, image_url, description)| entity::user::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            image_url: ActiveValue::Set(image_url.to_string()),
            description: ActiveValue::Set(description.to_string()),
        },
    ))
    .exec(txn)
    .await?;

    entity::prelude::City::insert_many(CITIES.iter().map(|&(id, name, details)| {
        entity::city::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(name.to_string()),
            details: ActiveValue::Set(details.to_string()),
        }
    }))
    .exec(txn)
    .await?;

    let mut logs = Vec::with_capacity(LOGS.len());
    for &(id, user_id, city_id, comment, (year, month, day)) in LOGS.iter() {
        logs.push(entity::log::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id),
            city_id: ActiveValue::Set(city_id),
            comment: ActiveValue::Set(comment.to_string()),
            created_at: ActiveValue::Set(midnight_utc(year, month, day)?),
        });
    }
    entity::prelude::Log::insert_many(logs).exec(txn).await?;

    entity::prelude::Recommendation::insert_many(RECOMMENDATIONS.iter().map(
        |&(id, user_id, city_id)| entity::recommendation::ActiveModel {
            id: ActiveValue::Set(id),
            user_id: ActiveValue::Set(user_id),
            city_id: ActiveValue::Set(city_id),
        },
    ))
    .exec(txn)
    .await?;

    entity::prelude::Upvote::insert_many(UPVOTES.iter().map(|&(id, recommendation_id)| {
        entity::upvote::ActiveModel {
            id: ActiveValue::Set(id),
            recommendation_id: ActiveValue::Set(recommendation_id),
        }
    }))
    .exec(txn)
    .await?;

    Ok(())
}

fn midnight_utc(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, DbErr> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DbErr::Custom(format!("Invalid seed date {year}-{month}-{day}")))
}
