//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a city, then logs a visit of that user to that city.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, city, log))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_visit(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::city::Model,
        entity::log::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let city = crate::factory::city::create_city(db).await?;
    let log = crate::factory::log::create_log(db, user.id, city.id).await?;

    Ok((user, city, log))
}
