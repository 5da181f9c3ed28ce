use super::*;

/// Tests overwriting a log's user, city and comment.
///
/// Verifies that the creation time is left untouched.
///
/// Expected: Ok(true) with fields replaced and created_at unchanged
#[tokio::test]
async fn overwrites_fields_and_keeps_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;
    let other_city = factory::create_city(db).await?;
    let created_at = Utc::now() - Duration::days(10);
    let log = factory::create_log_at(db, user.id, city.id, created_at).await?;

    let repo = LogRepository::new(db);
    let updated = repo
        .update(UpdateLogParams {
            id: log.id,
            user_id: user.id,
            city_id: other_city.id,
            comment: "Changed my mind".to_string(),
        })
        .await?;

    assert!(updated);

    let stored = entity::prelude::Log::find_by_id(log.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.city_id, other_city.id);
    assert_eq!(stored.comment, "Changed my mind");
    assert_eq!(stored.created_at.timestamp(), created_at.timestamp());

    Ok(())
}

/// Tests updating a log that does not exist.
///
/// Expected: Ok(false) and no rows written
#[tokio::test]
async fn returns_false_for_missing_log() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogRepository::new(db);
    let updated = repo
        .update(UpdateLogParams {
            id: 12,
            user_id: 1,
            city_id: 1,
            comment: "Nothing here".to_string(),
        })
        .await?;

    assert!(!updated);
    assert_eq!(entity::prelude::Log::find().count(db).await?, 0);

    Ok(())
}
