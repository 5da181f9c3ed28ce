use super::*;

/// Tests creating a log with an explicit creation time.
///
/// Verifies that the repository stores the supplied timestamp rather than
/// anything derived from the params.
///
/// Expected: Ok with log persisted at the given time
#[tokio::test]
async fn creates_log_with_given_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;
    let created_at = Utc.with_ymd_and_hms(2025, 5, 7, 12, 30, 0).unwrap();

    let repo = LogRepository::new(db);
    let log = repo
        .create(
            CreateLogParams {
                user_id: user.id,
                city_id: city.id,
                comment: "I loved the cultural diversity.".to_string(),
            },
            created_at,
        )
        .await?;

    assert_eq!(log.user_id, user.id);
    assert_eq!(log.city_id, city.id);
    assert_eq!(log.comment, "I loved the cultural diversity.");
    assert_eq!(log.created_at.timestamp(), created_at.timestamp());

    let stored = entity::prelude::Log::find_by_id(log.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.created_at.timestamp(), created_at.timestamp());

    Ok(())
}

/// Tests that a log may reference a user and city that do not exist.
///
/// Expected: Ok with log persisted
#[tokio::test]
async fn accepts_unknown_user_and_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogRepository::new(db);
    let log = repo
        .create(
            CreateLogParams {
                user_id: 500,
                city_id: 600,
                comment: "Somewhere".to_string(),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(log.user_id, 500);
    assert_eq!(entity::prelude::Log::find().count(db).await?, 1);

    Ok(())
}
