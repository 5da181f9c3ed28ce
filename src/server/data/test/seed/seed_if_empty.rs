use super::*;

/// Tests seeding a fresh schema.
///
/// Verifies the row counts of every table and a sample of the reference values.
///
/// Expected: Ok(true) with 4 users, 4 cities, 5 logs, 5 recommendations, 5 upvotes
#[tokio::test]
async fn seeds_empty_schema() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeedRepository::new(db);
    let seeded = repo.seed_if_empty().await?;

    assert!(seeded);
    assert_eq!(entity::prelude::User::find().count(db).await?, 4);
    assert_eq!(entity::prelude::City::find().count(db).await?, 4);
    assert_eq!(entity::prelude::Log::find().count(db).await?, 5);
    assert_eq!(entity::prelude::Recommendation::find().count(db).await?, 5);
    assert_eq!(entity::prelude::Upvote::find().count(db).await?, 5);

    let tokyo = entity::prelude::City::find_by_id(1).one(db).await?.unwrap();
    assert_eq!(tokyo.name, "Tokyo");

    let log = entity::prelude::Log::find_by_id(5).one(db).await?.unwrap();
    assert_eq!(log.user_id, 1);
    assert_eq!(log.city_id, 3);
    assert_eq!(log.created_at.to_rfc3339(), "2025-05-07T00:00:00+00:00");

    Ok(())
}

/// Tests that seeding twice inserts nothing the second time.
///
/// Expected: Ok(false) on the second call with counts unchanged
#[tokio::test]
async fn second_seed_is_a_no_op() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SeedRepository::new(db);

    assert!(repo.seed_if_empty().await?);
    assert!(!repo.seed_if_empty().await?);

    assert_eq!(entity::prelude::User::find().count(db).await?, 4);
    assert_eq!(entity::prelude::Upvote::find().count(db).await?, 5);

    Ok(())
}

/// Tests that an existing city suppresses seeding entirely.
///
/// Expected: Ok(false) and no users inserted
#[tokio::test]
async fn skips_when_cities_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_city(db).await?;

    let repo = SeedRepository::new(db);

    assert!(!repo.seed_if_empty().await?);
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests that rows created after seeding get ids past the seeded ones.
///
/// Expected: new user id greater than 4
#[tokio::test]
async fn later_inserts_follow_seeded_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SeedRepository::new(db).seed_if_empty().await?;

    let user = factory::create_user(db).await?;

    assert!(user.id > 4);

    Ok(())
}
