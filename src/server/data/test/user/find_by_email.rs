use super::*;

/// Tests an exact email match.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_exact_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    let target = factory::user::UserFactory::new(db)
        .email("jamie.chen@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("jamie.chen@example.com").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().id, target.id);

    Ok(())
}

/// Tests that duplicate emails resolve to the lowest user id.
///
/// Expected: Ok(Some) with the first-created user
#[tokio::test]
async fn returns_lowest_id_on_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .email("shared@example.com")
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .email("shared@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("shared@example.com").await?;

    assert_eq!(user.unwrap().id, first.id);

    Ok(())
}

/// Tests that the match is exact rather than a prefix or substring match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_partial_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("carlos.diaz@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("carlos.diaz").await?;

    assert!(user.is_none());

    Ok(())
}
