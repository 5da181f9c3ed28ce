use super::*;

/// Tests fetching a batch of users, skipping ids that do not exist.
///
/// Expected: Ok with existing users ordered by id
#[tokio::test]
async fn returns_existing_users_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[b.id, 999, a.id]).await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}

/// Tests that an empty id list short-circuits to an empty result.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
