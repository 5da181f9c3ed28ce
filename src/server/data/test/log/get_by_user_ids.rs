use super::*;

/// Tests fetching every log written by a set of users.
///
/// Expected: Ok with logs of the requested users only
#[tokio::test]
async fn returns_logs_for_all_requested_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ava = factory::create_user(db).await?;
    let liam = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;

    factory::create_log(db, ava.id, city.id).await?;
    factory::create_log(db, liam.id, city.id).await?;
    factory::create_log(db, liam.id, city.id).await?;
    factory::create_log(db, outsider.id, city.id).await?;

    let repo = LogRepository::new(db);
    let logs = repo.get_by_user_ids(&[ava.id, liam.id]).await?;

    assert_eq!(logs.len(), 3);
    assert!(logs.iter().all(|l| l.user_id != outsider.id));

    Ok(())
}

/// Tests that an empty id list returns no logs.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_visit(db).await?;

    let repo = LogRepository::new(db);
    let logs = repo.get_by_user_ids(&[]).await?;

    assert!(logs.is_empty());

    Ok(())
}
