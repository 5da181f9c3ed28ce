use super::*;

/// Tests creating a user.
///
/// Verifies that the repository assigns an id and stores every profile field.
///
/// Expected: Ok with user persisted
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Ava Singh".to_string(),
            email: "ava.singh@example.com".to_string(),
            image_url: "https://example.com/images/ava.jpg".to_string(),
            description: "Photographer capturing the world's beauty.".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.name, "Ava Singh");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());
    let stored = stored.unwrap();
    assert_eq!(stored.email, "ava.singh@example.com");
    assert_eq!(stored.image_url, "https://example.com/images/ava.jpg");
    assert_eq!(
        stored.description,
        "Photographer capturing the world's beauty."
    );

    Ok(())
}

/// Tests that consecutive creates get distinct ids.
///
/// Expected: Ok with increasing ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = || CreateUserParams {
        name: "Liam Patel".to_string(),
        email: "liam.patel@example.com".to_string(),
        image_url: "https://example.com/images/liam.jpg".to_string(),
        description: "Explorer".to_string(),
    };

    let first = repo.create(params()).await?;
    let second = repo.create(params()).await?;

    assert!(second.id > first.id);

    Ok(())
}
