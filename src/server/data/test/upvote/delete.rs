use super::*;

/// Tests deleting an upvote twice.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let upvote = factory::create_upvote(db, 1).await?;

    let repo = UpvoteRepository::new(db);

    assert!(repo.delete(upvote.id).await?);
    assert!(!repo.delete(upvote.id).await?);

    Ok(())
}
