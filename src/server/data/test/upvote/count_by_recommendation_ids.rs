use super::*;

/// Tests batched upvote counting.
///
/// Verifies that recommendations without upvotes are absent from the map rather
/// than present with zero.
///
/// Expected: Ok with counts for upvoted recommendations only
#[tokio::test]
async fn counts_upvotes_per_recommendation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let popular = factory::create_recommendation(db, 1, 1).await?;
    let single = factory::create_recommendation(db, 2, 2).await?;
    let ignored = factory::create_recommendation(db, 3, 3).await?;
    let unrequested = factory::create_recommendation(db, 4, 4).await?;

    factory::create_upvote(db, popular.id).await?;
    factory::create_upvote(db, popular.id).await?;
    factory::create_upvote(db, popular.id).await?;
    factory::create_upvote(db, single.id).await?;
    factory::create_upvote(db, unrequested.id).await?;

    let repo = UpvoteRepository::new(db);
    let counts = repo
        .count_by_recommendation_ids(&[popular.id, single.id, ignored.id])
        .await?;

    assert_eq!(counts.get(&popular.id), Some(&3));
    assert_eq!(counts.get(&single.id), Some(&1));
    assert!(!counts.contains_key(&ignored.id));
    assert!(!counts.contains_key(&unrequested.id));

    Ok(())
}

/// Tests the single-recommendation count.
///
/// Expected: Ok with the number of upvotes, zero when none
#[tokio::test]
async fn counts_upvotes_for_one_recommendation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recommendation = factory::create_recommendation(db, 1, 2).await?;
    factory::create_upvote(db, recommendation.id).await?;
    factory::create_upvote(db, recommendation.id).await?;

    let repo = UpvoteRepository::new(db);

    assert_eq!(repo.count_by_recommendation_id(recommendation.id).await?, 2);
    assert_eq!(repo.count_by_recommendation_id(999).await?, 0);

    Ok(())
}
