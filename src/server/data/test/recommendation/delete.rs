use super::*;

/// Tests that deleting a recommendation leaves its upvotes in place.
///
/// Expected: Ok(true), recommendation gone, upvotes remain
#[tokio::test]
async fn deletes_recommendation_without_cascade() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recommendation = factory::create_recommendation(db, 1, 1).await?;
    factory::create_upvote(db, recommendation.id).await?;
    factory::create_upvote(db, recommendation.id).await?;

    let repo = RecommendationRepository::new(db);
    let deleted = repo.delete(recommendation.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Recommendation::find_by_id(recommendation.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Upvote::find().count(db).await?, 2);

    Ok(())
}

/// Tests deleting a recommendation that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_recommendation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RecommendationRepository::new(db);

    assert!(!repo.delete(3).await?);

    Ok(())
}
