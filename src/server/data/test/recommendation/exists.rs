use super::*;

/// Tests the existence check used before accepting an upvote.
///
/// Expected: true for a stored id, false otherwise
#[tokio::test]
async fn reports_existence_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recommendation = factory::create_recommendation(db, 1, 2).await?;

    let repo = RecommendationRepository::new(db);

    assert!(repo.exists(recommendation.id).await?);
    assert!(!repo.exists(999).await?);

    Ok(())
}
