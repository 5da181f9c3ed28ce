use super::*;

/// Tests overwriting a recommendation's user and city.
///
/// Expected: Ok(true) with both ids replaced
#[tokio::test]
async fn overwrites_user_and_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let recommendation = factory::create_recommendation(db, 1, 1).await?;

    let repo = RecommendationRepository::new(db);
    let updated = repo
        .update(UpdateRecommendationParams {
            id: recommendation.id,
            user_id: 2,
            city_id: 3,
        })
        .await?;

    assert!(updated);

    let stored = entity::prelude::Recommendation::find_by_id(recommendation.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.user_id, 2);
    assert_eq!(stored.city_id, 3);

    Ok(())
}

/// Tests updating a recommendation that does not exist.
///
/// Expected: Ok(false) and the table is unchanged
#[tokio::test]
async fn leaves_table_unchanged_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_recommendation(db, 1, 1).await?;

    let repo = RecommendationRepository::new(db);
    let updated = repo
        .update(UpdateRecommendationParams {
            id: existing.id + 100,
            user_id: 4,
            city_id: 4,
        })
        .await?;

    assert!(!updated);

    let all = entity::prelude::Recommendation::find().all(db).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].user_id, 1);
    assert_eq!(all[0].city_id, 1);

    Ok(())
}
