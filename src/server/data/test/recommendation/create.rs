use super::*;

/// Tests creating a recommendation.
///
/// Expected: Ok with recommendation persisted and no upvote total attached
#[tokio::test]
async fn creates_recommendation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let city = factory::create_city(db).await?;

    let repo = RecommendationRepository::new(db);
    let recommendation = repo
        .create(CreateRecommendationParams {
            user_id: user.id,
            city_id: city.id,
        })
        .await?;

    assert_eq!(recommendation.user_id, user.id);
    assert_eq!(recommendation.city_id, city.id);
    assert!(recommendation.upvote_total.is_none());
    assert_eq!(entity::prelude::Recommendation::find().count(db).await?, 1);

    Ok(())
}
