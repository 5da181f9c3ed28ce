use super::*;

/// Tests listing a city's recommendations.
///
/// Expected: Ok with only that city's recommendations ordered by id
#[tokio::test]
async fn returns_only_recommendations_for_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_recommendation(db, 1, 4).await?;
    factory::create_recommendation(db, 2, 1).await?;
    let b = factory::create_recommendation(db, 3, 4).await?;

    let repo = RecommendationRepository::new(db);
    let recommendations = repo.get_by_city_id(4).await?;

    let ids: Vec<i32> = recommendations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}
