use super::*;

/// Tests fetching an existing city.
///
/// Expected: Ok(Some) with the stored name and details
#[tokio::test]
async fn returns_city_when_present() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::city::CityFactory::new(db)
        .name("Cape Town")
        .details("A city with scenic beauty and diverse culture.")
        .build()
        .await?;

    let repo = CityRepository::new(db);
    let city = repo.get_by_id(created.id).await?;

    assert!(city.is_some());
    let city = city.unwrap();
    assert_eq!(city.name, "Cape Town");
    assert_eq!(city.details, "A city with scenic beauty and diverse culture.");

    Ok(())
}

/// Tests fetching a city that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_travel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CityRepository::new(db);
    let city = repo.get_by_id(42).await?;

    assert!(city.is_none());

    Ok(())
}
