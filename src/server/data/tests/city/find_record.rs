use super::*;

/// Expect Ok(None) when the city does not exist
#[tokio::test]
async fn returns_none_for_unknown_city() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;

    let repo = CityRepository::new(&test.db);
    let result = repo.find_record("AT001C").await?;

    assert!(result.is_none());

    Ok(())
}

/// Expect Ok with every sub-record empty when only the city exists
#[tokio::test]
async fn returns_city_without_sub_records() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", Some("Austria"))
        .build()
        .await?;

    let repo = CityRepository::new(&test.db);
    let record = repo.find_record("AT001C").await?.expect("city not found");

    assert_eq!(record.city.eurostat_code, "AT001C");
    assert_eq!(record.city.english_country.as_deref(), Some("Austria"));
    assert!(record.climate.is_none());
    assert!(record.cost_of_living.is_none());
    assert!(record.guide.is_none());
    assert!(record.housing.is_none());
    assert!(record.metrics.is_none());
    assert!(record.transport_budget.is_none());
    assert!(record.universities.is_empty());

    Ok(())
}

/// Expect Ok with sub-records and universities of the requested city only
#[tokio::test]
async fn loads_sub_records_of_requested_city() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .with_mock_city("BE001C", None)
        .build()
        .await?;
    test.city()
        .insert_housing(factory::mock_housing("AT001C", Some(10.0), Some(20.0), Some(0.5)))
        .await?;
    test.city()
        .insert_metrics(factory::mock_metrics("BE001C", Some(120.0), None))
        .await?;
    test.city()
        .insert_guide(factory::mock_guide("AT001C", "Coffee houses."))
        .await?;
    test.city()
        .insert_university(factory::mock_university("A WIEN01", "AT001C", Some(4)))
        .await?;
    test.city()
        .insert_university(factory::mock_university("A WIEN02", "AT001C", None))
        .await?;
    test.city()
        .insert_university(factory::mock_university("B BRUXEL01", "BE001C", Some(5)))
        .await?;

    let repo = CityRepository::new(&test.db);
    let record = repo.find_record("AT001C").await?.expect("city not found");

    assert_eq!(
        record.housing.as_ref().and_then(|h| h.rent_per_sqm),
        Some(10.0)
    );
    assert!(record.metrics.is_none());
    assert_eq!(
        record.guide.and_then(|g| g.text).as_deref(),
        Some("Coffee houses.")
    );
    assert_eq!(record.universities.len(), 2);
    assert!(record
        .universities
        .iter()
        .all(|u| u.eurostat_code == "AT001C"));

    Ok(())
}
