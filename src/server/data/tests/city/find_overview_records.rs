use super::*;

/// Expect Ok with an empty list when no city is stored
#[tokio::test]
async fn returns_empty_list_without_cities() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;

    let repo = CityRepository::new(&test.db);
    let records = repo.find_overview_records().await?;

    assert!(records.is_empty());

    Ok(())
}

/// Expect cities ordered by Erasmus population descending with unknown populations last
#[tokio::test]
async fn orders_by_erasmus_population() -> Result<(), TestError> {
    let mut test = test_setup_with_city_tables!()?;

    for (code, erasmus_population) in [
        ("AT001C", Some(500)),
        ("BE001C", None),
        ("DE001C", Some(9_000)),
        ("FR001C", Some(2_000)),
    ] {
        let mut city = factory::mock_city(code, None);
        city.erasmus_population = erasmus_population;
        test.city().insert_city(city).await?;
    }

    let repo = CityRepository::new(&test.db);
    let records = repo.find_overview_records().await?;

    let codes: Vec<&str> = records
        .iter()
        .map(|r| r.city.eurostat_code.as_str())
        .collect();
    assert_eq!(codes, vec!["DE001C", "FR001C", "AT001C", "BE001C"]);

    Ok(())
}

/// Expect overview sub-records attached to their own city
#[tokio::test]
async fn attaches_overview_sub_records() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .with_mock_city("BE001C", None)
        .build()
        .await?;
    test.city()
        .insert_climate(factory::mock_climate("AT001C"))
        .await?;
    test.city()
        .insert_metrics(factory::mock_metrics("BE001C", Some(130.5), Some(80.0)))
        .await?;

    let repo = CityRepository::new(&test.db);
    let records = repo.find_overview_records().await?;

    let austria = records
        .iter()
        .find(|r| r.city.eurostat_code == "AT001C")
        .expect("AT001C missing");
    let belgium = records
        .iter()
        .find(|r| r.city.eurostat_code == "BE001C")
        .expect("BE001C missing");

    assert!(austria.climate.is_some());
    assert!(austria.metrics.is_none());
    assert!(belgium.climate.is_none());
    assert_eq!(
        belgium.metrics.as_ref().and_then(|m| m.safety_index),
        Some(130.5)
    );

    Ok(())
}
