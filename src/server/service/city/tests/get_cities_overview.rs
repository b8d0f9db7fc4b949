use super::*;

/// Expect Ok with an empty list when no city is stored
#[tokio::test]
async fn returns_empty_list_without_cities() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;
    let engine = engine();

    let service = CityService::new(&test.db, &engine);
    let result = service.get_cities_overview().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_empty());

    Ok(())
}

/// Expect Ok with every city enriched, largest Erasmus population first
#[tokio::test]
async fn enriches_every_city_in_order() -> Result<(), TestError> {
    let mut test = test_setup_with_city_tables!()?;
    let mut vienna = factory::mock_city("AT001C", Some("Austria"));
    vienna.erasmus_population = Some(8_000);
    let mut graz = factory::mock_city("AT002C", Some("Austria"));
    graz.erasmus_population = Some(2_000);
    test.city().insert_city(graz).await?;
    test.city().insert_city(vienna).await?;
    test.city()
        .insert_metrics(factory::mock_metrics("AT001C", Some(120.4), Some(80.0)))
        .await?;
    let engine = engine();

    let service = CityService::new(&test.db, &engine);
    let overviews = service.get_cities_overview().await;

    assert!(overviews.is_ok(), "Error: {:?}", overviews);
    let overviews = overviews.unwrap();
    assert_eq!(overviews.len(), 2);
    assert_eq!(overviews[0].eurostat_code, "AT001C");
    assert_eq!(overviews[0].safety_index, Some(120.4));
    assert_eq!(overviews[0].language_percentages["German"], Some(98.0));
    assert_eq!(overviews[0].language_percentages["English"], None);
    assert_eq!(overviews[1].eurostat_code, "AT002C");
    assert_eq!(overviews[1].safety_index, None);

    Ok(())
}

/// Expect a city failing enrichment to be skipped while the others are returned
#[tokio::test]
async fn skips_city_failing_enrichment() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", Some("Austria"))
        .with_mock_city("BE001C", Some("Belgium"))
        .build()
        .await?;
    let mut cost_of_living = factory::mock_cost_of_living("BE001C");
    cost_of_living.monthly_budget = Some(1e300);
    test.city().insert_cost_of_living(cost_of_living).await?;
    let engine = engine();

    let service = CityService::new(&test.db, &engine);
    let overviews = service.get_cities_overview().await;

    assert!(overviews.is_ok(), "Error: {:?}", overviews);
    let codes: Vec<String> = overviews
        .unwrap()
        .into_iter()
        .map(|o| o.eurostat_code)
        .collect();
    assert_eq!(codes, vec!["AT001C".to_string()]);

    Ok(())
}
