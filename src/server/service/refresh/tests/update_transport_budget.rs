use chrono::NaiveDate;

use super::*;

/// Expect a city without its own row to take the country-level ticket price
#[tokio::test]
async fn falls_back_to_country_value() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("BE001C", Some("Belgium"))
        .build()
        .await?;
    test.dataset().write_supported_codes(&["BE001C"])?;
    test.dataset().write_theme_export(
        "urb_ctran",
        "tickets.csv",
        &[("TT1080V", "BE", "2023", "45"), ("TT1080V", "BE", "2019", "38")],
    )?;
    let loader = loader(&test);
    let mapping = name_mapping(&test);

    let service = RefreshService::new(&test.db, &loader, &mapping);
    let result = service.update_transport_budget().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let summary = result.unwrap();
    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.updated, 0);

    let budget = entity::prelude::TransportBudget::find_by_id("BE001C")
        .one(&test.db)
        .await?
        .expect("transport budget not written");
    assert_eq!(budget.monthly_ticket, Some(45.0));
    assert_eq!(budget.source.as_deref(), Some(TEST_DATAFLOW));
    assert_eq!(budget.source_date, NaiveDate::from_ymd_opt(2023, 1, 1));

    Ok(())
}

/// Expect a null row for a supported city without any matching observation
#[tokio::test]
async fn writes_null_row_without_data() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", Some("Austria"))
        .build()
        .await?;
    test.city()
        .insert_transport_budget(factory::mock_transport_budget("AT001C", Some(51.4)))
        .await?;
    test.dataset().write_supported_codes(&["AT001C"])?;
    test.dataset().write_theme_export(
        "urb_ctran",
        "tickets.csv",
        &[("TT1080V", "DE001C", "2023", "49")],
    )?;
    let loader = loader(&test);
    let mapping = name_mapping(&test);

    let service = RefreshService::new(&test.db, &loader, &mapping);
    let result = service.update_transport_budget().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().updated, 1);

    let budget = entity::prelude::TransportBudget::find_by_id("AT001C")
        .one(&test.db)
        .await?
        .expect("transport budget removed");
    assert_eq!(budget.monthly_ticket, None);
    assert_eq!(budget.source, None);
    assert_eq!(budget.source_date, None);

    Ok(())
}

/// Expect untidy and nameless supported entries to refresh alongside the others after seeding
#[tokio::test]
async fn refreshes_every_seeded_city() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;
    test.dataset().write_supported_cities(serde_json::json!([
        { "eurostat_code": "AT001C", "english_name": "Vienna" },
        { "eurostat_code": "BE001C" },
        { "eurostat_code": " de001c ", "english_name": "Berlin" },
        { "eurostat_code": "AT1C", "english_name": "Nowhere" }
    ]))?;
    test.dataset().write_theme_export(
        "urb_ctran",
        "tickets.csv",
        &[
            ("TT1080V", "AT001C", "2023", "51.4"),
            ("TT1080V", "BE", "2023", "45"),
            ("TT1080V", "DE001C", "2023", "49"),
        ],
    )?;
    let loader = loader(&test);
    let mapping = name_mapping(&test);

    let service = RefreshService::new(&test.db, &loader, &mapping);
    let seeded = service.seed_cities().await;
    assert!(matches!(seeded, Ok(3)), "Result: {:?}", seeded);

    let result = service.update_transport_budget().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().inserted, 3);

    let prices: Vec<(String, Option<f64>)> = entity::prelude::TransportBudget::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|budget| (budget.eurostat_code, budget.monthly_ticket))
        .collect();
    assert_eq!(prices.len(), 3);
    assert!(prices.contains(&("AT001C".to_string(), Some(51.4))));
    assert!(prices.contains(&("BE001C".to_string(), Some(45.0))));
    assert!(prices.contains(&("DE001C".to_string(), Some(49.0))));

    Ok(())
}
