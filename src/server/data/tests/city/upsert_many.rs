use super::*;

/// Expect Ok when inserting new cities
#[tokio::test]
async fn inserts_new_cities() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;

    let repo = CityRepository::new(&test.db);
    let created = repo
        .upsert_many(vec![
            factory::mock_city("AT001C", Some("Austria")),
            factory::mock_city("BE001C", Some("Belgium")),
        ])
        .await?;

    assert_eq!(created.len(), 2);
    assert!(created.iter().all(|c| c.last_updated.is_some()));

    Ok(())
}

/// Expect the stored identity to be overwritten for an existing code
#[tokio::test]
async fn overwrites_existing_city() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", None)
        .build()
        .await?;

    let mut city = factory::mock_city("AT001C", Some("Austria"));
    city.english_name = "Vienna".to_string();

    let repo = CityRepository::new(&test.db);
    repo.upsert_many(vec![city]).await?;

    let record = repo.find_record("AT001C").await?.expect("city not found");
    assert_eq!(record.city.english_name, "Vienna");
    assert_eq!(record.city.english_country.as_deref(), Some("Austria"));

    Ok(())
}

/// Expect Ok with nothing written for an empty batch
#[tokio::test]
async fn empty_batch_is_a_no_op() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;

    let repo = CityRepository::new(&test.db);
    let created = repo.upsert_many(Vec::new()).await?;

    assert!(created.is_empty());
    assert!(repo.find_overview_records().await?.is_empty());

    Ok(())
}
