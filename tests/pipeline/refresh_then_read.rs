use relocity::server::{
    dataset::theme::Topic,
    service::{city::CityService, refresh::RefreshService},
};

use super::*;

fn write_reference_files(test: &TestContext) -> Result<(), TestError> {
    test.dataset().write_supported_cities(serde_json::json!([
        {
            "eurostat_code": "AT001C",
            "local_name": "Wien",
            "english_name": "Vienna",
            "local_country": "Österreich",
            "english_country": "Austria",
            "erasmus_population": 9000
        },
        {
            "eurostat_code": "BE001C",
            "local_name": "Bruxelles",
            "english_name": "Brussels",
            "english_country": "Belgium",
            "erasmus_population": 12000
        }
    ]))?;
    test.dataset().write_supported_languages(&["English", "German"])?;
    test.dataset()
        .write_language_skills("Language,Austria,Belgium\nGerman,0.5,\nEnglish,0.25,0.75\n")?;

    test.dataset().write_theme_export(
        "urb_ctran",
        "tickets.csv",
        &[
            ("TT1080V", "AT001C", "2021", "51.4"),
            ("TT1080V", "BE", "2023", "45"),
        ],
    )?;
    test.dataset().write_theme_export(
        "urb_percep",
        "perception.csv",
        &[
            ("PS3514V", "AT001C", "2019", "60"),
            ("PS3515V", "AT001C", "2019", "25.5"),
            ("PS1012V", "BE001C", "2019", "30"),
        ],
    )?;

    Ok(())
}

/// Expect seeded and refreshed cities to be served with derived fields
#[tokio::test]
async fn refreshed_data_reaches_read_api() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;
    write_reference_files(&test)?;
    let loader = test.loader();
    let name_mapping = test.name_mapping();

    let refresh = RefreshService::new(&test.db, &loader, &name_mapping);
    assert!(matches!(refresh.seed_cities().await, Ok(2)));
    assert!(refresh.update_transport_budget().await.is_ok());
    assert!(refresh.update_urban_perception(&Topic::ALL).await.is_ok());

    let state = test.app_state();
    let service = CityService::new(&state.db, &state.enrichment);

    let overview = service.get_cities_overview().await;
    assert!(overview.is_ok(), "Error: {:?}", overview);
    let overview = overview.unwrap();
    let codes: Vec<&str> = overview.iter().map(|c| c.eurostat_code.as_str()).collect();
    assert_eq!(codes, vec!["BE001C", "AT001C"]);
    assert_eq!(overview[0].public_transport_satisfaction, Some(30.0));
    assert_eq!(overview[0].safety_index, None);
    assert_eq!(overview[1].safety_index, Some(85.5));

    let vienna = service.get_city_full_details("AT001C").await;
    assert!(vienna.is_ok(), "Error: {:?}", vienna);
    let vienna = vienna.unwrap().expect("AT001C not found");
    assert_eq!(vienna.overview.english_name, "Vienna");
    assert_eq!(vienna.transport_budget, Some(51));
    assert_eq!(
        vienna.overview.language_percentages.get("German"),
        Some(&Some(50.0))
    );
    assert_eq!(
        vienna.overview.language_percentages.get("English"),
        Some(&Some(25.0))
    );

    let brussels = service.get_city_full_details("BE001C").await;
    assert!(brussels.is_ok(), "Error: {:?}", brussels);
    let brussels = brussels.unwrap().expect("BE001C not found");
    assert_eq!(brussels.transport_budget, Some(45));
    assert_eq!(
        brussels.overview.language_percentages.get("German"),
        Some(&None)
    );

    Ok(())
}

/// Expect a second refresh of one topic to keep the other topic's values
#[tokio::test]
async fn topic_refresh_keeps_other_topic() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;
    write_reference_files(&test)?;
    let loader = test.loader();
    let name_mapping = test.name_mapping();

    let refresh = RefreshService::new(&test.db, &loader, &name_mapping);
    assert!(refresh.seed_cities().await.is_ok());
    assert!(refresh.update_urban_perception(&Topic::ALL).await.is_ok());

    test.dataset().write_theme_export(
        "urb_percep",
        "perception.csv",
        &[("PS1012V", "AT001C", "2024", "70")],
    )?;
    let summary = refresh
        .update_urban_perception(&[Topic::PublicTransport])
        .await;
    assert!(summary.is_ok(), "Error: {:?}", summary);

    let state = test.app_state();
    let service = CityService::new(&state.db, &state.enrichment);
    let vienna = service
        .get_city_full_details("AT001C")
        .await
        .ok()
        .flatten()
        .expect("AT001C not found");

    assert_eq!(vienna.overview.safety_index, Some(85.5));
    assert_eq!(vienna.overview.public_transport_satisfaction, Some(70.0));

    Ok(())
}
