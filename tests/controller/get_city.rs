use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use relocity::server::controller::city::get_city;

use super::*;

/// Expect 200 OK for a stored city
#[tokio::test]
async fn success_for_stored_city() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", Some("Austria"))
        .build()
        .await?;

    let result = get_city(State(test.app_state()), Path("AT001C".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for a valid code that is not stored
#[tokio::test]
async fn not_found_for_unknown_city() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;

    let result = get_city(State(test.app_state()), Path("AT001C".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 Not Found for a malformed code
#[tokio::test]
async fn not_found_for_malformed_code() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;

    let result = get_city(State(test.app_state()), Path("not-a-city".to_string())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 500 Internal Server Error when the stored city cannot be enriched
#[tokio::test]
async fn internal_error_when_enrichment_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", Some("Austria"))
        .build()
        .await?;
    test.city()
        .insert_transport_budget(factory::mock_transport_budget("AT001C", Some(1e300)))
        .await?;

    let result = get_city(State(test.app_state()), Path("AT001C".to_string())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
