use axum::{extract::State, http::StatusCode, response::IntoResponse};
use relocity::server::controller::city::get_cities;

use super::*;

/// Expect 200 OK with an empty list when no city is stored
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;

    let result = get_cities(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 OK when cities with partial sub-records are stored
#[tokio::test]
async fn success_with_stored_cities() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", Some("Austria"))
        .with_mock_city("BE001C", None)
        .build()
        .await?;
    test.city()
        .insert_metrics(factory::mock_metrics("AT001C", Some(42.0), None))
        .await?;

    let result = get_cities(State(test.app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect Error when the city tables do not exist
#[tokio::test]
async fn fails_when_tables_are_missing() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_cities(State(test.app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
