use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use relocity::server::router;
use tower::ServiceExt;

use super::*;

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request is valid")
}

/// Expect the details route to resolve the path parameter
#[tokio::test]
async fn routes_city_details() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("AT001C", Some("Austria"))
        .build()
        .await?;
    let app = router::routes().with_state(test.app_state());

    let found = app.clone().oneshot(get("/api/cities/at001c")).await;
    let missing = app.oneshot(get("/api/cities/DE001C")).await;

    assert_eq!(found.expect("router failed").status(), StatusCode::OK);
    assert_eq!(missing.expect("router failed").status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the overview route and the OpenAPI document to be served
#[tokio::test]
async fn routes_overview_and_docs() -> Result<(), TestError> {
    let test = test_setup_with_city_tables!()?;
    let app = router::routes().with_state(test.app_state());

    let overview = app.clone().oneshot(get("/api/cities")).await;
    let openapi = app.oneshot(get("/api/docs/openapi.json")).await;

    assert_eq!(overview.expect("router failed").status(), StatusCode::OK);
    assert_eq!(openapi.expect("router failed").status(), StatusCode::OK);

    Ok(())
}
