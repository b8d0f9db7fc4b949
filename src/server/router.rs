//! HTTP routing and OpenAPI documentation configuration.
//!
//! All read API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! serves the generated document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/cities` - Overview of every stored city
/// - `GET /api/cities/{eurostat_code}` - Full details of one city
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db, enrichment });
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Relocity", description = "Relocity city statistics API"), tags(
        (name = controller::city::CITY_TAG, description = "City overview and details"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::city::get_cities))
        .routes(routes!(controller::city::get_city))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
