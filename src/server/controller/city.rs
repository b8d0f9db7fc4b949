use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        city::{CityDetailsDto, CityOverviewDto},
    },
    server::{error::Error, model::app::AppState, service::city::CityService},
};

pub static CITY_TAG: &str = "city";

/// List every stored city with its overview fields
///
/// Cities are ordered by Erasmus population, largest first.
#[utoipa::path(
    get,
    path = "/api/cities",
    tag = CITY_TAG,
    responses(
        (status = 200, description = "Success when retrieving city overviews", body = Vec<CityOverviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let city_service = CityService::new(&state.db, &state.enrichment);

    let cities = city_service.get_cities_overview().await?;

    Ok((StatusCode::OK, axum::Json(cities)).into_response())
}

/// Get the full details of one city
#[utoipa::path(
    get,
    path = "/api/cities/{eurostat_code}",
    tag = CITY_TAG,
    params(
        ("eurostat_code" = String, Path, description = "Eurostat city code, e.g. AT001C")
    ),
    responses(
        (status = 200, description = "Success when retrieving city details", body = CityDetailsDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city(
    State(state): State<AppState>,
    Path(eurostat_code): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let city_service = CityService::new(&state.db, &state.enrichment);

    let Some(details) = city_service.get_city_full_details(&eurostat_code).await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "City not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(details)).into_response())
}
