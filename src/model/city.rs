use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// City summary shown in the overview listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CityOverviewDto {
    pub eurostat_code: String,
    pub local_name: String,
    pub english_name: String,
    pub local_country: Option<String>,
    pub english_country: Option<String>,
    pub country_emoji: Option<String>,
    pub population: Option<i64>,
    pub erasmus_population: Option<i32>,
    /// Estimated monthly budget in whole euros
    pub monthly_budget: Option<i64>,
    pub cost_of_living_plus_rent: Option<f64>,
    pub mean_feb_min: Option<i32>,
    pub mean_jul_max: Option<i32>,
    pub safety_index: Option<f64>,
    pub university_count: Option<i32>,
    pub public_transport_satisfaction: Option<f64>,
    /// Share of the population speaking each supported language, in percent
    pub language_percentages: BTreeMap<String, Option<f64>>,
}

/// Everything known about one city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CityDetailsDto {
    #[serde(flatten)]
    pub overview: CityOverviewDto,
    pub climate: ClimateDto,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    /// Estimated student rent in whole euros, 0 when nothing to estimate from
    pub rent_budget: i64,
    /// Estimated groceries budget in whole euros, 0 when nothing to estimate from
    pub groceries_budget: i64,
    /// Monthly public transport ticket in whole euros
    pub transport_budget: Option<i64>,
    pub overview_text: Option<String>,
    pub housing: HousingDto,
    /// Universities, largest size class first
    pub universities: Vec<UniversityDto>,
}

/// Monthly mean minimum and maximum temperatures in °C.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClimateDto {
    pub mean_jan_min: Option<i32>,
    pub mean_jan_max: Option<i32>,
    pub mean_feb_min: Option<i32>,
    pub mean_feb_max: Option<i32>,
    pub mean_mar_min: Option<i32>,
    pub mean_mar_max: Option<i32>,
    pub mean_apr_min: Option<i32>,
    pub mean_apr_max: Option<i32>,
    pub mean_may_min: Option<i32>,
    pub mean_may_max: Option<i32>,
    pub mean_jun_min: Option<i32>,
    pub mean_jun_max: Option<i32>,
    pub mean_jul_min: Option<i32>,
    pub mean_jul_max: Option<i32>,
    pub mean_aug_min: Option<i32>,
    pub mean_aug_max: Option<i32>,
    pub mean_sep_min: Option<i32>,
    pub mean_sep_max: Option<i32>,
    pub mean_oct_min: Option<i32>,
    pub mean_oct_max: Option<i32>,
    pub mean_nov_min: Option<i32>,
    pub mean_nov_max: Option<i32>,
    pub mean_dec_min: Option<i32>,
    pub mean_dec_max: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct HousingDto {
    pub rent_per_sqm: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UniversityDto {
    pub erasmus_code: String,
    pub name: String,
    pub english_name: Option<String>,
    pub category: Option<String>,
    /// Size class, 0 when unknown
    pub size_class: i32,
    pub url: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub total_students: Option<i64>,
}
