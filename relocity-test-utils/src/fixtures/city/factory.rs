use chrono::{NaiveDate, NaiveDateTime};

fn fixed_timestamp() -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Create a mock city with default test values.
///
/// # Arguments
/// - `eurostat_code` - Code of the city
/// - `english_country` - English country name, used for language proficiency lookups
///
/// # Returns
/// - `entity::city::Model` - A city named after its code
pub fn mock_city(eurostat_code: &str, english_country: Option<&str>) -> entity::city::Model {
    entity::city::Model {
        eurostat_code: eurostat_code.to_string(),
        local_name: format!("Local {}", eurostat_code),
        english_name: format!("City {}", eurostat_code),
        local_country: english_country.map(str::to_string),
        english_country: english_country.map(str::to_string),
        country_emoji: None,
        population: Some(250_000),
        erasmus_population: Some(1_000),
        lat: Some(48.2),
        lon: Some(16.37),
        last_updated: fixed_timestamp(),
    }
}

/// Create a mock cost-of-living record with every index empty.
pub fn mock_cost_of_living(eurostat_code: &str) -> entity::cost_of_living::Model {
    entity::cost_of_living::Model {
        eurostat_code: eurostat_code.to_string(),
        monthly_budget: None,
        cost_of_living_index: None,
        rent_index: None,
        cost_of_living_plus_rent_index: None,
        groceries_index: None,
        restaurant_price_index: None,
        local_purchasing_power_index: None,
        last_updated: fixed_timestamp(),
    }
}

/// Create a mock housing record.
pub fn mock_housing(
    eurostat_code: &str,
    rent_per_sqm: Option<f64>,
    area_per_person: Option<f64>,
    erasmus_factor: Option<f64>,
) -> entity::housing::Model {
    entity::housing::Model {
        eurostat_code: eurostat_code.to_string(),
        rent_per_sqm,
        area_per_person,
        erasmus_factor,
        last_updated: fixed_timestamp(),
    }
}

/// Create a mock metrics record.
pub fn mock_metrics(
    eurostat_code: &str,
    safety_index: Option<f64>,
    public_transport_satisfaction: Option<f64>,
) -> entity::metrics::Model {
    entity::metrics::Model {
        eurostat_code: eurostat_code.to_string(),
        safety_index,
        university_count: Some(3),
        public_transport_satisfaction,
        last_updated: fixed_timestamp(),
    }
}

/// Create a mock climate record where month `n` (1-based) has min `n - 5` and max `n + 10`.
pub fn mock_climate(eurostat_code: &str) -> entity::climate::Model {
    entity::climate::Model {
        eurostat_code: eurostat_code.to_string(),
        mean_jan_min: Some(-4),
        mean_jan_max: Some(11),
        mean_feb_min: Some(-3),
        mean_feb_max: Some(12),
        mean_mar_min: Some(-2),
        mean_mar_max: Some(13),
        mean_apr_min: Some(-1),
        mean_apr_max: Some(14),
        mean_may_min: Some(0),
        mean_may_max: Some(15),
        mean_jun_min: Some(1),
        mean_jun_max: Some(16),
        mean_jul_min: Some(2),
        mean_jul_max: Some(17),
        mean_aug_min: Some(3),
        mean_aug_max: Some(18),
        mean_sep_min: Some(4),
        mean_sep_max: Some(19),
        mean_oct_min: Some(5),
        mean_oct_max: Some(20),
        mean_nov_min: Some(6),
        mean_nov_max: Some(21),
        mean_dec_min: Some(7),
        mean_dec_max: Some(22),
        last_updated: fixed_timestamp(),
    }
}

/// Create a mock transport budget record.
pub fn mock_transport_budget(
    eurostat_code: &str,
    monthly_ticket: Option<f64>,
) -> entity::transport_budget::Model {
    entity::transport_budget::Model {
        eurostat_code: eurostat_code.to_string(),
        source: Some("ESTAT:TEST(1.0)".to_string()),
        source_date: NaiveDate::from_ymd_opt(2020, 1, 1),
        monthly_ticket,
        last_updated: fixed_timestamp(),
    }
}

/// Create a mock guide record.
pub fn mock_guide(eurostat_code: &str, text: &str) -> entity::guide::Model {
    entity::guide::Model {
        eurostat_code: eurostat_code.to_string(),
        text: Some(text.to_string()),
        last_updated: fixed_timestamp(),
    }
}

/// Create a mock university located in `eurostat_code`.
///
/// # Arguments
/// - `erasmus_code` - Institution code, also used to derive its name
/// - `eurostat_code` - City the university belongs to
/// - `size_class` - Optional size class used for ordering
pub fn mock_university(
    erasmus_code: &str,
    eurostat_code: &str,
    size_class: Option<i32>,
) -> entity::university::Model {
    entity::university::Model {
        erasmus_code: erasmus_code.to_string(),
        name: format!("University {}", erasmus_code),
        english_name: None,
        eurostat_code: eurostat_code.to_string(),
        country_code: eurostat_code.get(..2).map(str::to_string),
        category: Some("University".to_string()),
        standardized_category: Some(1),
        size_class,
        url: None,
        lat: None,
        lon: None,
        remote_campuses: None,
        total_students: Some(10_000),
        mobile_students: None,
        generic_students: None,
        education_students: None,
        arts_humanities_students: None,
        social_sciences_students: None,
        business_law_students: None,
        it_students: None,
        aec_students: None,
        agriculture_vet_students: None,
        med_students: None,
        services_students: None,
        women_share: None,
        foreign_share: None,
        mobile_share: None,
        last_updated: fixed_timestamp(),
    }
}
