//! Read-time enrichment of stored cities into view-ready projections.
//!
//! The engine holds the reference data loaded at startup (language proficiency matrix and the
//! supported languages) and never touches the database. Missing sub-records degrade single
//! fields to `None`; a value that cannot be turned into a whole currency amount fails the
//! whole projection for that city.

use std::collections::BTreeMap;

use crate::{
    model::city::{CityDetailsDto, CityOverviewDto, ClimateDto, HousingDto, UniversityDto},
    server::{
        dataset::loader::DatasetLoader,
        error::enrichment::EnrichmentError,
        model::{
            dataset::LanguageSkills,
            db::{ClimateModel, CityRecord, CostOfLivingModel, HousingModel, UniversityModel},
        },
    },
};

/// Euros of student rent per point of rent index.
const RENT_PER_RENT_INDEX_POINT: f64 = 18.5;
/// Share of the monthly budget assumed to go to rent.
const RENT_SHARE_OF_MONTHLY_BUDGET: f64 = 0.6;
/// Euros of groceries per point of groceries index.
const GROCERIES_PER_INDEX_POINT: f64 = 2.68;

pub struct EnrichmentEngine {
    language_skills: LanguageSkills,
    supported_languages: Vec<String>,
}

impl EnrichmentEngine {
    pub fn new(language_skills: LanguageSkills, supported_languages: Vec<String>) -> Self {
        Self {
            language_skills,
            supported_languages,
        }
    }

    /// Loads the proficiency matrix and supported languages through `loader`.
    ///
    /// Either input missing leaves the corresponding data empty; percentages then stay `None`.
    pub fn from_loader(loader: &DatasetLoader) -> Self {
        Self::new(
            loader.load_language_skills(),
            loader.load_supported_languages(),
        )
    }

    /// Builds the overview projection of a city.
    ///
    /// # Returns
    /// - `Ok(CityOverviewDto)` - Projection with missing sub-record fields set to `None`
    /// - `Err(EnrichmentError)` - The monthly budget cannot be rounded to whole euros
    pub fn overview(&self, record: &CityRecord) -> Result<CityOverviewDto, EnrichmentError> {
        self.build_overview(record).inspect_err(|e| log_failure(record, e))
    }

    /// Builds the detail projection of a city, including the overview fields.
    ///
    /// # Returns
    /// - `Ok(CityDetailsDto)` - Complete projection
    /// - `Err(EnrichmentError)` - A budget figure cannot be rounded to whole euros
    pub fn full_details(&self, record: &CityRecord) -> Result<CityDetailsDto, EnrichmentError> {
        self.build_full_details(record)
            .inspect_err(|e| log_failure(record, e))
    }

    fn build_overview(&self, record: &CityRecord) -> Result<CityOverviewDto, EnrichmentError> {
        let city = &record.city;
        let cost_of_living = record.cost_of_living.as_ref();
        let climate = record.climate.as_ref();
        let metrics = record.metrics.as_ref();

        Ok(CityOverviewDto {
            eurostat_code: city.eurostat_code.clone(),
            local_name: city.local_name.clone(),
            english_name: city.english_name.clone(),
            local_country: city.local_country.clone(),
            english_country: city.english_country.clone(),
            country_emoji: city.country_emoji.clone(),
            population: city.population,
            erasmus_population: city.erasmus_population,
            monthly_budget: round_to_euro(
                &city.eurostat_code,
                "monthly_budget",
                cost_of_living.and_then(|c| c.monthly_budget),
            )?,
            cost_of_living_plus_rent: cost_of_living.and_then(|c| c.cost_of_living_plus_rent_index),
            mean_feb_min: climate.and_then(|c| c.mean_feb_min),
            mean_jul_max: climate.and_then(|c| c.mean_jul_max),
            safety_index: metrics.and_then(|m| m.safety_index),
            university_count: metrics.and_then(|m| m.university_count),
            public_transport_satisfaction: metrics.and_then(|m| m.public_transport_satisfaction),
            language_percentages: self.compute_language_proficiency(record),
        })
    }

    fn build_full_details(&self, record: &CityRecord) -> Result<CityDetailsDto, EnrichmentError> {
        let overview = self.build_overview(record)?;
        let code = &record.city.eurostat_code;

        let rent_budget = compute_rent_budget(
            record.housing.as_ref(),
            record.cost_of_living.as_ref(),
        );
        let groceries_budget = compute_groceries_budget(record.cost_of_living.as_ref());

        Ok(CityDetailsDto {
            overview,
            climate: climate_dto(record.climate.as_ref()),
            lat: record.city.lat,
            lon: record.city.lon,
            rent_budget: round_to_euro(code, "rent_budget", Some(rent_budget))?.unwrap_or(0),
            groceries_budget: round_to_euro(code, "groceries_budget", Some(groceries_budget))?
                .unwrap_or(0),
            transport_budget: round_to_euro(
                code,
                "transport_budget",
                record
                    .transport_budget
                    .as_ref()
                    .and_then(|t| t.monthly_ticket),
            )?,
            overview_text: record.guide.as_ref().and_then(|g| g.text.clone()),
            housing: HousingDto {
                rent_per_sqm: record.housing.as_ref().and_then(|h| h.rent_per_sqm),
            },
            universities: process_universities(&record.universities),
        })
    }

    /// Percentage of speakers per supported language in the city's country.
    ///
    /// Every supported language is present in the result; languages without data are `None`.
    pub fn compute_language_proficiency(&self, record: &CityRecord) -> BTreeMap<String, Option<f64>> {
        let mut percentages: BTreeMap<String, Option<f64>> = self
            .supported_languages
            .iter()
            .map(|language| (language.clone(), None))
            .collect();

        let country_skills = record
            .city
            .english_country
            .as_ref()
            .and_then(|country| self.language_skills.get(country));

        match country_skills {
            Some(skills) => {
                for (language, fraction) in skills {
                    if let Some(percentage) = percentages.get_mut(language) {
                        *percentage = Some(fraction * 100.0);
                    }
                }
            }
            None => tracing::warn!(
                "Language data for country {:?} of {} not found",
                record.city.english_country,
                record.city.eurostat_code
            ),
        }

        percentages
    }
}

fn log_failure(record: &CityRecord, error: &EnrichmentError) {
    tracing::error!(
        "Failed to enrich city {} ({}): {}",
        record.city.eurostat_code,
        record.city.english_name,
        error
    );
}

/// Estimated monthly student rent, before rounding.
///
/// In order of preference: rent per m² × area per person × student factor, then
/// `18.5 × rent index`, then 60% of the monthly budget, otherwise 0.
pub fn compute_rent_budget(
    housing: Option<&HousingModel>,
    cost_of_living: Option<&CostOfLivingModel>,
) -> f64 {
    if let Some(HousingModel {
        rent_per_sqm: Some(rent_per_sqm),
        area_per_person: Some(area_per_person),
        erasmus_factor: Some(erasmus_factor),
        ..
    }) = housing
    {
        return rent_per_sqm * area_per_person * erasmus_factor;
    }

    if let Some(rent_index) = cost_of_living.and_then(|c| c.rent_index) {
        return RENT_PER_RENT_INDEX_POINT * rent_index;
    }

    if let Some(monthly_budget) = cost_of_living.and_then(|c| c.monthly_budget) {
        return monthly_budget * RENT_SHARE_OF_MONTHLY_BUDGET;
    }

    tracing::warn!("No inputs available to estimate rent budget");
    0.0
}

/// Estimated monthly groceries spending, before rounding. 0 without a groceries index.
pub fn compute_groceries_budget(cost_of_living: Option<&CostOfLivingModel>) -> f64 {
    cost_of_living
        .and_then(|c| c.groceries_index)
        .map_or(0.0, |index| GROCERIES_PER_INDEX_POINT * index)
}

/// Rounds a currency amount to whole euros, ties to even.
///
/// `None` stays `None`. Non-finite values and values outside the `i64` range are errors.
pub fn round_to_euro(
    eurostat_code: &str,
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<i64>, EnrichmentError> {
    let Some(value) = value else {
        return Ok(None);
    };

    if !value.is_finite() {
        return Err(EnrichmentError::NonFiniteValue {
            eurostat_code: eurostat_code.to_string(),
            field,
            value,
        });
    }

    let rounded = value.round_ties_even();
    if rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        return Err(EnrichmentError::OutOfRange {
            eurostat_code: eurostat_code.to_string(),
            field,
            value,
        });
    }

    Ok(Some(rounded as i64))
}

fn climate_dto(climate: Option<&ClimateModel>) -> ClimateDto {
    let Some(c) = climate else {
        return ClimateDto::default();
    };

    ClimateDto {
        mean_jan_min: c.mean_jan_min,
        mean_jan_max: c.mean_jan_max,
        mean_feb_min: c.mean_feb_min,
        mean_feb_max: c.mean_feb_max,
        mean_mar_min: c.mean_mar_min,
        mean_mar_max: c.mean_mar_max,
        mean_apr_min: c.mean_apr_min,
        mean_apr_max: c.mean_apr_max,
        mean_may_min: c.mean_may_min,
        mean_may_max: c.mean_may_max,
        mean_jun_min: c.mean_jun_min,
        mean_jun_max: c.mean_jun_max,
        mean_jul_min: c.mean_jul_min,
        mean_jul_max: c.mean_jul_max,
        mean_aug_min: c.mean_aug_min,
        mean_aug_max: c.mean_aug_max,
        mean_sep_min: c.mean_sep_min,
        mean_sep_max: c.mean_sep_max,
        mean_oct_min: c.mean_oct_min,
        mean_oct_max: c.mean_oct_max,
        mean_nov_min: c.mean_nov_min,
        mean_nov_max: c.mean_nov_max,
        mean_dec_min: c.mean_dec_min,
        mean_dec_max: c.mean_dec_max,
    }
}

/// Universities sorted by size class, largest first. Unknown size classes count as 0.
fn process_universities(universities: &[UniversityModel]) -> Vec<UniversityDto> {
    let mut processed: Vec<UniversityDto> = universities
        .iter()
        .map(|u| UniversityDto {
            erasmus_code: u.erasmus_code.clone(),
            name: u.name.clone(),
            english_name: u.english_name.clone(),
            category: u.category.clone(),
            size_class: u.size_class.unwrap_or(0),
            url: u.url.clone(),
            lat: u.lat,
            lon: u.lon,
            total_students: u.total_students,
        })
        .collect();

    processed.sort_by(|a, b| b.size_class.cmp(&a.size_class));
    processed
}
