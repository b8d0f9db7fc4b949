use std::collections::BTreeMap;

use relocity_test_utils::prelude::*;

use crate::server::{
    error::Error,
    model::dataset::LanguageSkills,
    service::{city::CityService, enrichment::EnrichmentEngine},
};

mod get_cities_overview;

fn engine() -> EnrichmentEngine {
    let mut skills = LanguageSkills::new();
    skills.insert(
        "Austria".to_string(),
        BTreeMap::from([("German".to_string(), 0.98)]),
    );

    EnrichmentEngine::new(skills, vec!["English".to_string(), "German".to_string()])
}
