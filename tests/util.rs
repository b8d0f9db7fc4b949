use std::sync::Arc;

use relocity::server::{
    dataset::loader::DatasetLoader, model::app::AppState, service::enrichment::EnrichmentEngine,
    util::city_name::CityNameMapping,
};
use relocity_test_utils::prelude::*;

pub trait TestContextExt {
    fn loader(&self) -> DatasetLoader;
    fn name_mapping(&self) -> CityNameMapping;
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn loader(&self) -> DatasetLoader {
        DatasetLoader::new(
            self.data_dir(),
            self.supported_cities_file(),
            self.supported_languages_file(),
            self.language_skills_file(),
        )
    }

    fn name_mapping(&self) -> CityNameMapping {
        CityNameMapping::load(self.city_name_mapping_file())
    }

    /// App state whose enrichment engine reads the reference files written so far.
    fn app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            enrichment: Arc::new(EnrichmentEngine::from_loader(&self.loader())),
        }
    }
}
