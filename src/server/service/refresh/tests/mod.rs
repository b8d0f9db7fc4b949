use relocity_test_utils::{constant::TEST_DATAFLOW, prelude::*};
use sea_orm::EntityTrait;

use crate::server::{
    dataset::{loader::DatasetLoader, theme::Topic},
    service::refresh::RefreshService,
    util::city_name::CityNameMapping,
};

mod sync;
mod update_transport_budget;

fn loader(test: &TestContext) -> DatasetLoader {
    DatasetLoader::new(
        test.data_dir(),
        test.supported_cities_file(),
        test.supported_languages_file(),
        test.language_skills_file(),
    )
}

fn name_mapping(test: &TestContext) -> CityNameMapping {
    CityNameMapping::load(test.city_name_mapping_file())
}
