/// Dataflow label written into generated export rows.
pub const TEST_DATAFLOW: &str = "ESTAT:TEST(1.0)";

/// Header of a generated linear export file.
pub const LINEAR_EXPORT_HEADER: &str =
    "DATAFLOW,LAST UPDATE,freq,indic_ur,cities,TIME_PERIOD,OBS_VALUE";

pub const SUPPORTED_CITIES_FILE: &str = "config/supported_cities.json";
pub const SUPPORTED_LANGUAGES_FILE: &str = "config/supported_languages.json";
/// Proficiency matrix file name, relative to the data directory.
pub const LANGUAGE_SKILLS_FILE: &str = "languages.csv";
pub const CITY_NAME_MAPPING_FILE: &str = "data/city_name_mapping.json";
pub const DATA_DIR: &str = "data";
