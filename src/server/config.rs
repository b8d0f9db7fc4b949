use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::config::ConfigError;

static DEFAULT_DATA_DIR: &str = "data";
static DEFAULT_SUPPORTED_CITIES_FILE: &str = "config/supported_cities.json";
static DEFAULT_SUPPORTED_LANGUAGES_FILE: &str = "config/supported_languages.json";
static DEFAULT_LANGUAGE_SKILLS_FILE: &str = "europeans_and_their_languages_2024_summed.csv";
static DEFAULT_CITY_NAME_MAPPING_FILE: &str = "data/city_name_mapping.json";
static DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";

pub struct Config {
    pub database_url: String,
    /// Root of the statistical exports; theme directories live under `<data_dir>/eurostat`.
    pub data_dir: PathBuf,
    pub supported_cities_file: PathBuf,
    pub supported_languages_file: PathBuf,
    /// Proficiency matrix, relative to `data_dir`.
    pub language_skills_file: PathBuf,
    pub city_name_mapping_file: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = var_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvValue {
                var: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            data_dir: var_or("DATA_DIR", DEFAULT_DATA_DIR).into(),
            supported_cities_file: var_or("SUPPORTED_CITIES_FILE", DEFAULT_SUPPORTED_CITIES_FILE)
                .into(),
            supported_languages_file: var_or(
                "SUPPORTED_LANGUAGES_FILE",
                DEFAULT_SUPPORTED_LANGUAGES_FILE,
            )
            .into(),
            language_skills_file: var_or("LANGUAGE_SKILLS_FILE", DEFAULT_LANGUAGE_SKILLS_FILE)
                .into(),
            city_name_mapping_file: Self::city_name_mapping_file_from_env(),
            bind_addr,
        })
    }

    /// Alias mapping location alone, for commands that never open the database.
    pub fn city_name_mapping_file_from_env() -> PathBuf {
        var_or("CITY_NAME_MAPPING_FILE", DEFAULT_CITY_NAME_MAPPING_FILE).into()
    }
}

fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
