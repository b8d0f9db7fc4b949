//! Reading reference files and linear statistical exports from disk.
//!
//! The `read_*` functions are strict and return a [`DatasetError`]. The [`DatasetLoader`] methods
//! wrap them with the pipeline's failure policy: any missing, empty or malformed input is logged
//! and replaced by an empty result so a refresh degrades per theme instead of aborting.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use csv::StringRecord;

use crate::server::{
    config::Config,
    dataset::theme::Theme,
    error::dataset::DatasetError,
    model::dataset::{LanguageSkills, StatRow, SupportedCities, SupportedCity},
};

static EUROSTAT_DIR: &str = "eurostat";
static LANGUAGE_COLUMN: &str = "Language";

static DATAFLOW_COLUMN: &str = "DATAFLOW";
static INDICATOR_COLUMN: &str = "indic_ur";
static GEO_COLUMN: &str = "cities";
static TIME_PERIOD_COLUMN: &str = "TIME_PERIOD";
static OBS_VALUE_COLUMN: &str = "OBS_VALUE";

/// Locates and loads every input file of the ingestion pipeline.
#[derive(Clone, Debug)]
pub struct DatasetLoader {
    data_dir: PathBuf,
    supported_cities_file: PathBuf,
    supported_languages_file: PathBuf,
    language_skills_file: PathBuf,
}

impl DatasetLoader {
    /// Creates a loader.
    ///
    /// `language_skills_file` is resolved relative to `data_dir`; the other paths are used as
    /// given.
    pub fn new(
        data_dir: impl Into<PathBuf>,
        supported_cities_file: impl Into<PathBuf>,
        supported_languages_file: impl Into<PathBuf>,
        language_skills_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            supported_cities_file: supported_cities_file.into(),
            supported_languages_file: supported_languages_file.into(),
            language_skills_file: language_skills_file.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.data_dir,
            &config.supported_cities_file,
            &config.supported_languages_file,
            &config.language_skills_file,
        )
    }

    /// Directory holding the export files of `theme`.
    pub fn theme_dir(&self, theme: Theme) -> PathBuf {
        self.data_dir.join(EUROSTAT_DIR).join(theme.dir_name())
    }

    /// Supported-cities reference entries in file order, or empty on failure.
    pub fn load_supported_cities(&self) -> Vec<SupportedCity> {
        or_empty(
            read_supported_cities(&self.supported_cities_file),
            "supported cities",
        )
    }

    /// The ingestion universe built from the supported-cities reference file.
    pub fn load_supported_codes(&self) -> SupportedCities {
        SupportedCities::from(self.load_supported_cities().as_slice())
    }

    pub fn load_supported_languages(&self) -> Vec<String> {
        or_empty(
            read_supported_languages(&self.supported_languages_file),
            "supported languages",
        )
    }

    pub fn load_language_skills(&self) -> LanguageSkills {
        let path = self.data_dir.join(&self.language_skills_file);
        tracing::info!("Loading language data from {}", path.display());

        let skills = or_empty(read_language_skills(&path), "language skills");
        tracing::info!(
            "Language data loaded, {} countries processed",
            skills.len()
        );

        skills
    }

    /// Concatenates every `*.csv` export of `theme` in file-name order.
    ///
    /// A missing theme directory yields no rows. A file that cannot be read is logged and
    /// skipped; the remaining files still contribute.
    pub fn load_theme(&self, theme: Theme) -> Vec<StatRow> {
        let dir = self.theme_dir(theme);

        let files = match theme_files(&dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::error!("Failed to list {} exports: {}", theme, e);
                return Vec::new();
            }
        };

        let mut rows = Vec::new();
        for file in files {
            match read_linear_csv(&file) {
                Ok(file_rows) => {
                    tracing::debug!("Loaded {} rows from {}", file_rows.len(), file.display());
                    rows.extend(file_rows);
                }
                Err(e) => tracing::error!("Skipping {} export: {}", theme, e),
            }
        }

        if rows.is_empty() {
            tracing::warn!("No {} rows loaded from {}", theme, dir.display());
        }

        rows
    }
}

fn or_empty<T: Default>(result: Result<T, DatasetError>, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", what, e);
            T::default()
        }
    }
}

fn ensure_exists(path: &Path) -> Result<(), DatasetError> {
    if path.exists() {
        Ok(())
    } else {
        Err(DatasetError::NotFound(path.to_path_buf()))
    }
}

/// Reads the supported-cities file, a JSON list of objects each carrying an `eurostat_code`.
pub fn read_supported_cities(path: &Path) -> Result<Vec<SupportedCity>, DatasetError> {
    ensure_exists(path)?;
    let content = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&content)?)
}

/// Reads the supported-languages file, a JSON list of language names.
pub fn read_supported_languages(path: &Path) -> Result<Vec<String>, DatasetError> {
    ensure_exists(path)?;
    let content = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&content)?)
}

/// Reads the proficiency matrix into `country -> language -> fraction`.
///
/// The `Language` column names the row; every other column is a country. Empty cells are
/// skipped but the country is still listed. A cell that is not a number fails the whole file.
pub fn read_language_skills(path: &Path) -> Result<LanguageSkills, DatasetError> {
    ensure_exists(path)?;
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(DatasetError::Empty(path.to_path_buf()));
    }
    let language_idx = column_index(&headers, LANGUAGE_COLUMN, path)?;

    let countries: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != language_idx)
        .map(|(idx, country)| (idx, country.trim().to_string()))
        .collect();

    let mut skills: LanguageSkills = countries
        .iter()
        .map(|(_, country)| (country.clone(), BTreeMap::new()))
        .collect();

    for record in reader.records() {
        let record = record?;
        let language = record.get(language_idx).unwrap_or_default().trim();

        for (idx, country) in &countries {
            let cell = record.get(*idx).unwrap_or_default().trim();
            if cell.is_empty() {
                continue;
            }

            let fraction = cell
                .parse::<f64>()
                .map_err(|_| DatasetError::InvalidNumber {
                    file: path.to_path_buf(),
                    column: country.clone(),
                    value: cell.to_string(),
                })?;

            if let Some(languages) = skills.get_mut(country) {
                languages.insert(language.to_string(), fraction);
            }
        }
    }

    Ok(skills)
}

/// Reads one linear statistical export.
///
/// `indic_ur`, `cities`, `TIME_PERIOD` and `OBS_VALUE` are required; `DATAFLOW` is optional and
/// any other column is ignored.
pub fn read_linear_csv(path: &Path) -> Result<Vec<StatRow>, DatasetError> {
    ensure_exists(path)?;
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(DatasetError::Empty(path.to_path_buf()));
    }

    let indicator_idx = column_index(&headers, INDICATOR_COLUMN, path)?;
    let geo_idx = column_index(&headers, GEO_COLUMN, path)?;
    let time_period_idx = column_index(&headers, TIME_PERIOD_COLUMN, path)?;
    let obs_value_idx = column_index(&headers, OBS_VALUE_COLUMN, path)?;
    let dataflow_idx = headers.iter().position(|h| h.trim() == DATAFLOW_COLUMN);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or_default().trim().to_string();

        rows.push(StatRow {
            dataflow: dataflow_idx.map(field).filter(|value| !value.is_empty()),
            indicator: field(indicator_idx),
            geo: field(geo_idx),
            time_period: field(time_period_idx),
            obs_value: field(obs_value_idx),
        });
    }

    Ok(rows)
}

fn column_index(headers: &StringRecord, column: &str, path: &Path) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            file: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn theme_files(dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    ensure_exists(dir)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}
