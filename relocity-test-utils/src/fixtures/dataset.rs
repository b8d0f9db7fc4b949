//! Reference files and statistical exports written into the test directory.

use std::{fs, path::PathBuf};

use serde_json::Value;

use crate::{
    constant::{LINEAR_EXPORT_HEADER, TEST_DATAFLOW},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn dataset<'a>(&'a self) -> DatasetFixtures<'a> {
        DatasetFixtures { setup: self }
    }
}

pub struct DatasetFixtures<'a> {
    pub setup: &'a TestContext,
}

/// One row of a linear export: (indicator, geographic code, year, observed value).
pub type ExportRow<'r> = (&'r str, &'r str, &'r str, &'r str);

impl<'a> DatasetFixtures<'a> {
    fn write(&self, path: PathBuf, content: &str) -> Result<PathBuf, TestError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;

        Ok(path)
    }

    /// Write the supported-cities reference file.
    ///
    /// # Arguments
    /// - `cities` - JSON array of city objects, each with at least an `eurostat_code`
    pub fn write_supported_cities(&self, cities: Value) -> Result<PathBuf, TestError> {
        let content = serde_json::to_string_pretty(&cities)?;
        self.write(self.setup.supported_cities_file(), &content)
    }

    /// Write a supported-cities file listing only codes.
    pub fn write_supported_codes(&self, codes: &[&str]) -> Result<PathBuf, TestError> {
        let cities = codes
            .iter()
            .map(|code| serde_json::json!({ "eurostat_code": code }))
            .collect();
        self.write_supported_cities(Value::Array(cities))
    }

    pub fn write_supported_languages(&self, languages: &[&str]) -> Result<PathBuf, TestError> {
        let content = serde_json::to_string(languages)?;
        self.write(self.setup.supported_languages_file(), &content)
    }

    /// Write the proficiency matrix verbatim.
    pub fn write_language_skills(&self, content: &str) -> Result<PathBuf, TestError> {
        self.write(
            self.setup
                .data_dir()
                .join(self.setup.language_skills_file()),
            content,
        )
    }

    /// Write a linear export into `<data_dir>/eurostat/<theme_dir>/<file_name>`.
    ///
    /// Every row is tagged with [`TEST_DATAFLOW`].
    pub fn write_theme_export(
        &self,
        theme_dir: &str,
        file_name: &str,
        rows: &[ExportRow<'_>],
    ) -> Result<PathBuf, TestError> {
        let mut content = String::from(LINEAR_EXPORT_HEADER);
        content.push('\n');
        for (indicator, geo, year, value) in rows {
            content.push_str(&format!(
                "{},01/01/24 23:00:00,A,{},{},{},{}\n",
                TEST_DATAFLOW, indicator, geo, year, value
            ));
        }

        let path = self
            .setup
            .data_dir()
            .join("eurostat")
            .join(theme_dir)
            .join(file_name);
        self.write(path, &content)
    }
}
