//! In-memory tables produced by the dataset loader and consumed by reconciliation and sync.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use sea_orm::Value;
use serde::Deserialize;

use crate::server::util::geo_code;

/// Nested proficiency matrix: country -> language -> fraction of speakers (0..1).
pub type LanguageSkills = BTreeMap<String, BTreeMap<String, f64>>;

/// One observation row of a linear statistical export.
///
/// Values are kept as raw strings; reconciliation decides what parses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatRow {
    /// `DATAFLOW` column, absent in some themes.
    pub dataflow: Option<String>,
    /// `indic_ur` indicator code.
    pub indicator: String,
    /// `cities` geographic code, may be a city, FUA or country code.
    pub geo: String,
    /// `TIME_PERIOD`, a year.
    pub time_period: String,
    /// `OBS_VALUE`, possibly empty or non-numeric.
    pub obs_value: String,
}

/// Entry of the supported-cities reference file.
///
/// Only the code is required; the remaining attributes are used when seeding the `cities` table.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SupportedCity {
    pub eurostat_code: String,
    #[serde(default)]
    pub local_name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
    #[serde(default)]
    pub local_country: Option<String>,
    #[serde(default)]
    pub english_country: Option<String>,
    #[serde(default)]
    pub country_emoji: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub erasmus_population: Option<i32>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// The universe of city codes considered by ingestion.
///
/// Keeps the codes in reference-file order and a lookup set of every geographic code a dataset
/// row may legitimately carry for them: the code itself, its functional urban area and its
/// country prefix.
#[derive(Clone, Debug, Default)]
pub struct SupportedCities {
    codes: Vec<String>,
    admitted: HashSet<String>,
}

impl SupportedCities {
    pub fn new(codes: Vec<String>) -> Self {
        let admitted = codes
            .iter()
            .flat_map(|code| geo_code::fallback_chain(code))
            .collect();

        Self { codes, admitted }
    }

    /// Supported codes in reference-file order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether a dataset row keyed by `geo` can contribute to any supported city.
    pub fn admits(&self, geo: &str) -> bool {
        self.admitted.contains(geo)
    }
}

/// Sanitized codes of the reference entries, first occurrence kept.
///
/// Entries whose code fails [`geo_code::sanitize`] are logged and left out, so the universe
/// matches the cities seeding writes.
impl From<&[SupportedCity]> for SupportedCities {
    fn from(cities: &[SupportedCity]) -> Self {
        let mut seen = HashSet::new();
        let mut codes = Vec::with_capacity(cities.len());

        for city in cities {
            let Some(code) = geo_code::sanitize(&city.eurostat_code) else {
                tracing::warn!("Ignoring supported city with invalid code {:?}", city.eurostat_code);
                continue;
            };
            if seen.insert(code.clone()) {
                codes.push(code);
            }
        }

        Self::new(codes)
    }
}

/// A typed, possibly-null column value of a reconciled row.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Number(Option<f64>),
    Text(Option<String>),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Number(value) => value.is_none(),
            FieldValue::Text(value) => value.is_none(),
            FieldValue::Date(value) => value.is_none(),
        }
    }

    /// Numeric payload, if this is a non-null number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => *value,
            _ => None,
        }
    }
}

impl From<FieldValue> for Value {
    fn from(field: FieldValue) -> Self {
        match field {
            FieldValue::Number(value) => Value::from(value),
            FieldValue::Text(value) => Value::from(value),
            FieldValue::Date(value) => Value::from(value),
        }
    }
}

/// One output row of reconciliation, keyed by city code.
///
/// `fields` holds only the columns the producing theme owns; sync writes exactly those columns
/// and leaves every other stored column untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct ReconciledRow {
    pub eurostat_code: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl ReconciledRow {
    pub fn new(eurostat_code: impl Into<String>) -> Self {
        Self {
            eurostat_code: eurostat_code.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, column: &str, value: FieldValue) -> Self {
        self.fields.insert(column.to_string(), value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.get(column)
    }

    /// True when every non-key field is null.
    pub fn is_empty(&self) -> bool {
        self.fields.values().all(FieldValue::is_null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str) -> SupportedCity {
        SupportedCity {
            eurostat_code: code.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn supported_codes_are_sanitized_and_deduplicated() {
        let entries = [
            entry(" at001c "),
            entry("AT1C"),
            entry("BE001C"),
            entry("AT001C"),
        ];

        let supported = SupportedCities::from(entries.as_slice());

        assert_eq!(supported.codes(), ["AT001C", "BE001C"]);
        assert!(supported.admits("AT001F"));
        assert!(supported.admits("BE"));
        assert!(!supported.admits("AT1C"));
    }
}
