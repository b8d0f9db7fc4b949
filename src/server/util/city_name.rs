//! City name normalization backed by a persisted alias mapping.
//!
//! Statistical exports and university registers spell city names in many ways ("PARIS CEDEX 05",
//! "'s-Hertogenbosch", "Den Bosch"). [`CityNameMapping`] reduces a raw name to a lookup key with
//! [`clean`] and resolves it to a canonical display name, falling back to a title-cased key for
//! names nobody has curated yet.
//!
//! The mapping is a flat JSON object `{ "variant": "Canonical Name" }` that is rewritten in full on
//! every mutation.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::server::error::name_mapping::NameMappingError;

static CEDEX: &str = "cedex";

/// Reduces a raw place name to its alias lookup key.
///
/// Lowercases, strips ASCII digits, single and double quotes and every occurrence of `cedex`, then
/// trims surrounding whitespace. Applying it to its own output is a no-op.
pub fn clean(name: Option<&str>) -> Option<String> {
    let name = name?;

    let mut cleaned: String = name
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_digit() && *c != '"' && *c != '\'')
        .collect();

    // Removing one occurrence can splice a new one together ("cecedexdex").
    while cleaned.contains(CEDEX) {
        cleaned = cleaned.replace(CEDEX, "");
    }

    Some(cleaned.trim().to_string())
}

/// Capitalizes the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(value: &str) -> String {
    let mut titled = String::with_capacity(value.len());
    let mut previous_is_alpha = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if previous_is_alpha {
                titled.extend(c.to_lowercase());
            } else {
                titled.extend(c.to_uppercase());
            }
            previous_is_alpha = true;
        } else {
            titled.push(c);
            previous_is_alpha = false;
        }
    }

    titled
}

/// Alias table mapping cleaned name variants to canonical display names.
#[derive(Debug)]
pub struct CityNameMapping {
    mapping_file: PathBuf,
    name_mapping: BTreeMap<String, String>,
}

impl CityNameMapping {
    /// Loads the mapping stored at `mapping_file`.
    ///
    /// A missing file yields an empty mapping. An unreadable or malformed file is logged and also
    /// yields an empty mapping; it will be overwritten by the next registration.
    pub fn load(mapping_file: impl Into<PathBuf>) -> Self {
        let mapping_file = mapping_file.into();

        let name_mapping = if mapping_file.exists() {
            match Self::read_mapping(&mapping_file) {
                Ok(mapping) => mapping,
                Err(e) => {
                    tracing::error!(
                        "Failed to load city name mapping from {}: {}",
                        mapping_file.display(),
                        e
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Self {
            mapping_file,
            name_mapping,
        }
    }

    fn read_mapping(path: &Path) -> Result<BTreeMap<String, String>, NameMappingError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Number of known variants.
    pub fn len(&self) -> usize {
        self.name_mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_mapping.is_empty()
    }

    /// Canonical name registered for an exact mapping key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.name_mapping.get(key).map(String::as_str)
    }

    /// Resolves a raw name to its display name.
    ///
    /// Returns the canonical name when the cleaned name is a known variant, otherwise the
    /// title-cased cleaned name.
    pub fn standardize(&self, name: &str) -> String {
        let cleaned = clean(Some(name)).unwrap_or_default();

        match self.name_mapping.get(&cleaned) {
            Some(standard_name) => standard_name.clone(),
            None => title_case(&cleaned),
        }
    }

    /// Registers `variant` as an alias of `standard_name` and persists the whole mapping.
    pub fn register(&mut self, variant: &str, standard_name: &str) -> Result<(), NameMappingError> {
        self.insert(variant, standard_name);
        self.save()
    }

    fn insert(&mut self, variant: &str, standard_name: &str) {
        self.name_mapping
            .insert(variant.to_lowercase(), standard_name.to_string());
    }

    /// Imports aliases from a `;`-delimited file of `canonical name;variant, variant, ...` rows.
    ///
    /// The first row is a header. Rows without exactly two columns and empty variants are
    /// skipped. The mapping is persisted once, after every row has been read.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of variants registered
    /// - `Err(NameMappingError)` - The file could not be read or the mapping could not be saved
    pub fn bulk_import(&mut self, source: &Path) -> Result<usize, NameMappingError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .from_path(source)?;

        let mut registered = 0;
        for record in reader.records() {
            let record = record?;
            if record.len() != 2 {
                continue;
            }

            let standard_name = record[0].trim().to_string();
            for variant in record[1].split(',') {
                let variant = variant.trim();
                if variant.is_empty() {
                    continue;
                }

                self.insert(variant, &standard_name);
                registered += 1;
            }
        }

        self.save()?;
        tracing::info!(
            "Imported {} city name variants from {}",
            registered,
            source.display()
        );

        Ok(registered)
    }

    /// Rewrites the backing file with the full mapping.
    pub fn save(&self) -> Result<(), NameMappingError> {
        if let Some(parent) = self.mapping_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.name_mapping.serialize(&mut serializer)?;

        fs::write(&self.mapping_file, buffer)?;

        Ok(())
    }
}
