//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context owns an
//! in-memory SQLite database and a temporary directory laid out like a deployment: reference
//! files under `config/`, statistical exports under `data/eurostat/<theme>`.

use std::path::{Path, PathBuf};

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::{
    constant::{
        CITY_NAME_MAPPING_FILE, DATA_DIR, LANGUAGE_SKILLS_FILE, SUPPORTED_CITIES_FILE,
        SUPPORTED_LANGUAGES_FILE,
    },
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// Provides access to:
/// - Database connection
/// - Temporary working directory for dataset and reference files
///
/// ```ignore
/// let mut test = TestBuilder::new().with_city_tables().build().await?;
///
/// test.city().insert_mock_city("AT001C").await?;
/// test.dataset().write_supported_languages(&["German"])?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Root of the temporary working directory, removed on drop
    pub(crate) root: TempDir,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Connected in-memory database and fresh temporary directory
    /// - `Err(TestError::DbErr)` - Database connection failed
    /// - `Err(TestError::Io)` - Temporary directory could not be created
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;
        let root = TempDir::new()?;

        Ok(TestContext { db, root })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Directory holding statistical exports and the proficiency matrix.
    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join(DATA_DIR)
    }

    pub fn supported_cities_file(&self) -> PathBuf {
        self.root.path().join(SUPPORTED_CITIES_FILE)
    }

    pub fn supported_languages_file(&self) -> PathBuf {
        self.root.path().join(SUPPORTED_LANGUAGES_FILE)
    }

    /// Proficiency matrix path relative to [`TestContext::data_dir`].
    pub fn language_skills_file(&self) -> PathBuf {
        PathBuf::from(LANGUAGE_SKILLS_FILE)
    }

    pub fn city_name_mapping_file(&self) -> PathBuf {
        self.root.path().join(CITY_NAME_MAPPING_FILE)
    }
}
