//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and city
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_city_tables: bool,

    // Database fixtures to insert: (eurostat_code, english_country)
    cities: Vec<(String, Option<String>)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_city_tables: false,
            cities: Vec::new(),
        }
    }

    /// Add the city table, every sub-record table and the universities table.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_city_tables(mut self) -> Self {
        self.include_city_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use relocity_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), relocity_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(City)
    ///     .with_table(Metrics)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock city into the database.
    ///
    /// # Arguments
    /// - `eurostat_code` - Code of the city, e.g. `"AT001C"`
    /// - `english_country` - Optional English country name
    pub fn with_mock_city(
        mut self,
        eurostat_code: impl Into<String>,
        english_country: Option<&str>,
    ) -> Self {
        self.cities
            .push((eurostat_code.into(), english_country.map(str::to_string)));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (city tables if specified, then custom tables)
    /// 2. Inserts city fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_city_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::City),
                schema.create_table_from_entity(entity::prelude::Climate),
                schema.create_table_from_entity(entity::prelude::CostOfLiving),
                schema.create_table_from_entity(entity::prelude::Guide),
                schema.create_table_from_entity(entity::prelude::Housing),
                schema.create_table_from_entity(entity::prelude::Metrics),
                schema.create_table_from_entity(entity::prelude::TransportBudget),
                schema.create_table_from_entity(entity::prelude::University),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (eurostat_code, english_country) in self.cities {
            setup
                .city()
                .insert_mock_city_in(&eurostat_code, english_country.as_deref())
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
