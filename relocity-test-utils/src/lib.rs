pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::city::factory, test_setup_with_city_tables, test_setup_with_tables,
        TestBuilder, TestContext, TestError,
    };
}

/// Creates a [`TestContext`] with tables for the given entities.
#[macro_export]
macro_rules! test_setup_with_tables {
    () => {{
        $crate::TestContext::new().await
    }};

    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestContext`] with the city table, every sub-record table and the universities
/// table.
#[macro_export]
macro_rules! test_setup_with_city_tables {
    () => {{
        $crate::TestBuilder::new().with_city_tables().build().await
    }};
}
