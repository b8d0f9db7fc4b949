use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error};

/// Default log filter when `RUST_LOG` is unset.
static DEFAULT_LOG_FILTER: &str = "relocity=info";

/// Install the global fmt subscriber, filtered by `RUST_LOG`
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .inspect_err(|e| tracing::error!("Failed to connect to database: {}", e))?;

    Migrator::up(&db, None)
        .await
        .inspect_err(|e| tracing::error!("Failed to run database migrations: {}", e))?;

    Ok(db)
}
