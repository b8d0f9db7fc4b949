use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::service::enrichment::EnrichmentEngine;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub enrichment: Arc<EnrichmentEngine>,
}
