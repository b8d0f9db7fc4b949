use std::sync::Arc;

use relocity::server::{
    config::Config,
    dataset::loader::DatasetLoader,
    error::Error,
    model::app::AppState,
    router, startup,
    service::enrichment::EnrichmentEngine,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(e) = run().await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let loader = DatasetLoader::from_config(&config);
    let enrichment = Arc::new(EnrichmentEngine::from_loader(&loader));

    let app = router::routes().with_state(AppState { db, enrichment });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
