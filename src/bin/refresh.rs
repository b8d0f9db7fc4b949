use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use relocity::server::{
    config::Config,
    dataset::{loader::DatasetLoader, theme::Topic},
    error::Error,
    service::refresh::RefreshService,
    startup,
    util::city_name::CityNameMapping,
};

#[derive(Parser, Debug)]
#[command(name = "relocity-refresh", version, about = "Relocity batch refresh jobs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
#[command(rename_all = "kebab-case")]
enum Commands {
    /// Create or overwrite cities from the supported-cities file
    SeedCities,
    /// Refresh safety and public transport satisfaction from urban perception exports
    UrbanPerception {
        /// Refresh only this topic (repeatable); every topic when omitted
        #[arg(long = "topic", value_enum)]
        topics: Vec<TopicArg>,
    },
    /// Refresh monthly public transport ticket prices from urban transport exports
    TransportBudget,
    /// Register a city name variant as an alias of a canonical name
    AddAlias { variant: String, canonical: String },
    /// Import aliases from a `canonical;variant, variant` file
    ImportAliases { source: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TopicArg {
    Safety,
    PublicTransport,
}

impl From<TopicArg> for Topic {
    fn from(topic: TopicArg) -> Self {
        match topic {
            TopicArg::Safety => Topic::Safety,
            TopicArg::PublicTransport => Topic::PublicTransport,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        tracing::error!("Refresh job failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> Result<(), Error> {
    match command {
        Commands::AddAlias { variant, canonical } => {
            let mapping_file = Config::city_name_mapping_file_from_env();
            let mut name_mapping = CityNameMapping::load(mapping_file);
            name_mapping.register(&variant, &canonical)?;
            tracing::info!("Registered {:?} as an alias of {:?}", variant, canonical);
            return Ok(());
        }
        Commands::ImportAliases { source } => {
            let mapping_file = Config::city_name_mapping_file_from_env();
            let mut name_mapping = CityNameMapping::load(mapping_file);
            name_mapping.bulk_import(&source)?;
            return Ok(());
        }
        _ => {}
    }

    let config = Config::from_env()?;
    let name_mapping = CityNameMapping::load(&config.city_name_mapping_file);
    let db = startup::connect_to_database(&config).await?;
    let loader = DatasetLoader::from_config(&config);
    let service = RefreshService::new(&db, &loader, &name_mapping);

    match command {
        Commands::SeedCities => {
            service.seed_cities().await?;
        }
        Commands::UrbanPerception { topics } => {
            let topics: Vec<Topic> = if topics.is_empty() {
                Topic::ALL.to_vec()
            } else {
                topics.into_iter().map(Topic::from).collect()
            };
            service.update_urban_perception(&topics).await?;
        }
        Commands::TransportBudget => {
            service.update_transport_budget().await?;
        }
        Commands::AddAlias { .. } | Commands::ImportAliases { .. } => {}
    }

    Ok(())
}
