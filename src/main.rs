use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_standings::clock::SystemClock;
use league_standings::config::AppConfig;
use league_standings::models::{
    Fixture, FixtureParticipant, Season, Sport, SportCategory, Stage, Team,
};
use league_standings::standings::filters::StandingsFilters;
use league_standings::standings::service::StandingsService;
use league_standings::store::{JsonlWriter, LeagueStore, StoreConfig, Table};

#[derive(Parser)]
#[command(name = "league-standings")]
#[command(about = "Standings and navigation service for a collegiate sports league")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print standings for a selection
    Standings {
        #[arg(long)]
        season_id: Option<i64>,

        #[arg(long)]
        sport_id: Option<i64>,

        #[arg(long)]
        sport_category_id: Option<i64>,

        #[arg(long)]
        stage_id: Option<i64>,

        /// Competition phase (group_stage, playins, playoffs, finals)
        #[arg(long)]
        competition_stage: Option<String>,
    },

    /// Print navigation options for a selection
    Navigation {
        #[arg(long)]
        season_id: Option<i64>,

        #[arg(long)]
        sport_id: Option<i64>,

        #[arg(long)]
        sport_category_id: Option<i64>,
    },

    /// Import a JSON bundle into the data directory
    Import {
        /// Path to the bundle file
        path: String,
    },
}

/// All tables in one file, each section optional.
#[derive(Debug, Default, Deserialize)]
struct ImportBundle {
    #[serde(default)]
    seasons: Vec<Season>,
    #[serde(default)]
    sports: Vec<Sport>,
    #[serde(default)]
    sport_categories: Vec<SportCategory>,
    #[serde(default)]
    stages: Vec<Stage>,
    #[serde(default)]
    fixtures: Vec<Fixture>,
    #[serde(default)]
    fixture_participants: Vec<FixtureParticipant>,
    #[serde(default)]
    teams: Vec<Team>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting league-standings v{}", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load_or_default(Path::new(&cli.config))?;
    let data_dir = cli
        .data_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let store = LeagueStore::new(StoreConfig::new(data_dir));

    let service = StandingsService::new(
        Arc::new(store.clone()),
        Arc::new(SystemClock),
        config.standings.default_competition_stage,
    );

    match cli.command {
        Commands::Serve { host, port } => {
            let state = league_standings::api::state::AppState {
                service: Arc::new(service),
            };
            let app = league_standings::api::build_router(state);
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Standings {
            season_id,
            sport_id,
            sport_category_id,
            stage_id,
            competition_stage,
        } => {
            let competition_stage = competition_stage
                .as_deref()
                .map(str::parse)
                .transpose()
                .map_err(|e: String| anyhow::anyhow!(e))?;
            let filters = StandingsFilters {
                season_id: season_id.map(Into::into),
                sport_id: sport_id.map(Into::into),
                sport_category_id: sport_category_id.map(Into::into),
                stage_id: stage_id.map(Into::into),
                competition_stage,
            };
            let envelope = service.get_standings(&filters);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Commands::Navigation {
            season_id,
            sport_id,
            sport_category_id,
        } => {
            let filters = StandingsFilters {
                season_id: season_id.map(Into::into),
                sport_id: sport_id.map(Into::into),
                sport_category_id: sport_category_id.map(Into::into),
                ..Default::default()
            };
            let envelope = service.get_standings_navigation(&filters);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Commands::Import { path } => {
            let contents = std::fs::read_to_string(&path)?;
            let bundle: ImportBundle = serde_json::from_str(&contents)?;

            import_table(&store, Table::Season, &bundle.seasons)?;
            import_table(&store, Table::Sport, &bundle.sports)?;
            import_table(&store, Table::SportCategory, &bundle.sport_categories)?;
            import_table(&store, Table::Stage, &bundle.stages)?;
            import_table(&store, Table::Fixture, &bundle.fixtures)?;
            import_table(
                &store,
                Table::FixtureParticipant,
                &bundle.fixture_participants,
            )?;
            import_table(&store, Table::Team, &bundle.teams)?;

            println!("Imported bundle from {}", path);
        }
    }

    Ok(())
}

fn import_table<T: serde::Serialize>(
    store: &LeagueStore,
    table: Table,
    records: &[T],
) -> Result<()> {
    if records.is_empty() {
        return Ok(());
    }
    JsonlWriter::for_table(store.config(), table).write_all(records)?;
    tracing::info!(table = %table.filename(), count = records.len(), "imported records");
    Ok(())
}
