// src/main.rs
// Pattern radar - in-memory pattern catalog server

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pattern_radar::{
    PatternStore,
    config::{Overrides, RadarConfig, Settings},
    seed::{self, SampleData},
    web,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "pattern-radar")]
#[command(about = "In-memory pattern catalog with REST and named-operation APIs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    options: Options,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Print the initial catalog as JSON and exit
    Dump,
}

#[derive(Args)]
struct Options {
    /// Interface to bind
    #[arg(long, global = true, env = "PATTERN_RADAR_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true, env = "PATTERN_RADAR_PORT")]
    port: Option<u16>,

    /// Built-in records to load: none, default or extended
    #[arg(long, global = true, env = "PATTERN_RADAR_SAMPLE_DATA")]
    sample_data: Option<SampleData>,

    /// JSON array of patterns to load at startup
    #[arg(long, global = true, env = "PATTERN_RADAR_SEED_FILE")]
    seed_file: Option<PathBuf>,
}

fn build_store(settings: &Settings) -> Result<PatternStore> {
    let store = PatternStore::with_patterns(settings.initial_patterns()?);
    info!(
        sample_data = %settings.sample_data,
        patterns = store.len(),
        "Pattern store ready"
    );
    Ok(store)
}

async fn run_server(settings: Settings) -> Result<()> {
    let store = Arc::new(build_store(&settings)?);
    let state = web::state::AppState::new(store);

    web::serve(state, &settings.bind_address()).await
}

fn run_dump(settings: Settings) -> Result<()> {
    let store = build_store(&settings)?;
    println!("{}", seed::catalog_json(store.list_all())?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv(); // Load .env from current directory

    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let overrides = Overrides {
        host: cli.options.host,
        port: cli.options.port,
        sample_data: cli.options.sample_data,
        seed_file: cli.options.seed_file,
    };
    let settings = Settings::resolve(RadarConfig::load(), overrides);

    match cli.command {
        None | Some(Commands::Serve) => {
            run_server(settings).await?;
        }
        Some(Commands::Dump) => {
            run_dump(settings)?;
        }
    }

    Ok(())
}
