use clap::{Parser, Subcommand};
use matfarm_cli::{commands, dir_watcher};
use matfarm_core::context::AppConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Track material farming from game journals")]
struct Cli {
    /// Config file to use instead of the stored one
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a journal file through the tracker
    Replay {
        #[arg(short, long)]
        path: PathBuf,
        /// Print every frame instead of just the last one
        #[arg(long)]
        all_frames: bool,
    },
    /// Follow the newest journal live
    Watch {
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// List the known hotspots
    Hotspots {
        #[arg(short, long)]
        system: Option<String>,
    },
    /// Show the active configuration
    Config {
        /// Write it back out, to --config if given
        #[arg(long)]
        save: bool,
    },
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    // If MATFARM_LOG_PATH is set, append to that file
    if let Ok(path) = std::env::var("MATFARM_LOG_PATH")
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return;
    }

    // Fallback to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, String> {
    let config = match path {
        Some(path) => AppConfig::from_file(path),
        None => AppConfig::load(),
    };
    config.map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    init_logging();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    let result = match &cli.command {
        Commands::Replay { path, all_frames } => commands::replay(path, &config, *all_frames),
        Commands::Watch { dir } => {
            let dir = dir.clone().unwrap_or_else(|| config.journal_dir());
            dir_watcher::watch(&dir, &config.tracker).await
        }
        Commands::Hotspots { system } => commands::hotspots(system.as_deref(), &config),
        Commands::Config { save: true } => {
            commands::save_settings(&config, cli.config.as_deref())
        }
        Commands::Config { save: false } => commands::show_settings(&config),
    };

    if let Err(err) = &result {
        tracing::error!(error = %err, "Command failed");
    }
    result
}
