use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use syllabus::course::source::{export_builtin, source_for};
use syllabus::{App, Config, Course, ProgressStore, outline};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "syllabus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Course catalog JSON to load instead of the built-in course
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the curriculum outline
    Chapters {
        /// Wrap width
        #[arg(short, long, default_value_t = 80)]
        width: usize,
    },
    /// Write the built-in course catalog as JSON
    Export {
        /// Output path
        #[arg(short, long, default_value = "course.json")]
        output: PathBuf,
    },
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| "syllabus=info".into())
}

/// Log to stderr for one-shot commands
fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Log to a file while the TUI owns the terminal
fn init_file_logging() -> Result<PathBuf> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(path)
}

fn load_store(catalog: Option<PathBuf>, config: &Config) -> Result<ProgressStore> {
    let catalog = catalog.or_else(|| config.catalog_path.clone());
    let source = source_for(catalog.as_deref());
    ProgressStore::from_source(source.as_ref())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Chapters { width }) => {
            init_stderr_logging();
            let config = Config::load()?;
            let store = load_store(cli.catalog, &config)?;
            print!("{}", outline::render(store.chapters(), width));
        }
        Some(Commands::Export { output }) => {
            init_stderr_logging();
            export_builtin(&output)?;
            println!("Exported course catalog to {}", output.display());
        }
        None => {
            let log_path = init_file_logging()?;
            let config = Config::load()?;
            tracing::info!("Logging to {:?}", log_path);

            let store = load_store(cli.catalog, &config)?;
            let mut app = App::new(config, Course::new(store))?;
            app.run().await?;
        }
    }

    Ok(())
}
