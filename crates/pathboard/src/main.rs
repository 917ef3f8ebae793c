//! pathboard - Learning Roadmap Viewer

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pathboard_core::RoadmapStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pathboard",
    version,
    about = "Learning Roadmap Viewer",
    long_about = "Serves learning roadmaps as interactive flowcharts with progress\n\
                  tracking and reviews.\n\
                  \n\
                  Examples:\n\
                    pathboard serve                   # Serve API + frontend if built\n\
                    pathboard serve --port 8080       # Custom port\n\
                    pathboard list                    # Print loaded roadmaps\n\
                  \n\
                  Web Frontend Workflow:\n\
                    # Option 1: Production (single command)\n\
                    trunk build --release             # Compile frontend once\n\
                    pathboard serve                   # Serves API + static frontend\n\
                    \n\
                    # Option 2: Development (hot reload)\n\
                    pathboard serve --port 8080       # Terminal 1: API server\n\
                    trunk serve --port 3333           # Terminal 2: Frontend dev server\n\
                  \n\
                  Environment Variables:\n\
                    PATHBOARD_CONTENT_DIR             # Override roadmap content directory\n\
                    PATHBOARD_NO_COLOR                # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Directory of roadmap JSON files (default: ./content)
    #[arg(long, env = "PATHBOARD_CONTENT_DIR", global = true)]
    content_dir: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "PATHBOARD_NO_COLOR", global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server (default)
    Serve {
        /// Port for web server
        #[arg(long, default_value = "3333")]
        port: u16,
    },
    /// Print loaded roadmaps and exit
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let content_dir = cli
        .content_dir
        .or_else(|| std::env::current_dir().ok().map(|d| d.join("content")))
        .context("Could not determine content directory")?;

    let (store, report) = RoadmapStore::load_from_dir(&content_dir)
        .with_context(|| format!("Failed to load roadmaps from {}", content_dir.display()))?;

    for error in &report.errors {
        warn!("{}", error);
    }

    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Serve { port: 3333 }) {
        Mode::Serve { port } => {
            pathboard_web::run(Arc::new(store), port).await?;
        }
        Mode::List { json } => {
            println!("{}", cli::format_roadmap_table(&store.list(), json, no_color));
        }
    }

    Ok(())
}
