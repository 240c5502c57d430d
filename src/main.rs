use std::path::PathBuf;

use clap::Parser;

use cshell::app::App;
use cshell::backend::open_default_backend;
use cshell::config::Config;
use cshell::error::AppResult;
use cshell::logging::init_logging;

/// Terminal shell for the study community: routed pages, toasts and the profile screen.
#[derive(Debug, Parser)]
#[command(name = "cshell", version)]
struct Args {
    /// Config file; defaults to the per-user config location.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON data file for the local store; demo data when omitted.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Route to open first, e.g. /profile.
    #[arg(long)]
    route: Option<String>,
    /// Write logs to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Args::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> AppResult<()> {
    let mut config = match args.config.as_deref() {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(route) = args.route {
        config.navigation.initial_route = route;
    }
    init_logging(&config.logging, args.log_file.as_deref())?;

    let data_path = args.data.or_else(|| config.backend.data_path.clone());
    let backend = open_default_backend(data_path.as_deref())?;
    let mut app = App::new_with_config(config, backend)?;

    app.run().await
}
