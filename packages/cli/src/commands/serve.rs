use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use storefront_figma::ACCESS_TOKEN_ENV;
use storefront_server::{serve as run_server, AppState, ServerConfig};
use tracing::warn;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory with the static catalogue files (overrides config)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Config file (defaults to storefront.config.json in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn serve(args: ServeArgs, cwd: &Path) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load_file(path)?,
        None => ServerConfig::load(cwd)?,
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if config.data_dir.is_relative() {
        config.data_dir = cwd.join(&config.data_dir);
    }

    let access_token = std::env::var(ACCESS_TOKEN_ENV).ok().filter(|t| !t.is_empty());
    if access_token.is_none() {
        warn!("{} is not set; theme CSS requests will fail", ACCESS_TOKEN_ENV);
    }

    println!("{}", "🛍  Starting storefront server...".bright_blue().bold());
    println!("   Listening on http://{}", config.address());

    let state = AppState::from_config(&config, access_token);
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(&config, state))
}
