use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use storefront_figma::{fetch_theme_css, FigmaClient};
use storefront_server::ServerConfig;
use storefront_tokens::{generate_css, TokenOptions, VariablesExport};
use tracing::info;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Saved variable export (JSON) to convert
    #[arg(short, long, conflicts_with = "file_key", required_unless_present = "file_key")]
    pub input: Option<PathBuf>,

    /// Fetch the export for this Figma file (needs FIGMA_ACCESS_TOKEN)
    #[arg(short = 'k', long)]
    pub file_key: Option<String>,

    /// Write CSS here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file (defaults to storefront.config.json in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn generate(args: GenerateArgs, cwd: &Path) -> Result<()> {
    let config = match &args.config {
        Some(path) => ServerConfig::load_file(path)?,
        None => ServerConfig::load(cwd)?,
    };
    let options = TokenOptions::default().with_font_families(config.font_families.clone());

    let css = match (&args.input, &args.file_key) {
        (Some(input), _) => generate_from_file(&cwd.join(input), &options)?,
        (None, Some(file_key)) => {
            let client = FigmaClient::from_env()
                .with_api_base(config.figma_api_base.clone())
                .with_timeout(std::time::Duration::from_secs(config.request_timeout_secs));
            fetch_theme_css(&client, file_key, &options)?
        }
        (None, None) => return Err(anyhow!("Provide --input or --file-key")),
    };

    match &args.output {
        Some(output) => {
            let output = cwd.join(output);
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output, &css).with_context(|| format!("Cannot write {}", output.display()))?;
            eprintln!("  {} theme CSS → {}", "✓".green(), output.display());
        }
        None => print!("{}", css),
    }

    Ok(())
}

fn generate_from_file(path: &Path, options: &TokenOptions) -> Result<String> {
    info!(path = %path.display(), "Reading variable export");
    let json = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let export = VariablesExport::from_json(&json)
        .with_context(|| format!("Invalid variable export in {}", path.display()))?;
    Ok(generate_css(&export, options)?)
}
