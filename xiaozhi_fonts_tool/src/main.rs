use anyhow::*;
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand, ValueEnum};
use log::{error, info};
use std::{path::PathBuf, result::Result::Ok};
use xiaozhi_fonts::{
    request::{DEFAULT_BPP, DEFAULT_FONT_SIZE},
    ArtifactType, FontFamily, GenerationRequest, ToolConfig,
};

mod batch;
mod runner;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// A TOML file overriding the default font paths and batch list
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, ValueEnum)]
enum ArtifactArg {
    /// LVGL font source module
    #[value(name = "lvgl", alias = "bitmap-source")]
    Lvgl,
    /// Rasterized glyph dump for inspection
    #[value(name = "dump", alias = "debug-dump")]
    Dump,
    /// C header mapping icon names to UTF-8 literals (icon font only)
    #[value(name = "utf8", alias = "header")]
    Utf8,
}
impl From<ArtifactArg> for ArtifactType {
    fn from(value: ArtifactArg) -> Self {
        match value {
            ArtifactArg::Lvgl => ArtifactType::BitmapSource,
            ArtifactArg::Dump => ArtifactType::DebugDump,
            ArtifactArg::Utf8 => ArtifactType::Header,
        }
    }
}

#[derive(Args)]
struct FontArgs {
    #[arg(value_enum, value_name = "TYPE")]
    artifact: ArtifactArg,
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    font_size: u32,
    #[arg(long, default_value_t = DEFAULT_BPP)]
    bpp: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Generates an artifact from the PuHuiTi text font
    Text(FontArgs),
    /// Generates an artifact from the Font Awesome icon font
    Icon(FontArgs),
    /// Generates the text font bitmap source for every configured size
    Batch,
}

fn make_request(family: FontFamily, args: &FontArgs) -> Result<GenerationRequest, clap::Error> {
    GenerationRequest::new(family, args.artifact.into())
        .map(|request| request.font_size(args.font_size).bpp(args.bpp))
        .map_err(|e| Cli::command().error(ErrorKind::InvalidValue, e))
}

/// Validates the command line into a generation request, or `None` for a batch run.
fn resolve_request(cli: &Cli) -> Result<Option<GenerationRequest>, clap::Error> {
    match &cli.command {
        Commands::Text(args) => make_request(FontFamily::Text, args).map(Some),
        Commands::Icon(args) => make_request(FontFamily::Icon, args).map(Some),
        Commands::Batch => Ok(None),
    }
}

/// Returns whether every requested artifact was generated.
fn execute(cli: &Cli, request: Option<GenerationRequest>) -> Result<bool> {
    let config = match &cli.config {
        Some(path) => ToolConfig::load(path)?,
        None => ToolConfig::default(),
    };

    match request {
        Some(request) => {
            let (artifact, family) = (request.artifact, request.family);
            let path = xiaozhi_fonts::generate(&config, &request, &runner::SystemRunner)
                .with_context(|| format!("Could not generate {artifact} artifact ({family} font)"))?;
            info!("Generated '{}' successfully.", path.display());
            Ok(true)
        }
        None => {
            let outcomes = batch::run_batch(&config, &runner::SystemRunner);
            let failed = batch::failed_configurations(&outcomes);
            let succeeded = outcomes.len() - failed.len();
            info!("Batch finished: {succeeded} succeeded, {} failed.", failed.len());
            for (font_size, bpp) in &failed {
                error!("Failed configuration: {font_size}px, {bpp} bpp");
            }
            Ok(failed.is_empty())
        }
    }
}
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let request = resolve_request(&cli).unwrap_or_else(|e| e.exit());
    match execute(&cli, request) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error encountered: {:?}", e);
            std::process::exit(1);
        }
    }
}
