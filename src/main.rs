use std::path::PathBuf;

use clap::{Parser, Subcommand};

use dockbridge_release::compat::catalogs::ModrinthCatalog;
use dockbridge_release::compat::resolver::{CompatibilityList, CompatibilityResolver};
use dockbridge_release::config::BuildConfig;
use dockbridge_release::logging::{self, LogOptions};
use dockbridge_release::manifest::PublishManifest;
use dockbridge_release::version::date::DatePart;
use dockbridge_release::version::resolver::{PluginVersionResolver, resolve_plugin_version};
use dockbridge_release::version::sources::GitRepository;

#[derive(Parser)]
#[command(name = "dockbridge-release")]
#[command(version, about = "Computes build versions and compatible platform versions")]
struct Cli {
    /// Compute a release version (same as DOCKBRIDGE_RELEASE=true)
    #[arg(long, global = true)]
    release: bool,

    /// Git checkout to read tags and revision from
    #[arg(long, global = true, default_value = ".")]
    workdir: PathBuf,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the build version
    Version,
    /// Print the compatible platform versions, one per line
    Compat,
    /// Print the publish manifest as JSON
    Manifest,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = logging::init(&LogOptions {
        file: cli.log_file.as_deref(),
        json: cli.log_json,
    })?;

    let mut config = BuildConfig::from_env();
    config.release |= cli.release;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, &config, cli.workdir))
}

async fn run(command: Command, config: &BuildConfig, workdir: PathBuf) -> anyhow::Result<()> {
    let date = DatePart::today_utc();

    match command {
        Command::Version => {
            println!("{}", version(config, workdir, &date)?);
        }
        Command::Compat => {
            for v in compatibility(config).await.versions {
                println!("{}", v);
            }
        }
        Command::Manifest => {
            let version = version(config, workdir, &date)?;
            let compatibility = compatibility(config).await;
            let manifest = PublishManifest::new(config, version, compatibility);
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
    }

    Ok(())
}

fn version(config: &BuildConfig, workdir: PathBuf, date: &DatePart) -> anyhow::Result<String> {
    let resolver = PluginVersionResolver::new(GitRepository::new(workdir));
    Ok(resolve_plugin_version(config, &resolver, date)?)
}

async fn compatibility(config: &BuildConfig) -> CompatibilityList {
    let resolver = CompatibilityResolver::new(ModrinthCatalog::from_config(&config.catalog));
    resolver
        .resolve(config.game_versions_override.as_deref())
        .await
}
