use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use store_version_check::config::{self, CheckerConfig};
use store_version_check::logging;
use store_version_check::platform::{LocalPackage, Platform};
use store_version_check::version::resolver::VersionStatusResolver;
use store_version_check::version::status::VersionStatus;

#[derive(Parser)]
#[command(name = "store-version-check")]
#[command(version, about = "Check the App Store or Google Play for a newer app release")]
struct Cli {
    /// Write logs to a file instead of stderr (defaults to the data directory)
    #[arg(long, global = true, num_args = 0..=1, value_name = "PATH")]
    log_file: Option<Option<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the installed version with the store's published version
    Check {
        /// Platform of the app: android, ios or unsupported (defaults to the host)
        #[arg(long)]
        platform: Option<Platform>,

        /// Installed version, e.g. 1.4.2 or 1.4.2.debug
        #[arg(long)]
        local_version: String,

        /// Bundle id or package name of the installed app
        #[arg(long)]
        package_id: String,

        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _guard = match cli.log_file {
        Some(path) => {
            let path = path.unwrap_or_else(config::log_path);
            Some(
                logging::init_file(&path)
                    .with_context(|| format!("failed to open log file {:?}", path))?,
            )
        }
        None => {
            logging::init_stderr();
            None
        }
    };

    match cli.command {
        Command::Check {
            platform,
            local_version,
            package_id,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => CheckerConfig::load(&path)?,
                None => CheckerConfig::default(),
            };
            let platform = platform.unwrap_or_else(Platform::current);
            let package = LocalPackage::new(local_version, package_id);

            let status = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(check(&config, platform, &package))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", describe(status.as_ref()));
            }
            Ok(())
        }
    }
}

async fn check(
    config: &CheckerConfig,
    platform: Platform,
    package: &LocalPackage,
) -> anyhow::Result<Option<VersionStatus>> {
    let resolver = VersionStatusResolver::from_config(config)?;
    let identifier = package.store_identifier(platform, &config.identifiers);

    let status = resolver
        .resolve(platform, &package.version, identifier)
        .await
        .with_context(|| format!("failed to check {} for updates", identifier))?;
    Ok(status)
}

fn describe(status: Option<&VersionStatus>) -> String {
    match status {
        Some(status) if status.can_update() => format!(
            "Update available: {} -> {}\n{}",
            status.local_version(),
            status.store_version(),
            status.store_link()
        ),
        Some(status) => format!(
            "Up to date: {} (store has {})",
            status.local_version(),
            status.store_version()
        ),
        None => "No update information available".to_string(),
    }
}
