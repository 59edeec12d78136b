use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use commands::{check, config, convert, show};
use media_nfo_config::{Config, PathManager};
use media_nfo_models::KodiVersion;
use std::path::PathBuf;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "nfotool")]
#[command(about = "nfotool - Read, check and convert Kodi NFO files")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Config file (defaults to ~/.config/nfotool/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Also write logs to the daily rotated file in the nfotool log directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the metadata of an NFO file
    #[command(long_about = "Detect whether FILE describes a movie or a TV show, read it with the version-tolerant reader and print the result as a table or JSON.")]
    Show {
        /// NFO file to read
        file: PathBuf,
    },
    /// Rewrite an NFO file for a specific Kodi version
    #[command(long_about = "Read FILE and write it again in the layout of the requested Kodi version. Without --to the version from the configuration is used; without --out the document is written to stdout.")]
    Convert {
        /// NFO file to read
        file: PathBuf,

        /// Target Kodi version (v16, v17 or v18)
        #[arg(long, value_name = "VERSION")]
        to: Option<KodiVersion>,

        /// Write to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Check that NFO files are well-formed and describe a movie or TV show
    Check {
        /// NFO files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config_path = cli.config.clone().unwrap_or_else(|| paths.config_file());
    let loaded = Config::load_or_default(&config_path);

    // Logging settings come from the config file when it can be read
    let mut logging_settings = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_default();
    if cli.log_file && logging_settings.file.is_none() {
        logging_settings.file = Some(paths.log_file());
    }
    logging::init_logging(cli.verbose, cli.quiet, &logging_settings)
        .map_err(|e| eyre!("{}", e))?;

    // Create output handler
    let output = output::Output::new(cli.output, cli.quiet);

    if let Commands::Config { cmd } = cli.command {
        let cmd = cmd.unwrap_or(ConfigCommands::Show);
        return config::run_config(cmd, &config_path, &paths, &output).await;
    }

    let config = loaded
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_path.display(), e))?;
    config
        .validate()
        .map_err(|e| eyre!("Invalid configuration in {}: {}", config_path.display(), e))?;
    tracing::debug!(config = %config_path.display(), version = %config.nfo.kodi_version, "Configuration loaded");

    match cli.command {
        Commands::Show { file } => show::run_show(&file, &output).await,
        Commands::Convert { file, to, out } => convert::run_convert(&file, to, out.as_deref(), &config, &output).await,
        Commands::Check { files } => check::run_check(&files, &output).await,
        // Handled above, before the config is loaded
        Commands::Config { .. } => Ok(()),
    }
}
