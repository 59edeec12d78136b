use crate::output::{Output, Status};
use crate::ConfigCommands;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use media_nfo_config::{Config, PathManager};
use serde_json::json;
use std::path::Path;

pub async fn run_config(cmd: ConfigCommands, config_file: &Path, paths: &PathManager, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config_file, paths, output),
        ConfigCommands::Init { force } => init_config(config_file, force, paths, output),
    }
}

fn show_config(config_file: &Path, paths: &PathManager, output: &Output) -> Result<()> {
    let exists = config_file.exists();
    let config = Config::load_or_default(config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;

    if !exists {
        output.status(
            Status::Warning,
            format!(
                "Configuration file not found at {}, showing defaults. Run 'nfotool config init' to create it.",
                config_file.display()
            ),
        );
    }

    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(stderr)".to_string());
    output.table(
        &config_file.display().to_string(),
        "config",
        [
            ("nfo.kodi_version", config.nfo.kodi_version.to_string()),
            ("nfo.indent", config.nfo.indent.to_string()),
            ("nfo.xml_declaration", config.nfo.xml_declaration.to_string()),
            ("logging.level", config.logging.level.clone()),
            ("logging.json", config.logging.json.to_string()),
            ("logging.file", log_file),
            ("--log-file target", paths.log_file().display().to_string()),
        ],
    );
    output.document(&json!({
        "file": config_file.display().to_string(),
        "exists": exists,
        "log_dir": paths.log_dir().display().to_string(),
        "config": serde_json::to_value(&config)?,
    }));

    Ok(())
}

fn init_config(config_file: &Path, force: bool, paths: &PathManager, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        output.status(
            Status::Warning,
            format!(
                "Configuration file already exists at {} (use --force to overwrite)",
                config_file.display()
            ),
        );
        output.document(&json!({ "file": config_file.display().to_string(), "written": false }));
        return Ok(());
    }

    // The default location also gets the log directory next to it
    if config_file == paths.config_file() {
        paths
            .ensure_directories()
            .map_err(|e| eyre!("Failed to create {}: {}", paths.config_dir().display(), e))?;
    }

    Config::default()
        .save_to_file(config_file)
        .map_err(|e| eyre!("Failed to write config to {}: {}", config_file.display(), e))?;
    tracing::info!(file = %config_file.display(), "Configuration file written");
    output.status(Status::Ok, format!("Configuration written to {}", config_file.display()));
    output.document(&json!({ "file": config_file.display().to_string(), "written": true }));
    Ok(())
}
