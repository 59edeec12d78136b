use super::{read_nfo, LoadedNfo};
use crate::output::{Output, Status};
use color_eyre::eyre::Context;
use color_eyre::Result;
use media_nfo_config::Config;
use media_nfo_core::{movie_to_nfo, tv_show_to_nfo, SerializeOptions};
use media_nfo_models::KodiVersion;
use serde_json::json;
use std::path::Path;

pub async fn run_convert(
    file: &Path,
    to: Option<KodiVersion>,
    out: Option<&Path>,
    config: &Config,
    output: &Output,
) -> Result<()> {
    let version = to.unwrap_or(config.nfo.kodi_version);
    let options = SerializeOptions {
        indent: config.nfo.indent,
        declaration: config.nfo.xml_declaration,
    };

    let nfo = read_nfo(file).await?;
    let bytes = match &nfo {
        LoadedNfo::Movie(movie) => movie_to_nfo(movie, version, &options)?,
        LoadedNfo::Show(show) => tv_show_to_nfo(show, version, &options)?,
    };
    tracing::info!(file = %file.display(), %version, bytes = bytes.len(), "Converted NFO");

    match out {
        Some(path) => {
            tokio::fs::write(path, &bytes)
                .await
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            output.status(
                Status::Ok,
                format!(
                    "Wrote {} '{}' for Kodi {} to {}",
                    nfo.media_type().root_tag(),
                    nfo.title(),
                    version,
                    path.display()
                ),
            );
            output.document(&json!({
                "file": file.display().to_string(),
                "out": path.display().to_string(),
                "type": nfo.media_type().root_tag(),
                "version": version,
                "bytes": bytes.len(),
            }));
        }
        None => output.nfo(&bytes).await?,
    }

    Ok(())
}
