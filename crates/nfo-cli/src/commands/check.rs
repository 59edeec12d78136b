use super::read_nfo;
use crate::output::{Output, Status};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;
use std::path::PathBuf;

pub async fn run_check(files: &[PathBuf], output: &Output) -> Result<()> {
    let mut results = Vec::with_capacity(files.len());
    let mut failed = 0usize;

    for file in files {
        match read_nfo(file).await {
            Ok(nfo) => {
                tracing::debug!(file = %file.display(), "NFO file is valid");
                output.status(
                    Status::Ok,
                    format!("{}: {} '{}'", file.display(), nfo.media_type().root_tag(), nfo.title()),
                );
                results.push(json!({
                    "file": file.display().to_string(),
                    "ok": true,
                    "type": nfo.media_type().root_tag(),
                }));
            }
            Err(err) => {
                failed += 1;
                tracing::warn!(file = %file.display(), error = %err, "NFO file failed the check");
                output.status(Status::Failed, format!("{}: {:#}", file.display(), err));
                results.push(json!({
                    "file": file.display().to_string(),
                    "ok": false,
                    "error": format!("{:#}", err),
                }));
            }
        }
    }

    output.line(format!("Checked {} files, {} failed", files.len(), failed));
    output.document(&json!({
        "checked": files.len(),
        "failed": failed,
        "files": results,
    }));

    if failed > 0 {
        return Err(eyre!("{} of {} files failed the check", failed, files.len()));
    }
    Ok(())
}
