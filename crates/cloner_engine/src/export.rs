use std::path::{Path, PathBuf};

use serde_json::json;

use cloner_logging::cloner_info;

use crate::filename::deterministic_stem;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::preview::page_title;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub code_path: PathBuf,
    pub html_path: PathBuf,
    pub manifest_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("nothing to export")]
    Empty,
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Writes `code` and `html` next to a JSON manifest describing them.
///
/// All three files share one stem, so exporting the same result twice
/// overwrites the earlier export.
pub fn export_result(
    output_dir: &Path,
    url: &str,
    code: &str,
    html: &str,
    exported_utc: &str,
) -> Result<ExportSummary, ExportError> {
    if code.is_empty() && html.is_empty() {
        return Err(ExportError::Empty);
    }

    let title = page_title(html);
    let stem = deterministic_stem(title.as_deref(), url);
    let code_name = format!("{stem}.tsx");
    let html_name = format!("{stem}.html");

    let writer = AtomicFileWriter::new(output_dir);
    let code_path = writer.write(&code_name, code)?;
    let html_path = writer.write(&html_name, html)?;

    let manifest = json!({
        "url": url,
        "title": title,
        "exported_utc": exported_utc,
        "files": {
            "code": code_name,
            "html": html_name,
        },
        "code_bytes": code.len(),
        "html_bytes": html.len(),
    });
    let manifest_path = writer.write(&format!("{stem}.json"), &manifest.to_string())?;

    cloner_info!("Exported {} to {:?}", url, writer.dir());
    Ok(ExportSummary {
        code_path,
        html_path,
        manifest_path,
    })
}
