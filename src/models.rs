use std::path::PathBuf;

use glint::engine::Snapshot;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    File(PathBuf),
    Stdin,
    Inline(String),
    Sample,
}

impl TextSource {
    pub fn label(&self) -> String {
        match self {
            TextSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            TextSource::Stdin => "stdin".to_string(),
            TextSource::Inline(_) => "text".to_string(),
            TextSource::Sample => "sample".to_string(),
        }
    }
}

/// One line of `--trace` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceFrame {
    pub at_ms: u128,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}
