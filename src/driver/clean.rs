//! Removal of generated case files.

use std::path::Path;

use crate::models::CaseIndex;

/// Removes every `input{N}.txt` / `output{N}.txt` in `dir`.
///
/// Other files are left alone. A missing directory counts as already clean.
pub fn clean(dir: &Path) -> Result<CleanStats, std::io::Error> {
    let mut stats = CleanStats::default();
    if !dir.exists() {
        return Ok(stats);
    }

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if CaseIndex::from_file_name(&name).is_none() || !entry.file_type()?.is_file() {
            continue;
        }

        stats.total_bytes += entry.metadata().map(|m| m.len()).unwrap_or(0);
        std::fs::remove_file(entry.path())?;
        stats.files += 1;
        tracing::debug!(file = %name, "removed case file");
    }

    Ok(stats)
}

/// What a [`clean`] removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Number of case files removed.
    pub files: usize,
    /// Total size in bytes.
    pub total_bytes: u64,
}

impl CleanStats {
    /// Format total size as a human-readable string.
    pub fn human_size(&self) -> String {
        let bytes = self.total_bytes;
        if bytes < 1024 {
            format!("{bytes} B")
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KiB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MiB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
