//! Workflow file discovery

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

/// Extensions recognised as workflow files
pub const WORKFLOW_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// List the workflow files directly inside `dir`
///
/// Subdirectories are skipped, not descended into. The result is sorted
/// so reports are stable across platforms.
pub fn discover_workflows(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.exists() {
        bail!("directory '{}' does not exist", dir.display());
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read directory '{}'", dir.display()))?;
        if entry.file_type()?.is_dir() {
            continue;
        }

        let path = entry.path();
        if is_workflow_file(&path) {
            files.push(path);
        } else {
            log::debug!("skipping {}", path.display());
        }
    }

    files.sort();
    log::info!("found {} workflow file(s) in {}", files.len(), dir.display());
    Ok(files)
}

fn is_workflow_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| WORKFLOW_EXTENSIONS.contains(&ext))
}
