use std::path::Path;

use anyhow::{Context, Result};

/// Open the finished report with the system default viewer.
///
/// # Errors
/// Returns error if the path cannot be resolved or no handler is available
pub fn open_report(path: &Path) -> Result<()> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve report path {}", path.display()))?;
    let target = format!("file://{}", absolute.display());
    webbrowser::open(&target)
        .with_context(|| format!("Failed to open report at {}", absolute.display()))?;
    Ok(())
}
