use anyhow::{Context, Result};
use std::path::Path;

/// Open an exported report with the system's default viewer
///
/// # Errors
/// Returns error if the path cannot be resolved or no viewer is available
pub fn open_path(path: &Path) -> Result<()> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let target = absolute.to_string_lossy();
    webbrowser::open(&target).with_context(|| format!("Failed to open {}", target))?;
    Ok(())
}
