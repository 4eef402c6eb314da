//! Path validation for the app directory and entry script.
//!
//! The entry script is resolved relative to the app directory and must stay
//! inside it; a symlinked or `..`-laden entry that escapes is rejected.

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Canonicalize the app directory, failing with a readable message when it
/// does not exist or is not a directory.
pub fn validate_app_dir(app_dir: &Path) -> Result<PathBuf> {
    let canonical = app_dir
        .canonicalize()
        .map_err(|_| anyhow::anyhow!("App directory does not exist: {}", app_dir.display()))?;
    if !canonical.is_dir() {
        anyhow::bail!("App path is not a directory: {}", app_dir.display());
    }
    Ok(canonical)
}

/// Resolve the entry script under a canonicalized app directory.
pub fn validate_entry_script(app_dir: &Path, entry: &str) -> Result<PathBuf> {
    let full = app_dir.join(entry);
    let canonical = full
        .canonicalize()
        .map_err(|_| anyhow::anyhow!("Entry script does not exist: {}", full.display()))?;
    if !canonical.starts_with(app_dir) {
        anyhow::bail!("Entry script escapes app directory: {}", entry);
    }
    if !canonical.is_file() {
        anyhow::bail!("Entry script is not a file: {}", canonical.display());
    }
    Ok(canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_validate_app_dir_ok() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = validate_app_dir(dir.path()).unwrap();
        assert!(canonical.is_dir());
    }

    #[test]
    fn test_validate_app_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(validate_app_dir(&missing).is_err());
    }

    #[test]
    fn test_validate_entry_script_ok() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "print('hi')\n").unwrap();
        let app_dir = validate_app_dir(dir.path()).unwrap();
        let entry = validate_entry_script(&app_dir, "app.py").unwrap();
        assert!(entry.ends_with("app.py"));
    }

    #[test]
    fn test_validate_entry_script_missing() {
        let dir = tempfile::tempdir().unwrap();
        let app_dir = validate_app_dir(dir.path()).unwrap();
        let err = validate_entry_script(&app_dir, "app.py").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_validate_entry_script_escape_rejected() {
        let outer = tempfile::tempdir().unwrap();
        fs::write(outer.path().join("outside.py"), "").unwrap();
        let inner = outer.path().join("app");
        fs::create_dir(&inner).unwrap();
        let app_dir = validate_app_dir(&inner).unwrap();
        assert!(validate_entry_script(&app_dir, "../outside.py").is_err());
    }

    #[test]
    fn test_validate_entry_script_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("app.py")).unwrap();
        let app_dir = validate_app_dir(dir.path()).unwrap();
        assert!(validate_entry_script(&app_dir, "app.py").is_err());
    }
}
