//! Environment validation without launching.

use anyhow::Result;
use dropdeck_core::config::{self, LaunchConfig};
use dropdeck_core::path_validation::{validate_app_dir, validate_entry_script};
use std::path::Path;

use crate::env::builder;

/// Report the state of the app directory, entry script, venv and
/// interpreter; fail when a launch from this directory would fail.
pub fn check(app_dir: &str, entry: &str, python: Option<String>, venv_dir: Option<String>) -> Result<()> {
    let app_dir = validate_app_dir(Path::new(app_dir))?;
    config::load_dotenv_from_dir(&app_dir);
    let cfg = LaunchConfig::from_env().with_cli_overrides(None, None, python, venv_dir, false);

    println!("app dir:     {}", app_dir.display());

    let mut problems = Vec::new();

    match validate_entry_script(&app_dir, entry) {
        Ok(path) => println!("entry:       {}", path.display()),
        Err(e) => {
            println!("entry:       missing");
            problems.push(e.to_string());
        }
    }

    let venv = builder::discover_venv(&app_dir, cfg.effective_venv_dir());
    match &venv {
        Some(v) => println!("venv:        {}", v.venv_dir.display()),
        None => println!("venv:        none (system interpreter)"),
    }

    match builder::resolve_interpreter(cfg.python.as_deref(), venv.as_ref()) {
        Ok(interpreter) => println!("interpreter: {}", interpreter.display()),
        Err(e) => {
            println!("interpreter: not found");
            problems.push(e.to_string());
        }
    }

    if !problems.is_empty() {
        anyhow::bail!("{} problem(s) found: {}", problems.len(), problems.join("; "));
    }
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_check_fails_without_entry() {
        let dir = tempfile::tempdir().unwrap();
        let err = check(dir.path().to_str().unwrap(), "app.py", None, None).unwrap_err();
        assert!(err.to_string().contains("problem(s) found"));
    }

    #[test]
    fn test_check_passes_with_entry_and_explicit_interpreter() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "").unwrap();
        let fake_python = dir.path().join("python-stub");
        fs::write(&fake_python, "").unwrap();

        check(
            dir.path().to_str().unwrap(),
            "app.py",
            Some(fake_python.to_str().unwrap().into()),
            None,
        )
        .unwrap();
    }
}
