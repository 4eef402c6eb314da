//! Virtual environment discovery and Python interpreter resolution.
//!
//! A native launcher cannot source `bin/activate` into its own process, so
//! activation is reproduced by its effect on the child: `VIRTUAL_ENV`, a
//! `PATH` that leads with the venv bin directory, and no `PYTHONHOME`.

use anyhow::Result;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

/// An activatable virtual environment found under the app directory.
#[derive(Debug, Clone)]
pub struct VenvActivation {
    pub venv_dir: PathBuf,
    pub bin_dir: PathBuf,
    pub python: PathBuf,
}

/// Location of the activation artifact inside a venv.
pub fn activate_script_path(venv_dir: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        venv_dir.join("Scripts").join("activate.bat")
    } else {
        venv_dir.join("bin").join("activate")
    }
}

fn venv_bin_dir(venv_dir: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        venv_dir.join("Scripts")
    } else {
        venv_dir.join("bin")
    }
}

/// Path to the interpreter inside a venv.
pub fn venv_python_path(venv_dir: &Path) -> PathBuf {
    if cfg!(target_os = "windows") {
        venv_dir.join("Scripts").join("python.exe")
    } else {
        venv_dir.join("bin").join("python")
    }
}

/// Look for an activatable venv under the app directory.
///
/// Absence is not an error; the caller falls through to the system
/// interpreter. A venv directory missing its activation artifact or its
/// interpreter counts as absent and is only logged at debug level.
pub fn discover_venv(app_dir: &Path, venv_dir_name: &str) -> Option<VenvActivation> {
    let venv_dir = app_dir.join(venv_dir_name);
    let activate = activate_script_path(&venv_dir);
    if !activate.exists() {
        if venv_dir.exists() {
            tracing::debug!("{} has no activation artifact, ignoring", venv_dir.display());
        }
        return None;
    }
    let python = venv_python_path(&venv_dir);
    if !python.exists() {
        tracing::debug!("{} has no interpreter, ignoring", venv_dir.display());
        return None;
    }
    Some(VenvActivation {
        bin_dir: venv_bin_dir(&venv_dir),
        python,
        venv_dir,
    })
}

impl VenvActivation {
    /// Apply the activation artifact's effect to a child command.
    /// `activate` also unsets PYTHONHOME, so the child must not inherit it.
    pub fn apply_to(&self, cmd: &mut Command) {
        cmd.env("VIRTUAL_ENV", &self.venv_dir);
        cmd.env("PATH", prepend_path(&self.bin_dir));
        cmd.env_remove("PYTHONHOME");
    }
}

/// Current PATH with `dir` prepended.
fn prepend_path(dir: &Path) -> OsString {
    let current = env::var_os("PATH").unwrap_or_default();
    let mut parts = vec![dir.to_path_buf()];
    parts.extend(env::split_paths(&current));
    env::join_paths(parts).unwrap_or(current)
}

/// Resolve the interpreter the server will run under.
///
/// Priority: explicit override, venv interpreter, then `python3`/`python`
/// from PATH.
pub fn resolve_interpreter(
    explicit: Option<&Path>,
    venv: Option<&VenvActivation>,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        // Bare names ("python3.12") are looked up on PATH like a shell would.
        if path.components().count() == 1 && !path.exists() {
            return which::which(path)
                .map_err(|_| anyhow::anyhow!("Python interpreter not found: {}", path.display()));
        }
        if !path.exists() {
            anyhow::bail!("Python interpreter not found: {}", path.display());
        }
        return Ok(path.to_path_buf());
    }
    if let Some(venv) = venv {
        return Ok(venv.python.clone());
    }
    for candidate in ["python3", "python"] {
        if let Ok(found) = which::which(candidate) {
            return Ok(found);
        }
    }
    anyhow::bail!("No Python interpreter found on PATH (tried python3, python)")
}
