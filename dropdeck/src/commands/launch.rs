//! The launch command: venv activation, PUBLIC_HOST export, synchronous
//! run, exit pause.

use anyhow::Result;
use dropdeck_core::config::{self, LaunchConfig};
use dropdeck_core::host::PublicHost;
use dropdeck_core::path_validation::{validate_app_dir, validate_entry_script};
use std::path::Path;

use crate::env::builder;
use crate::runner;

/// Run the server to completion and return its exit code.
///
/// The child's exit status is reported, not propagated as an error: a
/// crashing server still reaches the pause so its output stays on screen.
#[allow(clippy::too_many_arguments)]
pub fn launch(
    app_dir: &str,
    entry: &str,
    public_host: Option<String>,
    port: Option<u16>,
    python: Option<String>,
    venv_dir: Option<String>,
    skip_venv: bool,
    no_pause: bool,
) -> Result<i32> {
    let app_dir = validate_app_dir(Path::new(app_dir))?;

    // .env sits next to the app; already-set shell variables win over it.
    config::load_dotenv_from_dir(&app_dir);

    let cfg = LaunchConfig::from_env().with_cli_overrides(public_host, port, python, venv_dir, no_pause);

    let entry_path = validate_entry_script(&app_dir, entry)?;

    let venv = if skip_venv {
        None
    } else {
        builder::discover_venv(&app_dir, cfg.effective_venv_dir())
    };
    match &venv {
        Some(v) => tracing::info!("virtual environment: {}", v.venv_dir.display()),
        None => tracing::info!("no virtual environment, using system interpreter"),
    }

    let interpreter = builder::resolve_interpreter(cfg.python.as_deref(), venv.as_ref())?;

    let host = match &cfg.public_host {
        Some(raw) => PublicHost::parse(raw)?,
        None => PublicHost::detect(cfg.effective_port()),
    };

    tracing::info!(
        "launching {} with {} (PUBLIC_HOST={})",
        entry_path.display(),
        interpreter.display(),
        host
    );

    let mut cmd = runner::build_command(&interpreter, &entry_path, &app_dir, &host, venv.as_ref());
    let status = runner::run_to_completion(&mut cmd)?;

    match status.code() {
        Some(0) => tracing::info!("server exited cleanly"),
        Some(code) => tracing::warn!("server exited with status {}", code),
        None => tracing::warn!("server terminated by signal"),
    }

    runner::pause_before_exit(cfg.no_pause);

    Ok(status.code().unwrap_or(0))
}
