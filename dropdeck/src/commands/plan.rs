//! Resolved launch plan as JSON, for scripting and debugging.

use anyhow::Result;
use dropdeck_core::config::{self, env_keys, LaunchConfig};
use dropdeck_core::host::PublicHost;
use dropdeck_core::path_validation::{validate_app_dir, validate_entry_script};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::env::builder;

#[derive(Debug, Serialize)]
struct LaunchPlan {
    app_dir: PathBuf,
    entry: PathBuf,
    interpreter: PathBuf,
    venv: Option<PathBuf>,
    public_host: PublicHost,
    env: Vec<EnvAssignment>,
}

#[derive(Debug, Serialize)]
struct EnvAssignment {
    key: String,
    value: String,
}

/// Print what `launch` would do, without executing anything.
pub fn plan(
    app_dir: &str,
    entry: &str,
    public_host: Option<String>,
    port: Option<u16>,
    python: Option<String>,
    venv_dir: Option<String>,
    skip_venv: bool,
) -> Result<()> {
    let plan = resolve(app_dir, entry, public_host, port, python, venv_dir, skip_venv)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn resolve(
    app_dir: &str,
    entry: &str,
    public_host: Option<String>,
    port: Option<u16>,
    python: Option<String>,
    venv_dir: Option<String>,
    skip_venv: bool,
) -> Result<LaunchPlan> {
    let app_dir = validate_app_dir(Path::new(app_dir))?;
    config::load_dotenv_from_dir(&app_dir);
    let cfg = LaunchConfig::from_env().with_cli_overrides(public_host, port, python, venv_dir, false);

    let entry_path = validate_entry_script(&app_dir, entry)?;

    let venv = if skip_venv {
        None
    } else {
        builder::discover_venv(&app_dir, cfg.effective_venv_dir())
    };
    let interpreter = builder::resolve_interpreter(cfg.python.as_deref(), venv.as_ref())?;

    let host = match &cfg.public_host {
        Some(raw) => PublicHost::parse(raw)?,
        None => PublicHost::detect(cfg.effective_port()),
    };

    let mut env = vec![EnvAssignment {
        key: env_keys::CHILD_PUBLIC_HOST.to_string(),
        value: host.as_str().to_string(),
    }];
    if let Some(v) = &venv {
        env.push(EnvAssignment {
            key: "VIRTUAL_ENV".to_string(),
            value: v.venv_dir.display().to_string(),
        });
    }

    Ok(LaunchPlan {
        app_dir,
        entry: entry_path,
        interpreter,
        venv: venv.map(|v| v.venv_dir),
        public_host: host,
        env,
    })
}
