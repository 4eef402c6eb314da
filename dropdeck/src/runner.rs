//! Server process invocation and the exit pause.

use anyhow::{Context, Result};
use dropdeck_core::config::env_keys;
use dropdeck_core::host::PublicHost;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::env::builder::VenvActivation;

/// Build the server command: interpreter plus entry script, app dir as cwd,
/// inherited stdio, activation effect and PUBLIC_HOST in the environment.
///
/// The entry script is the only argument; the server itself receives none.
pub fn build_command(
    interpreter: &Path,
    entry: &Path,
    app_dir: &Path,
    public_host: &PublicHost,
    venv: Option<&VenvActivation>,
) -> Command {
    let mut cmd = Command::new(interpreter);
    cmd.arg(entry);
    cmd.current_dir(app_dir);
    if let Some(venv) = venv {
        venv.apply_to(&mut cmd);
    }
    cmd.env(env_keys::CHILD_PUBLIC_HOST, public_host.as_str());
    cmd
}

/// Spawn the server and wait for it to exit.
///
/// The child owns the terminal while it runs. Its exit status is returned
/// for reporting, never turned into a launcher error.
pub fn run_to_completion(cmd: &mut Command) -> Result<ExitStatus> {
    let program = cmd.get_program().to_os_string();
    let mut child = cmd
        .spawn()
        .with_context(|| format!("Failed to start {}", program.to_string_lossy()))?;
    let status = child.wait().context("Failed to wait for server process")?;
    Ok(status)
}

/// Block for an Enter keypress so trailing output stays readable before the
/// window closes. Skipped when pausing is disabled or stdin is not a
/// terminal.
pub fn pause_before_exit(no_pause: bool) {
    if no_pause || !io::stdin().is_terminal() {
        return;
    }
    print!("Press Enter to close...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
