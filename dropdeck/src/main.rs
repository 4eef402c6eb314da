mod cli;
mod commands;
mod env;
mod observability;
mod runner;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        // Bare `dropdeck` is the double-click path: launch from the current
        // directory with every default.
        None => {
            let code = commands::launch::launch(
                cli::DEFAULT_APP_DIR,
                cli::DEFAULT_ENTRY,
                None,
                None,
                None,
                None,
                false,
                false,
            )?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Some(Commands::Launch {
            app_dir,
            entry,
            public_host,
            port,
            python,
            venv_dir,
            skip_venv,
            no_pause,
        }) => {
            let code = commands::launch::launch(
                &app_dir,
                &entry,
                public_host,
                port,
                python,
                venv_dir,
                skip_venv,
                no_pause,
            )?;
            if code != 0 {
                std::process::exit(code);
            }
        }
        Some(Commands::Check {
            app_dir,
            entry,
            python,
            venv_dir,
        }) => {
            commands::check::check(&app_dir, &entry, python, venv_dir)?;
        }
        Some(Commands::Plan {
            app_dir,
            entry,
            public_host,
            port,
            python,
            venv_dir,
            skip_venv,
        }) => {
            commands::plan::plan(
                &app_dir,
                &entry,
                public_host,
                port,
                python,
                venv_dir,
                skip_venv,
            )?;
        }
    }

    Ok(())
}
