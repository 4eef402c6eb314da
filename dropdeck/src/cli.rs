use clap::{Parser, Subcommand};

pub const DEFAULT_APP_DIR: &str = ".";
pub const DEFAULT_ENTRY: &str = "app.py";

/// Dropdeck launcher - prepares the Python environment and runs the LAN share server
#[derive(Parser, Debug)]
#[command(name = "dropdeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Running `dropdeck` with no subcommand launches the server from the
    /// current directory.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the server: activate the venv if present, export PUBLIC_HOST, run, pause
    Launch {
        /// Path to the app directory containing the entry script
        #[arg(value_name = "APP_DIR", default_value = DEFAULT_APP_DIR)]
        app_dir: String,

        /// Entry script, relative to APP_DIR
        #[arg(long, value_name = "FILE", default_value = DEFAULT_ENTRY)]
        entry: String,

        /// Base URL exported as PUBLIC_HOST (default: auto-detected LAN address)
        #[arg(long, value_name = "URL")]
        public_host: Option<String>,

        /// Port used when the public host is auto-detected
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Python interpreter to use instead of venv/system resolution
        #[arg(long, value_name = "PATH")]
        python: Option<String>,

        /// Virtual environment directory name under APP_DIR (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Ignore any virtual environment and resolve a system interpreter
        #[arg(long, default_value = "false")]
        skip_venv: bool,

        /// Exit when the server stops instead of waiting for Enter
        #[arg(long, default_value = "false")]
        no_pause: bool,
    },

    /// Validate the app directory, entry script and interpreter without launching
    Check {
        /// Path to the app directory
        #[arg(value_name = "APP_DIR", default_value = DEFAULT_APP_DIR)]
        app_dir: String,

        /// Entry script, relative to APP_DIR
        #[arg(long, value_name = "FILE", default_value = DEFAULT_ENTRY)]
        entry: String,

        /// Python interpreter to use instead of venv/system resolution
        #[arg(long, value_name = "PATH")]
        python: Option<String>,

        /// Virtual environment directory name under APP_DIR (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,
    },

    /// Print the resolved launch plan as JSON without executing anything
    Plan {
        /// Path to the app directory
        #[arg(value_name = "APP_DIR", default_value = DEFAULT_APP_DIR)]
        app_dir: String,

        /// Entry script, relative to APP_DIR
        #[arg(long, value_name = "FILE", default_value = DEFAULT_ENTRY)]
        entry: String,

        /// Base URL exported as PUBLIC_HOST (default: auto-detected LAN address)
        #[arg(long, value_name = "URL")]
        public_host: Option<String>,

        /// Port used when the public host is auto-detected
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Python interpreter to use instead of venv/system resolution
        #[arg(long, value_name = "PATH")]
        python: Option<String>,

        /// Virtual environment directory name under APP_DIR (default: venv)
        #[arg(long, value_name = "DIR")]
        venv_dir: Option<String>,

        /// Ignore any virtual environment and resolve a system interpreter
        #[arg(long, default_value = "false")]
        skip_venv: bool,
    },
}
