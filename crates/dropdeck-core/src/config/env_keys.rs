//! Environment variable key constants and alias definitions.
//!
//! Primary variables use the `DROPDECK_*` prefix. `PUBLIC_HOST` is accepted
//! as an alias for `DROPDECK_PUBLIC_HOST` because it is the name the Python
//! server reads; setting it once configures both sides.

pub const DROPDECK_PUBLIC_HOST: &str = "DROPDECK_PUBLIC_HOST";
pub const PUBLIC_HOST_ALIASES: &[&str] = &["PUBLIC_HOST"];

/// Variable name the server process expects in its own environment.
pub const CHILD_PUBLIC_HOST: &str = "PUBLIC_HOST";

pub const DROPDECK_PORT: &str = "DROPDECK_PORT";
pub const DROPDECK_PYTHON: &str = "DROPDECK_PYTHON";
pub const DROPDECK_VENV_DIR: &str = "DROPDECK_VENV_DIR";
pub const DROPDECK_NO_PAUSE: &str = "DROPDECK_NO_PAUSE";

/// Observability and logging
pub mod observability {
    pub const DROPDECK_QUIET: &str = "DROPDECK_QUIET";
    pub const DROPDECK_LOG_LEVEL: &str = "DROPDECK_LOG_LEVEL";
    pub const DROPDECK_LOG_JSON: &str = "DROPDECK_LOG_JSON";
}
